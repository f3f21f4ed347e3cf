//! # Reading of linear programs
//!
//! Problems are read from JSON files of the form
//!
//! ```json
//! { "a": [[1, 1, 1], [1, -1, 0]], "b": [4, 1], "c": [-1, -2] }
//! ```
//!
//! where `a` holds the rows of the constraint matrix. The cost vector `c` may be shorter than the
//! number of variables.
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::linear_program::standard_form::StandardForm;
use crate::io::error::ImportError;

pub mod error;

/// Problem data as it appears in a file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ProblemFile {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    #[serde(default)]
    c: Vec<f64>,
}

/// Import a problem from a file.
///
/// # Errors
///
/// When a file cannot be found or read, the contents are not valid JSON, or the data doesn't
/// describe a linear program in standard form.
pub fn import(file_path: &Path) -> Result<StandardForm<f64>, ImportError> {
    let program = fs::read_to_string(file_path)?;
    parse(&program)
}

/// Parse a problem from a JSON string.
///
/// # Errors
///
/// When the contents are not valid JSON, or the data doesn't describe a linear program in standard
/// form.
pub fn parse(program: &str) -> Result<StandardForm<f64>, ImportError> {
    let ProblemFile { a, b, c } = serde_json::from_str(program)?;
    let problem = StandardForm::from_rows(a, b, c)?;
    Ok(problem)
}
