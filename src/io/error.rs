//! # Error reporting for reading of linear program files
//!
//! Describes any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

use crate::algorithm::error::InvalidInput;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    Io(#[from] io::Error),
    /// Contents of the file could not be parsed.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    #[error("could not parse the problem file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file is well-formed, but doesn't describe a linear program in standard form.
    ///
    /// For example, the right-hand side might be negative somewhere.
    #[error("the problem file is inconsistent: {0}")]
    Problem(#[from] InvalidInput),
}
