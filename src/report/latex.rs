//! # LaTeX reports
//!
//! Writes a complete LaTeX document that follows the solve, with every tableau typeset as a matrix.
use std::fmt::Display;
use std::io;
use std::io::Write;

use itertools::Itertools;
use log::warn;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::report::{Event, Observer, Verbosity};

const PREAMBLE: &str = r"\documentclass[a4paper,12pt]{article}
\usepackage[utf8]{inputenc}
\usepackage{amsmath,amssymb,amsfonts}
\begin{document}
";

/// Renders events as the body of a LaTeX document.
///
/// The preamble is written on creation, the document is closed by `finish`. Like the
/// `TextReport`, the first write error is kept and returned at the end.
pub struct LatexReport<W> {
    writer: W,
    verbosity: Verbosity,
    error: Option<io::Error>,
}

impl<W: Write> LatexReport<W> {
    /// Create a new report and write the preamble.
    pub fn new(mut writer: W, verbosity: Verbosity) -> Self {
        let error = writer.write_all(PREAMBLE.as_bytes()).err();
        Self { writer, verbosity, error }
    }

    /// Close the document and return the writer.
    ///
    /// # Errors
    ///
    /// The first error that occurred while writing the report.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error {
            return Err(error);
        }

        self.writer.write_all(br"\end{document}")?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_event<F: Display>(&mut self, event: &Event<'_, F>) -> io::Result<()> {
        match event {
            Event::ProblemDefined(problem) => {
                let c = [problem.cost().iter().join(" & ")];
                let b = problem.b().iter().map(ToString::to_string).collect::<Vec<_>>();
                let a = matrix_lines(problem.constraints());

                writeln!(self.writer, r"\begin{{eqnarray*}} \min & {}x \\", bmatrix(&c))?;
                writeln!(self.writer, r"\text{{s. t.}} & {}x = {}", bmatrix(&a), bmatrix(&b))?;
                writeln!(self.writer, r"\end{{eqnarray*}}")
            },
            Event::TableauSnapshot { tableau, .. } => {
                writeln!(self.writer, r"\par {}", event.summary())?;
                writeln!(self.writer, r"\[{}\]", bmatrix(&matrix_lines(tableau)))
            },
            _ => writeln!(self.writer, r"\par {}", event.summary()),
        }
    }
}

impl<F: Display, W: Write> Observer<F> for LatexReport<W> {
    fn notify(&mut self, event: Event<'_, F>) {
        if self.error.is_some() || !self.verbosity.includes(&event) {
            return;
        }

        if let Err(error) = self.write_event(&event) {
            warn!("Could not write the LaTeX report, no further events will be written: {error}");
            self.error = Some(error);
        }
    }
}

fn matrix_lines<F: Display>(matrix: &DenseMatrix<F>) -> Vec<String> {
    matrix.rows()
        .map(|row| row.iter().join(" & "))
        .collect()
}

/// A `bmatrix` environment with one row per line.
fn bmatrix(lines: &[String]) -> String {
    let rows = lines.iter()
        .map(|line| format!("  {line}\\\\\n"))
        .collect::<String>();
    format!("\\begin{{bmatrix}}\n{rows}\\end{{bmatrix}}")
}
