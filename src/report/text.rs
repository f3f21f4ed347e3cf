//! # Plain text reports
//!
//! Writes events as lines of text, for the console or a file.
use std::fmt::Display;
use std::io;
use std::io::Write;

use itertools::Itertools;
use log::warn;

use crate::report::{Event, Observer, Verbosity};

/// Renders events as text to any writer.
///
/// Writing never interrupts a solve. The first write error is kept, no more is written after it,
/// and it is handed back by `into_inner`.
pub struct TextReport<W> {
    writer: W,
    verbosity: Verbosity,
    error: Option<io::Error>,
}

impl<W: Write> TextReport<W> {
    /// Create a new report.
    ///
    /// # Arguments
    ///
    /// * `writer`: Destination, for example `io::stdout()` or a file.
    /// * `verbosity`: Which events to render.
    pub fn new(writer: W, verbosity: Verbosity) -> Self {
        Self { writer, verbosity, error: None }
    }

    /// Flush and return the writer.
    ///
    /// # Errors
    ///
    /// The first error that occurred while writing the report.
    pub fn into_inner(mut self) -> io::Result<W> {
        if let Some(error) = self.error {
            return Err(error);
        }

        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_event<F: Display>(&mut self, event: &Event<'_, F>) -> io::Result<()> {
        writeln!(self.writer, "{}", event.summary())?;

        match event {
            Event::ProblemDefined(problem) => {
                write!(self.writer, "A = \n{}", problem.constraints())?;
                writeln!(self.writer, "b = [{}]", problem.b().iter().join(", "))?;
                writeln!(self.writer, "c = [{}]", problem.cost().iter().join(", "))
            },
            Event::TableauSnapshot { tableau, .. } => write!(self.writer, "{tableau}"),
            _ => Ok(()),
        }
    }
}

impl<F: Display, W: Write> Observer<F> for TextReport<W> {
    fn notify(&mut self, event: Event<'_, F>) {
        if self.error.is_some() || !self.verbosity.includes(&event) {
            return;
        }

        if let Err(error) = self.write_event(&event) {
            warn!("Could not write the report, no further events will be written: {error}");
            self.error = Some(error);
        }
    }
}
