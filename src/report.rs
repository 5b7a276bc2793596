//! User-facing output. Diagnostics for developers go through `log` instead.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use log::debug;

use crate::errors::AppError;
use crate::options::Verbosity;

/// Salmon accent used for the path itself.
const PATH_RGB: (u8, u8, u8) = (250, 128, 114);

/// Writes status lines according to an explicit verbosity and color setting.
///
/// The rendered path and info lines go to `out`; warnings and errors go to `err`.
pub struct Reporter<O = io::Stdout, E = io::Stderr> {
    verbosity: Verbosity,
    color: bool,
    out: O,
    err: E,
}

impl Reporter {
    pub fn stdio(verbosity: Verbosity, color: bool) -> Self {
        Self::new(verbosity, color, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(verbosity: Verbosity, color: bool, out: O, err: E) -> Self {
        Self {
            verbosity,
            color,
            out,
            err,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Highlight a value inside a message.
    pub fn em(&self, value: &str) -> String {
        self.paint(value, |s| s.cyan().bold())
    }

    /// The path styled the way the result line shows it.
    pub fn styled_path(&self, path: &str) -> String {
        let (r, g, b) = PATH_RGB;
        self.paint(path, |s| s.truecolor(r, g, b))
    }

    /// The result line. Plain in verbose mode, where narration carries the color.
    ///
    /// Unlike narration, failing to print the result is an error.
    pub fn path(&mut self, rendered: &str) -> io::Result<()> {
        let line = match self.verbosity {
            Verbosity::Silent => return Ok(()),
            Verbosity::Normal => self.styled_path(rendered),
            Verbosity::Verbose => rendered.to_owned(),
        };
        writeln!(self.out, "{line}")
    }

    /// Narration, only shown in verbose mode.
    pub fn info(&mut self, message: &str) {
        if !self.is_verbose() {
            return;
        }
        let label = self.paint("info", |s| s.blue().bold());
        if let Err(e) = writeln!(self.out, "{label}: {message}") {
            debug!("failed to write info line: {e}");
        }
    }

    pub fn warn(&mut self, message: &str) {
        if self.verbosity == Verbosity::Silent {
            return;
        }
        let label = self.paint("warning", |s| s.yellow().bold());
        if let Err(e) = writeln!(self.err, "{label}: {message}") {
            debug!("failed to write warning: {e}");
        }
    }

    pub fn error(&mut self, message: &str) {
        if self.verbosity == Verbosity::Silent {
            return;
        }
        let label = self.paint("error", |s| s.red().bold());
        if let Err(e) = writeln!(self.err, "{label}: {message}") {
            debug!("failed to write error: {e}");
        }
    }

    /// Report a failed invocation, naming the offending value and, in verbose
    /// mode, the flag that caused it.
    pub fn failure(&mut self, error: &AppError) {
        match error {
            AppError::InvalidSearchTarget(segment) => {
                let message = format!(
                    "Cannot search for {}. Argument {} required",
                    self.em(segment),
                    self.em("segment")
                );
                self.error(&message);
            }
            AppError::SearchNotFound(query) => {
                let message = format!("Could not find {}", self.em(query));
                self.error(&message);
            }
            AppError::NotADirectory(path) => {
                let message = format!(
                    "{} is not a {}, and can therefore {}!",
                    self.em(&path.to_string_lossy()),
                    self.em("directory"),
                    self.em("not change")
                );
                self.warn(&message);
            }
            other => self.error(&other.to_string()),
        }

        if let Some(flag) = error.flag() {
            let message = format!("Caused by flag {}", self.em(flag));
            self.info(&message);
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_owned()
        }
    }
}

#[cfg(test)]
impl<O, E> Reporter<O, E> {
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
