//! Script error reporting
//!
//! The host hands uncaught script errors to an [`ErrorObserver`] before the
//! error continues to unwind. Observers are passed in explicitly; nothing is
//! installed process-wide.

use std::time::SystemTime;

use thiserror::Error;

use crate::color::ColorRgba;
use crate::host::Console;

/// Color of the developer-information line
const DEVELOPER_INFO_COLOR: [f64; 4] = [44.0, 3.0, 252.0, 255.0];

/// Uncaught error raised by script code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ScriptError {
    /// Error message
    pub message: String,
    /// Source line, when the host knows it
    pub line: Option<u32>,
    /// When the error was reported; `None` until an observer stamps it
    pub time: Option<SystemTime>,
}

impl ScriptError {
    /// Create an unreported error
    pub fn new(message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            message: message.into(),
            line,
            time: None,
        }
    }

    /// Whether an observer has already handled this error
    pub const fn is_reported(&self) -> bool {
        self.time.is_some()
    }
}

/// Receives script errors and returns them, possibly annotated
pub trait ErrorObserver {
    /// Inspect `err` and hand it back for normal unwinding
    fn observe(&mut self, err: ScriptError) -> ScriptError;
}

/// Observer that stamps errors and prints a diagnostic to the host console
pub struct ConsoleReporter<C: Console> {
    console: C,
    reported: usize,
}

impl<C: Console> ConsoleReporter<C> {
    /// Report through `console`
    pub const fn new(console: C) -> Self {
        Self { console, reported: 0 }
    }

    /// Number of errors reported so far
    pub const fn reported(&self) -> usize {
        self.reported
    }

    /// Underlying console
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Give back the console
    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console> ErrorObserver for ConsoleReporter<C> {
    fn observe(&mut self, mut err: ScriptError) -> ScriptError {
        if err.is_reported() {
            return err;
        }

        err.time = Some(SystemTime::now());
        self.reported += 1;

        let line = err.line.map_or_else(|| "undefined".to_string(), |l| l.to_string());
        log::error!("Script error at line {line}: {}", err.message);

        self.console
            .print("Found error in the script code, please send next message to the developer: \n");
        self.console.print_color(
            &ColorRgba::new(DEVELOPER_INFO_COLOR),
            &format!("Information for the developer: error at line {line}\n\n"),
        );

        err
    }
}
