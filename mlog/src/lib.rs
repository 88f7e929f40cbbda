//! Leveled, color-coded console logging.
//!
//! Each record is written to stdout as `<color><message>\x1b[0m\n`, the color picked by its
//! [`Severity`]. Use the [`log_fatal!`], [`log_error!`], [`log_info!`], [`log_warning!`] and
//! [`log_debug!`] macros; building with the `disabled` feature turns all of them into no-ops.

use std::{fmt::Arguments, io};

use loggers::console::ConsoleLogger;

pub use severity::Severity;

pub mod loggers;
pub mod severity;
mod macros;

/// `false` when the crate was built with the `disabled` feature.
pub const ENABLED: bool = !cfg!(feature = "disabled");

/// A destination for log records.
pub trait Logger {
    /// Writes one record, returning whether it made it to the destination.
    fn log(&mut self, severity: Severity, args: Arguments<'_>) -> bool;
}

/// Writes one colored record to stdout. Write failures are ignored.
pub fn log(severity: Severity, args: Arguments<'_>) {
    ConsoleLogger::new(io::stdout()).log(severity, args);
}
