use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SGR sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Importance of a log record. Only picks the display color, nothing is ever filtered out.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Fatal,
    Error,
    Info,
    Warning,
    Debug,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown log severity '{0}'")]
pub struct ParseSeverityError(pub String);

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Info,
        Severity::Warning,
        Severity::Debug,
    ];

    /// The SGR escape written in front of a message of this severity.
    pub const fn color(self) -> &'static str {
        match self {
            Severity::Fatal => "\x1b[0;31m",
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
            Severity::Info => "\x1b[0;33m",
            Severity::Debug => "\x1b[0;32m",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Fatal => "Fatal",
            Severity::Error => "Error",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Debug => "Debug",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sev = match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Severity::Fatal,
            "error" => Severity::Error,
            "info" => Severity::Info,
            "warning" | "warn" => Severity::Warning,
            "debug" => Severity::Debug,
            _ => return Err(ParseSeverityError(s.to_string())),
        };
        Ok(sev)
    }
}
