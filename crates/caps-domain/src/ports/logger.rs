//! Logger Capability Port
//!
//! Domain-facing log sink. Domain functions log through this port rather than
//! through a global subscriber so tests can substitute a recording sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a domain log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Unexpected but handled
    Warn,
    /// Failure
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Log sink interface
pub trait Logger: Send + Sync {
    /// Record a message at the given level
    fn log(&self, level: LogLevel, message: &str);

    /// Provider name for diagnostics
    fn provider_name(&self) -> &str;

    /// Record a debug message
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Record an info message
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Record a warning
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Record an error
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
