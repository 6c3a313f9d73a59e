//! Writer trait definition

use std::sync::Arc;

use crate::error::LogResult;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Message,
    Warning,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Message => write!(f, "message"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// A destination for formatted log lines
///
/// Implementations:
/// - `ConsoleWriter`: stdout/stderr
/// - `FileWriter`: one shared writer per file, truncated once per process
/// - `TraceWriter`: forwards to the `log` facade
/// - `TestWriter`: in-memory lists for assertions
///
/// Each call appends exactly one line and must not alter its content. The
/// writer owns line termination. Writers shared between loggers serialize
/// their own writes.
pub trait LogWriter: Send + Sync {
    /// Append an info-level line
    fn write_message(&self, line: &str) -> LogResult<()>;

    /// Append a warning line
    fn write_warning(&self, line: &str) -> LogResult<()>;

    /// Append an error line
    fn write_error(&self, line: &str) -> LogResult<()>;

    /// Append a line at the given level
    fn write(&self, level: Level, line: &str) -> LogResult<()> {
        match level {
            Level::Message => self.write_message(line),
            Level::Warning => self.write_warning(line),
            Level::Error => self.write_error(line),
        }
    }
}

/// Type alias for an Arc-wrapped writer
pub type SharedWriter = Arc<dyn LogWriter>;
