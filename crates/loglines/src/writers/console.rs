//! Console writer implementation

use std::io::Write;

use super::traits::LogWriter;
use crate::error::LogResult;

/// A writer that outputs to the console
///
/// Messages and warnings go to stdout, errors to stderr. Each stream is
/// locked for the duration of one line, so lines from different threads
/// never interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    /// Create a new console writer
    pub fn new() -> Self {
        Self
    }
}

impl LogWriter for ConsoleWriter {
    fn write_message(&self, line: &str) -> LogResult<()> {
        writeln!(std::io::stdout().lock(), "{}", line)?;
        Ok(())
    }

    fn write_warning(&self, line: &str) -> LogResult<()> {
        writeln!(std::io::stdout().lock(), "{}", line)?;
        Ok(())
    }

    fn write_error(&self, line: &str) -> LogResult<()> {
        writeln!(std::io::stderr().lock(), "{}", line)?;
        Ok(())
    }
}
