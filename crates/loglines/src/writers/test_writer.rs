//! In-memory writer for tests

use parking_lot::Mutex;

use super::traits::LogWriter;
use crate::error::LogResult;

#[derive(Debug, Default)]
struct Logged {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

/// A writer that records every line, one list per level
///
/// Useful for asserting on what a `Log` produced without touching a real
/// destination.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use loglines::{Log, Logger, TestWriter};
///
/// let writer = Arc::new(TestWriter::new());
/// let log = Log::new("Worker").unwrap();
/// log.add_writer(writer.clone());
///
/// log.warn("disk low").unwrap();
/// assert_eq!(writer.logged_warnings(), vec!["Warn (Worker): disk low"]);
/// ```
#[derive(Debug, Default)]
pub struct TestWriter {
    logged: Mutex<Logged>,
}

impl TestWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_messages(&self) -> Vec<String> {
        self.logged.lock().messages.clone()
    }

    pub fn logged_warnings(&self) -> Vec<String> {
        self.logged.lock().warnings.clone()
    }

    pub fn logged_errors(&self) -> Vec<String> {
        self.logged.lock().errors.clone()
    }

    /// Total number of lines recorded across all levels
    pub fn len(&self) -> usize {
        let logged = self.logged.lock();
        logged.messages.len() + logged.warnings.len() + logged.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all three lists under a single lock
    pub fn reset(&self) {
        let mut logged = self.logged.lock();
        logged.messages.clear();
        logged.warnings.clear();
        logged.errors.clear();
    }
}

impl LogWriter for TestWriter {
    fn write_message(&self, line: &str) -> LogResult<()> {
        self.logged.lock().messages.push(line.to_string());
        Ok(())
    }

    fn write_warning(&self, line: &str) -> LogResult<()> {
        self.logged.lock().warnings.push(line.to_string());
        Ok(())
    }

    fn write_error(&self, line: &str) -> LogResult<()> {
        self.logged.lock().errors.push(line.to_string());
        Ok(())
    }
}
