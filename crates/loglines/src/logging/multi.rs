//! Logger that forwards every call to several child loggers

use std::error::Error;

use super::traits::{Logger, SharedLogger};
use crate::error::{require_name, LogError, LogResult};
use crate::format::StackTrace;

/// Name reported by a `MultiLog` built with [`MultiLog::new`]
pub const MULTI_LOG_NAME: &str = "MultiLog";

/// A logger that forwards each call, unchanged, to every child in order
///
/// The `MultiLog` does no formatting of its own: each child runs its own
/// formatter and writers.
///
/// # Failures
///
/// Every child is attempted even if an earlier one fails. If any fail, the
/// call returns [`LogError::Fanout`] with the failures in child order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use loglines::{Logger, MultiLog, TestLog};
///
/// let a = Arc::new(TestLog::new());
/// let b = Arc::new(TestLog::new());
/// let multi = MultiLog::new(vec![a.clone(), b.clone()]);
///
/// multi.print("hello").unwrap();
/// assert_eq!(a.logged_messages(), vec!["Info (Test): hello"]);
/// assert_eq!(b.logged_messages(), vec!["Info (Test): hello"]);
/// ```
pub struct MultiLog {
    name: String,
    logs: Vec<SharedLogger>,
}

impl Default for MultiLog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MultiLog {
    /// Create a multi-log over `logs` (possibly empty)
    pub fn new(logs: Vec<SharedLogger>) -> Self {
        Self {
            name: MULTI_LOG_NAME.to_string(),
            logs,
        }
    }

    /// Create a multi-log reporting a custom name
    pub fn with_name(name: impl Into<String>, logs: Vec<SharedLogger>) -> LogResult<Self> {
        Ok(Self {
            name: require_name("multi-log", name.into())?,
            logs,
        })
    }

    /// Child loggers, in dispatch order
    pub fn logs(&self) -> &[SharedLogger] {
        &self.logs
    }

    fn fan_out(&self, call: impl Fn(&dyn Logger) -> LogResult<()>) -> LogResult<()> {
        let failures: Vec<LogError> = self
            .logs
            .iter()
            .filter_map(|log| call(log.as_ref()).err())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::Fanout(failures))
        }
    }
}

impl Logger for MultiLog {
    fn name(&self) -> &str {
        &self.name
    }

    fn print(&self, message: &str) -> LogResult<()> {
        self.fan_out(|log| log.print(message))
    }

    fn print_stack_trace(&self, trace: &StackTrace) -> LogResult<()> {
        self.fan_out(|log| log.print_stack_trace(trace))
    }

    fn print_stack_trace_with_message(&self, trace: &StackTrace, message: &str) -> LogResult<()> {
        self.fan_out(|log| log.print_stack_trace_with_message(trace, message))
    }

    fn print_error(&self, error: &dyn Error) -> LogResult<()> {
        self.fan_out(|log| log.print_error(error))
    }

    fn print_error_with_message(&self, error: &dyn Error, message: &str) -> LogResult<()> {
        self.fan_out(|log| log.print_error_with_message(error, message))
    }

    fn warn(&self, message: &str) -> LogResult<()> {
        self.fan_out(|log| log.warn(message))
    }

    fn err(&self, message: &str) -> LogResult<()> {
        self.fan_out(|log| log.err(message))
    }

    fn report_error(&self, error: &dyn Error) -> LogResult<()> {
        self.fan_out(|log| log.report_error(error))
    }

    fn report_error_with_message(&self, error: &dyn Error, message: &str) -> LogResult<()> {
        self.fan_out(|log| log.report_error_with_message(error, message))
    }
}

impl From<Vec<SharedLogger>> for MultiLog {
    fn from(logs: Vec<SharedLogger>) -> Self {
        Self::new(logs)
    }
}

impl FromIterator<SharedLogger> for MultiLog {
    fn from_iter<I: IntoIterator<Item = SharedLogger>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// Implement Debug manually since Arc<dyn Logger> doesn't implement Debug
impl std::fmt::Debug for MultiLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.logs.iter().map(|log| log.name()).collect();
        f.debug_struct("MultiLog")
            .field("name", &self.name)
            .field("logs", &names)
            .finish()
    }
}
