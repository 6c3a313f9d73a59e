//! In-memory logger for tests

use std::error::Error;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::traits::{Logger, ERROR_CONTEXT};
use crate::error::LogResult;
use crate::format::{describe_error, DefaultLogFormatter, SharedFormatter, StackTrace};

/// Name every `TestLog` reports
pub const TEST_LOG_NAME: &str = "Test";

/// A logger that formats like `Log` but appends lines to an in-memory list
///
/// All levels share one ordered list, so assertions can check the exact
/// sequence a piece of code produced.
///
/// # Example
///
/// ```
/// use loglines::{Logger, TestLog};
///
/// let log = TestLog::new();
/// log.print("ready").unwrap();
/// log.err("failed").unwrap();
///
/// assert_eq!(
///     log.logged_messages(),
///     vec!["Info (Test): ready", "Error (Test): failed"]
/// );
/// ```
pub struct TestLog {
    formatter: RwLock<SharedFormatter>,
    logged: Mutex<Vec<String>>,
}

impl Default for TestLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLog {
    /// Create an empty test log with a default formatter
    pub fn new() -> Self {
        Self {
            formatter: RwLock::new(Arc::new(DefaultLogFormatter::new())),
            logged: Mutex::new(Vec::new()),
        }
    }

    /// Replace the formatter, builder style
    pub fn with_formatter(self, formatter: SharedFormatter) -> Self {
        self.set_formatter(formatter);
        self
    }

    pub fn formatter(&self) -> SharedFormatter {
        Arc::clone(&self.formatter.read())
    }

    pub fn set_formatter(&self, formatter: SharedFormatter) {
        *self.formatter.write() = formatter;
    }

    /// Every formatted line so far, in order
    pub fn logged_messages(&self) -> Vec<String> {
        self.logged.lock().clone()
    }

    /// All lines joined with newlines
    pub fn contents(&self) -> String {
        self.logged.lock().join("\n")
    }

    /// Forget everything logged so far; the formatter is kept
    pub fn reset(&self) {
        self.logged.lock().clear();
    }

    fn append(&self, line: String) -> LogResult<()> {
        self.logged.lock().push(line);
        Ok(())
    }
}

impl Logger for TestLog {
    fn name(&self) -> &str {
        TEST_LOG_NAME
    }

    fn print(&self, message: &str) -> LogResult<()> {
        self.append(self.formatter().format_message(TEST_LOG_NAME, message))
    }

    fn print_stack_trace(&self, trace: &StackTrace) -> LogResult<()> {
        self.append(self.formatter().format_stack_trace(TEST_LOG_NAME, trace))
    }

    fn print_stack_trace_with_message(&self, trace: &StackTrace, message: &str) -> LogResult<()> {
        self.print(message)?;
        self.print_stack_trace(trace)
    }

    fn print_error(&self, error: &dyn Error) -> LogResult<()> {
        self.err(ERROR_CONTEXT)?;
        self.err(&describe_error(error))
    }

    fn print_error_with_message(&self, error: &dyn Error, message: &str) -> LogResult<()> {
        self.err(message)?;
        self.print_error(error)
    }

    fn warn(&self, message: &str) -> LogResult<()> {
        self.append(self.formatter().format_warning(TEST_LOG_NAME, message))
    }

    fn err(&self, message: &str) -> LogResult<()> {
        self.append(self.formatter().format_error(TEST_LOG_NAME, message))
    }
}

impl std::fmt::Debug for TestLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestLog")
            .field("logged", &self.logged.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{LogFormatter, StackFrame};
    use std::fmt;

    #[derive(Debug)]
    struct TestError;

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "something broke")
        }
    }

    impl Error for TestError {}

    #[test]
    fn test_initializes() {
        let log = TestLog::new();
        assert_eq!(log.name(), "Test");
        assert!(log.logged_messages().is_empty());
    }

    #[test]
    fn test_logs_each_level_in_order() {
        let log = TestLog::new();
        log.print("message").unwrap();
        log.warn("warning").unwrap();
        log.err("error").unwrap();

        assert_eq!(
            log.logged_messages(),
            vec![
                "Info (Test): message",
                "Warn (Test): warning",
                "Error (Test): error",
            ]
        );
        assert_eq!(
            log.contents(),
            "Info (Test): message\nWarn (Test): warning\nError (Test): error"
        );
    }

    #[test]
    fn test_logs_error_value() {
        let log = TestLog::new();
        log.print_error(&TestError).unwrap();
        log.report_error_with_message(&TestError, "while saving").unwrap();

        assert_eq!(
            log.logged_messages(),
            vec![
                "Error (Test): Exception:",
                "Error (Test): something broke",
                "Error (Test): while saving",
                "Error (Test): Exception:",
                "Error (Test): something broke",
            ]
        );
    }

    #[test]
    fn test_logs_stack_trace() {
        let log = TestLog::new();
        let trace = StackTrace::new(vec![StackFrame::new(1, 2)
            .with_file("File.cs")
            .with_class("ClassName")
            .with_method("MethodName")]);

        log.print_stack_trace_with_message(&trace, "context").unwrap();

        assert_eq!(
            log.logged_messages(),
            vec![
                "Info (Test): context",
                "Info (Test): ClassName.MethodName in File.cs(1,2)",
            ]
        );
    }

    #[test]
    fn test_reset_keeps_formatter() {
        let formatter: SharedFormatter =
            Arc::new(DefaultLogFormatter::new().with_warning_prefix("WARNING"));
        let log = TestLog::new().with_formatter(formatter);

        log.warn("first").unwrap();
        log.reset();
        assert!(log.logged_messages().is_empty());

        log.warn("second").unwrap();
        assert_eq!(log.logged_messages(), vec!["WARNING (Test): second"]);
        assert_eq!(log.formatter().format_warning("X", "y"), "WARNING (X): y");
    }
}
