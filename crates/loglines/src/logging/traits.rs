//! Logger trait definition

use std::error::Error;
use std::sync::Arc;

use crate::error::LogResult;
use crate::format::StackTrace;

/// Context line written before an error's description
pub const ERROR_CONTEXT: &str = "Exception:";

/// A named logger with leveled output
///
/// Implementations:
/// - `Log`: formats once, writes to every registered writer
/// - `MultiLog`: forwards every call to child loggers
/// - `TestLog`: formats into an in-memory list
///
/// Every method returns the first failure of the underlying destination;
/// nothing is swallowed.
///
/// The trait only covers emitting lines. Writers and the formatter are
/// managed on the concrete type (`Log::add_writer`, `Log::remove_writer`,
/// `Log::set_formatter`, `TestLog::set_formatter`); `MultiLog` has neither
/// and configures nothing on its children. To reconfigure a logger that is
/// also shared as a `SharedLogger`, keep an `Arc<Log>` and hand out a clone:
///
/// ```rust
/// use std::sync::Arc;
/// use loglines::{Log, Logger, SharedLogger, TestWriter};
///
/// let log = Arc::new(Log::new("Worker")?);
/// let shared: SharedLogger = log.clone();
///
/// let writer = Arc::new(TestWriter::new());
/// log.add_writer(writer.clone());
/// shared.print("ready")?;
/// assert_eq!(writer.logged_messages(), vec!["Info (Worker): ready"]);
/// # Ok::<(), loglines::LogError>(())
/// ```
pub trait Logger: Send + Sync {
    /// Name included in every formatted line
    fn name(&self) -> &str;

    /// Log an info-level message
    fn print(&self, message: &str) -> LogResult<()>;

    /// Log a whole stack trace as one info-level message
    fn print_stack_trace(&self, trace: &StackTrace) -> LogResult<()>;

    /// Log `message`, then the stack trace, both at info level
    fn print_stack_trace_with_message(&self, trace: &StackTrace, message: &str) -> LogResult<()>;

    /// Log an error value as two error lines: `"Exception:"`, then its description
    fn print_error(&self, error: &dyn Error) -> LogResult<()>;

    /// Log `message` as an error, then the error value as in [`Logger::print_error`]
    fn print_error_with_message(&self, error: &dyn Error, message: &str) -> LogResult<()>;

    /// Log a warning
    fn warn(&self, message: &str) -> LogResult<()>;

    /// Log an error message
    fn err(&self, message: &str) -> LogResult<()>;

    /// Alias of [`Logger::print_error`]
    fn report_error(&self, error: &dyn Error) -> LogResult<()> {
        self.print_error(error)
    }

    /// Alias of [`Logger::print_error_with_message`]
    fn report_error_with_message(&self, error: &dyn Error, message: &str) -> LogResult<()> {
        self.print_error_with_message(error, message)
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log an info-level message with format arguments
    fn print_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.print(&args.to_string())
    }

    /// Log a warning with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.warn(&args.to_string())
    }

    /// Log an error message with format arguments
    fn err_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.err(&args.to_string())
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)*) => {
        $logger.print(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_err {
    ($logger:expr, $($arg:tt)*) => {
        $logger.err(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TestLog;

    #[test]
    fn test_fmt_extension() {
        let log = TestLog::new();
        log.print_fmt(format_args!("{} + {} = {}", 1, 2, 3)).unwrap();
        log.warn_fmt(format_args!("{}% full", 90)).unwrap();
        log.err_fmt(format_args!("code {}", 404)).unwrap();

        assert_eq!(
            log.logged_messages(),
            vec![
                "Info (Test): 1 + 2 = 3",
                "Warn (Test): 90% full",
                "Error (Test): code 404",
            ]
        );
    }

    #[test]
    fn test_macros() {
        let log = TestLog::new();
        crate::log_print!(log, "started {}", "worker").unwrap();
        crate::log_warn!(log, "retry {}", 2).unwrap();
        crate::log_err!(log, "gave up").unwrap();

        assert_eq!(log.logged_messages().len(), 3);
        assert_eq!(log.logged_messages()[1], "Warn (Test): retry 2");
    }

    #[test]
    fn test_shared_logger_is_object_safe() {
        let log: SharedLogger = Arc::new(TestLog::new());
        log.print("through a trait object").unwrap();
        assert_eq!(log.name(), "Test");
    }
}
