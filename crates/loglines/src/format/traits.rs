//! Formatter trait definition

use std::error::Error;
use std::sync::Arc;

use super::stack::StackTrace;

/// Turns a log name and payload into one formatted line
///
/// Implementations:
/// - `DefaultLogFormatter`: `"{prefix} ({name}): {message}"`
/// - Custom implementations (JSON lines, timestamps, etc.)
///
/// Formatting is total: every input produces a string.
pub trait LogFormatter: Send + Sync {
    /// Format an info-level message
    fn format_message(&self, log_name: &str, message: &str) -> String;

    /// Format a warning
    fn format_warning(&self, log_name: &str, message: &str) -> String;

    /// Format an error
    fn format_error(&self, log_name: &str, message: &str) -> String;

    /// Format a whole stack trace as a single (multi-line) info-level message
    fn format_stack_trace(&self, log_name: &str, trace: &StackTrace) -> String {
        self.format_message(log_name, &trace.render())
    }
}

/// Type alias for an Arc-wrapped formatter
pub type SharedFormatter = Arc<dyn LogFormatter>;

/// Full text of an error: its message followed by its `source()` chain
pub fn describe_error(error: &dyn Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str("\nCaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::StackFrame;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection reset")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    impl Error for Inner {}

    struct Bracketed;

    impl LogFormatter for Bracketed {
        fn format_message(&self, log_name: &str, message: &str) -> String {
            format!("[{log_name}] {message}")
        }

        fn format_warning(&self, log_name: &str, message: &str) -> String {
            format!("[{log_name}] !{message}")
        }

        fn format_error(&self, log_name: &str, message: &str) -> String {
            format!("[{log_name}] !!{message}")
        }
    }

    #[test]
    fn test_describe_error_single() {
        assert_eq!(describe_error(&Inner), "connection reset");
    }

    #[test]
    fn test_describe_error_chain() {
        assert_eq!(
            describe_error(&Outer(Inner)),
            "request failed\nCaused by: connection reset"
        );
    }

    #[test]
    fn test_default_stack_trace_uses_message_format() {
        let trace = StackTrace::new(vec![
            StackFrame::new(3, 7).with_file("main.rs").with_class("App").with_method("main"),
        ]);
        assert_eq!(
            Bracketed.format_stack_trace("App", &trace),
            "[App] App.main in main.rs(3,7)"
        );
    }
}
