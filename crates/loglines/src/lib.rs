//! Loglines
//!
//! Small, composable, synchronous logging. A logger formats each call
//! once and hands the line to its writers; the destination (console, file,
//! the `log` facade, an in-memory buffer, several at once) is swapped
//! without touching calling code.
//!
//! ## Composition
//!
//! - `format`: `LogFormatter` turns `(name, payload)` into a line
//! - `writers`: `LogWriter` appends lines to a destination
//! - `logging`: `Logger` front ends (`Log`, `MultiLog`, `TestLog`)
//! - `config`: YAML/environment configuration that builds a ready `Log`
//!
//! ```rust
//! use std::sync::Arc;
//! use loglines::{Log, Logger, MultiLog, TestLog, TestWriter};
//!
//! let writer = Arc::new(TestWriter::new());
//! let log = Log::new("Worker")?;
//! log.add_writer(writer.clone());
//!
//! log.warn("disk low")?;
//! assert_eq!(writer.logged_warnings(), vec!["Warn (Worker): disk low"]);
//!
//! // Fan the same call out to several loggers
//! let audit = Arc::new(TestLog::new());
//! let multi = MultiLog::new(vec![Arc::new(log), audit.clone()]);
//! multi.err("shutting down")?;
//! assert_eq!(audit.logged_messages(), vec!["Error (Test): shutting down"]);
//! # Ok::<(), loglines::LogError>(())
//! ```

pub mod error;
pub mod format;
pub mod writers;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use error::{LogError, LogResult};

pub use format::{
    LogFormatter, DefaultLogFormatter, FormatterDefaults, Prefixes,
    StackFrame, StackTrace, describe_error,
};

pub use writers::{
    Level, LogWriter, SharedWriter,
    ConsoleWriter, FileWriter, FileWriterRegistry, TraceWriter, TestWriter,
};

pub use logging::{Logger, LoggerExt, SharedLogger, Log, MultiLog, TestLog};

pub use config::LogConfig;
