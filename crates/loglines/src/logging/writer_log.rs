//! The default logger: one formatter, any number of writers

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::traits::{Logger, ERROR_CONTEXT};
use crate::error::{require_name, LogResult};
use crate::format::{describe_error, DefaultLogFormatter, SharedFormatter, StackTrace};
use crate::writers::{ConsoleWriter, FileWriter, Level, SharedWriter, TraceWriter};

/// A named logger that formats each call once and hands the line to every writer
///
/// # Thread Safety
///
/// The writer list and the formatter are guarded by the `Log` itself.
/// Each dispatch works on a snapshot of the writer list taken under the
/// lock, so a concurrent `add_writer`/`remove_writer` never leaves it
/// iterating a half-updated list. Writers are called in insertion order,
/// one at a time.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use loglines::{Log, Logger, TestWriter};
///
/// let writer = Arc::new(TestWriter::new());
/// let log = Log::with_writers("Worker", vec![writer.clone()]).unwrap();
///
/// log.print("started").unwrap();
/// assert_eq!(writer.logged_messages(), vec!["Info (Worker): started"]);
/// ```
pub struct Log {
    name: String,
    formatter: RwLock<SharedFormatter>,
    writers: Mutex<Vec<SharedWriter>>,
}

impl Log {
    /// Create a logger with no writers and a default formatter
    ///
    /// Fails with `InvalidArgument` if `name` is blank.
    pub fn new(name: impl Into<String>) -> LogResult<Self> {
        Ok(Self {
            name: require_name("log", name.into())?,
            formatter: RwLock::new(Arc::new(DefaultLogFormatter::new())),
            writers: Mutex::new(Vec::new()),
        })
    }

    /// Create a logger with an initial list of writers
    ///
    /// Duplicate writers (same `Arc`) are kept once.
    pub fn with_writers(name: impl Into<String>, writers: Vec<SharedWriter>) -> LogResult<Self> {
        let log = Self::new(name)?;
        for writer in writers {
            log.add_writer(writer);
        }
        Ok(log)
    }

    /// Logger writing to stdout/stderr
    pub fn console(name: impl Into<String>) -> LogResult<Self> {
        Self::with_writers(name, vec![Arc::new(ConsoleWriter::new())])
    }

    /// Logger writing to the shared writer for `path`
    pub fn file(name: impl Into<String>, path: impl AsRef<Path>) -> LogResult<Self> {
        // validate before the registry truncates anything
        let name = require_name("log", name.into())?;
        Self::with_writers(name, vec![FileWriter::instance(path)?])
    }

    /// Logger writing to the shared writer for the default file name
    pub fn default_file(name: impl Into<String>) -> LogResult<Self> {
        let name = require_name("log", name.into())?;
        Self::with_writers(name, vec![FileWriter::default_instance()?])
    }

    /// Logger writing to the `log` facade through the shared trace writer
    pub fn trace(name: impl Into<String>) -> LogResult<Self> {
        Self::with_writers(name, vec![TraceWriter::instance()])
    }

    /// Replace the formatter, builder style
    pub fn with_formatter(self, formatter: SharedFormatter) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// Current formatter
    pub fn formatter(&self) -> SharedFormatter {
        Arc::clone(&self.formatter.read())
    }

    /// Replace the formatter used by subsequent calls
    pub fn set_formatter(&self, formatter: SharedFormatter) {
        *self.formatter.write() = formatter;
    }

    /// Add a writer unless this exact writer is already registered
    pub fn add_writer(&self, writer: SharedWriter) {
        let mut writers = self.writers.lock();
        if !writers.iter().any(|w| Arc::ptr_eq(w, &writer)) {
            writers.push(writer);
        }
    }

    /// Remove the first occurrence of this exact writer, if present
    pub fn remove_writer(&self, writer: &SharedWriter) {
        let mut writers = self.writers.lock();
        if let Some(pos) = writers.iter().position(|w| Arc::ptr_eq(w, writer)) {
            writers.remove(pos);
        }
    }

    /// Snapshot of the registered writers, in insertion order
    pub fn writers(&self) -> Vec<SharedWriter> {
        self.writers.lock().clone()
    }

    fn dispatch(&self, level: Level, line: &str) -> LogResult<()> {
        let writers = self.writers();
        for writer in &writers {
            writer.write(level, line)?;
        }
        Ok(())
    }
}

impl Logger for Log {
    fn name(&self) -> &str {
        &self.name
    }

    fn print(&self, message: &str) -> LogResult<()> {
        let line = self.formatter().format_message(&self.name, message);
        self.dispatch(Level::Message, &line)
    }

    fn print_stack_trace(&self, trace: &StackTrace) -> LogResult<()> {
        let line = self.formatter().format_stack_trace(&self.name, trace);
        self.dispatch(Level::Message, &line)
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
        let line = self.formatter().format_warning(&self.name, message);
        self.dispatch(Level::Warning, &line)
    }

    fn err(&self, message: &str) -> LogResult<()> {
        let line = self.formatter().format_error(&self.name, message);
        self.dispatch(Level::Error, &line)
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log")
            .field("name", &self.name)
            .field("writers", &format!("[{} writers]", self.writers.lock().len()))
            .finish()
    }
}
