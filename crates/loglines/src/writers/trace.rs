//! Trace writer: forwards lines to the `log` facade
//!
//! Whatever logger the application installed (`env_logger`, a syslog
//! bridge, a test capture, ...) receives the lines as `info`, `warn` and
//! `error` records. Nothing is emitted when no logger is installed.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::traits::LogWriter;
use crate::error::LogResult;

/// Target used for records unless overridden
pub const DEFAULT_TARGET: &str = "loglines";

/// A writer that emits each line as a `log` record
#[derive(Debug)]
pub struct TraceWriter {
    target: String,
    write_lock: Mutex<()>,
}

static SHARED: Lazy<Arc<TraceWriter>> = Lazy::new(|| Arc::new(TraceWriter::new()));

impl Default for TraceWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceWriter {
    /// Create a trace writer using the default target
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    /// Create a trace writer emitting records under a custom target
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The shared process-wide trace writer
    pub fn instance() -> Arc<TraceWriter> {
        Arc::clone(&SHARED)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn emit(&self, level: log::Level, line: &str) -> LogResult<()> {
        let _guard = self.write_lock.lock();
        log::log!(target: self.target.as_str(), level, "{}", line);
        Ok(())
    }
}

impl LogWriter for TraceWriter {
    fn write_message(&self, line: &str) -> LogResult<()> {
        self.emit(log::Level::Info, line)
    }

    fn write_warning(&self, line: &str) -> LogResult<()> {
        self.emit(log::Level::Warn, line)
    }

    fn write_error(&self, line: &str) -> LogResult<()> {
        self.emit(log::Level::Error, line)
    }
}

#[cfg(test)]
pub(crate) mod capture {
    //! A `log` backend that records records for assertions.
    //!
    //! Installed once per test binary; tests filter by a unique target.

    use once_cell::sync::Lazy;
    use parking_lot::Mutex;

    pub struct CaptureLogger {
        records: Mutex<Vec<(String, log::Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.records.lock().push((
                record.target().to_string(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Lazy<CaptureLogger> = Lazy::new(|| CaptureLogger {
        records: Mutex::new(Vec::new()),
    });

    pub fn install() {
        // Already installed by an earlier test in this binary
        let _ = log::set_logger(&*CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);
    }

    pub fn records_for(target: &str) -> Vec<(log::Level, String)> {
        CAPTURE
            .records
            .lock()
            .iter()
            .filter(|(t, _, _)| t == target)
            .map(|(_, level, text)| (*level, text.clone()))
            .collect()
    }
}
