//! File writer and the per-destination writer registry
//!
//! A file is truncated the first time a writer for it is handed out and
//! appended to afterwards. The registry keeps one writer per path so that
//! several loggers pointed at the same file share it instead of truncating
//! each other's output.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::traits::LogWriter;
use crate::error::{LogError, LogResult};

/// File name used by [`FileWriterRegistry::default_instance`] until changed
pub const DEFAULT_FILE_NAME: &str = "output.log";

/// A writer appending one line per call to a file
///
/// Instances only come from a [`FileWriterRegistry`].
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    // serializes appends from every logger sharing this writer
    write_lock: Mutex<()>,
}

impl FileWriter {
    /// Create the writer, truncating (or creating) the file
    fn create(path: PathBuf) -> LogResult<Self> {
        File::create(&path).map_err(|e| LogError::io(&path, e))?;
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared writer for `path` from the process-wide registry
    pub fn instance(path: impl AsRef<Path>) -> LogResult<Arc<FileWriter>> {
        FileWriterRegistry::global().instance(path)
    }

    /// Shared writer for the process-wide default file name
    pub fn default_instance() -> LogResult<Arc<FileWriter>> {
        FileWriterRegistry::global().default_instance()
    }

    /// Evict `path` from the process-wide registry
    pub fn remove(path: impl AsRef<Path>) -> Option<Arc<FileWriter>> {
        FileWriterRegistry::global().remove(path)
    }

    fn write_line(&self, line: &str) -> LogResult<()> {
        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogError::io(&self.path, e))?;
        writeln!(file, "{}", line).map_err(|e| LogError::io(&self.path, e))
    }
}

impl LogWriter for FileWriter {
    fn write_message(&self, line: &str) -> LogResult<()> {
        self.write_line(line)
    }

    fn write_warning(&self, line: &str) -> LogResult<()> {
        self.write_line(line)
    }

    fn write_error(&self, line: &str) -> LogResult<()> {
        self.write_line(line)
    }
}

#[derive(Debug)]
struct RegistryState {
    default_file: PathBuf,
    instances: HashMap<PathBuf, Arc<FileWriter>>,
}

/// Registry mapping a file path to its single shared [`FileWriter`]
///
/// Every read and update goes through one mutex, so two threads asking for
/// the same new path cannot both truncate it.
#[derive(Debug)]
pub struct FileWriterRegistry {
    state: Mutex<RegistryState>,
}

static GLOBAL_REGISTRY: Lazy<FileWriterRegistry> = Lazy::new(FileWriterRegistry::new);

impl FileWriterRegistry {
    pub fn new() -> Self {
        Self::with_default_file(DEFAULT_FILE_NAME)
    }

    pub fn with_default_file(default_file: impl Into<PathBuf>) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                default_file: default_file.into(),
                instances: HashMap::new(),
            }),
        }
    }

    /// The process-wide registry
    ///
    /// Initialized on first use and never torn down.
    pub fn global() -> &'static FileWriterRegistry {
        &GLOBAL_REGISTRY
    }

    /// Get the writer for `path`, creating and truncating the file on first request
    pub fn instance(&self, path: impl AsRef<Path>) -> LogResult<Arc<FileWriter>> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LogError::invalid_argument("file path must not be empty"));
        }

        let mut state = self.state.lock();
        Self::get_or_create(&mut state, path)
    }

    /// Get the writer for the current default file name
    pub fn default_instance(&self) -> LogResult<Arc<FileWriter>> {
        let mut state = self.state.lock();
        let path = state.default_file.clone();
        Self::get_or_create(&mut state, &path)
    }

    fn get_or_create(state: &mut RegistryState, path: &Path) -> LogResult<Arc<FileWriter>> {
        if let Some(writer) = state.instances.get(path) {
            return Ok(Arc::clone(writer));
        }

        log::debug!("creating log destination {}", path.display());
        let writer = Arc::new(FileWriter::create(path.to_path_buf())?);
        state.instances.insert(path.to_path_buf(), Arc::clone(&writer));
        Ok(writer)
    }

    /// Evict the writer for `path`, returning it if one was registered
    ///
    /// The next `instance` call for the same path truncates the file again.
    pub fn remove(&self, path: impl AsRef<Path>) -> Option<Arc<FileWriter>> {
        let removed = self.state.lock().instances.remove(path.as_ref());
        if removed.is_some() {
            log::debug!("released log destination {}", path.as_ref().display());
        }
        removed
    }

    /// Check if a writer is registered for `path`
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().instances.contains_key(path.as_ref())
    }

    /// Number of registered destinations
    pub fn len(&self) -> usize {
        self.state.lock().instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn default_file_name(&self) -> PathBuf {
        self.state.lock().default_file.clone()
    }

    /// Change the file used by `default_instance`
    ///
    /// Writers already handed out keep their own path. Fails with
    /// `InvalidArgument` for an empty path, like `instance`.
    pub fn set_default_file_name(&self, path: impl Into<PathBuf>) -> LogResult<()> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(LogError::invalid_argument("file path must not be empty"));
        }
        self.state.lock().default_file = path;
        Ok(())
    }
}

impl Default for FileWriterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
