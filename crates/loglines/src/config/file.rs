//! File-based logging configuration (YAML)
//!
//! User-level config lives at `~/.config/loglines/config.yaml`. Every field
//! is optional, and environment variables can override the destinations.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{require_name, LogError, LogResult};
use crate::format::{DefaultLogFormatter, FormatterDefaults};
use crate::logging::Log;
use crate::writers::{ConsoleWriter, FileWriterRegistry, SharedWriter, TraceWriter};

/// Environment variable overriding the file destination
pub const ENV_FILE: &str = "LOGLINES_FILE";
/// Environment variable toggling console output
pub const ENV_CONSOLE: &str = "LOGLINES_CONSOLE";
/// Environment variable toggling trace output
pub const ENV_TRACE: &str = "LOGLINES_TRACE";

/// Prefix overrides; unset prefixes come from the formatter defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Logging configuration file structure
///
/// ```yaml
/// prefixes:
///   warning: WARN
/// console: true
/// trace: false
/// file: logs/app.log
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level prefix overrides
    pub prefixes: PrefixConfig,
    /// Write to stdout/stderr
    pub console: bool,
    /// Write to the `log` facade
    pub trace: bool,
    /// Write to this file (truncated once per process)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            prefixes: PrefixConfig::default(),
            console: true,
            trace: false,
            file: None,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl LogConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        // An empty document is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> LogResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load config from a file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
        Self::from_yaml_str(&content)
            .map_err(|e| LogError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save config to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LogError::io(parent, e))?;
        }
        fs::write(path, self.to_yaml_string()?).map_err(|e| LogError::io(path, e))
    }

    /// User-level config path (~/.config/loglines/config.yaml)
    pub fn user_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("loglines").join("config.yaml")
    }

    /// Load the user-level config, then apply environment overrides
    pub fn load_user() -> LogResult<Self> {
        Ok(Self::load(Self::user_path())?.apply_env())
    }

    /// Apply `LOGLINES_*` environment overrides
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, CLI flags, ...)
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(file) = lookup(ENV_FILE) {
            self.file = if file.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(file))
            };
        }
        if let Some(console) = lookup(ENV_CONSOLE) {
            self.console = is_truthy(&console);
        }
        if let Some(trace) = lookup(ENV_TRACE) {
            self.trace = is_truthy(&trace);
        }
        self
    }

    /// Formatter from the process-wide defaults plus this config's prefixes
    pub fn formatter(&self) -> DefaultLogFormatter {
        self.formatter_from(FormatterDefaults::global())
    }

    /// Formatter from explicit defaults plus this config's prefixes
    pub fn formatter_from(&self, defaults: &FormatterDefaults) -> DefaultLogFormatter {
        let mut formatter = DefaultLogFormatter::from_defaults(defaults);
        if let Some(prefix) = &self.prefixes.message {
            formatter.set_message_prefix(prefix.clone());
        }
        if let Some(prefix) = &self.prefixes.warning {
            formatter.set_warning_prefix(prefix.clone());
        }
        if let Some(prefix) = &self.prefixes.error {
            formatter.set_error_prefix(prefix.clone());
        }
        formatter
    }

    /// Write this config's prefixes into `defaults`, for formatters built later
    pub fn apply_default_prefixes(&self, defaults: &FormatterDefaults) {
        if let Some(prefix) = &self.prefixes.message {
            defaults.set_message_prefix(prefix.clone());
        }
        if let Some(prefix) = &self.prefixes.warning {
            defaults.set_warning_prefix(prefix.clone());
        }
        if let Some(prefix) = &self.prefixes.error {
            defaults.set_error_prefix(prefix.clone());
        }
    }

    /// Build a `Log` using the process-wide file registry
    pub fn build(&self, name: impl Into<String>) -> LogResult<Log> {
        self.build_with_registry(name, FileWriterRegistry::global())
    }

    /// Build a `Log` with writers in the order console, trace, file
    pub fn build_with_registry(
        &self,
        name: impl Into<String>,
        registry: &FileWriterRegistry,
    ) -> LogResult<Log> {
        // validate before the registry truncates anything
        let name = require_name("log", name.into())?;

        let mut writers: Vec<SharedWriter> = Vec::new();
        if self.console {
            writers.push(Arc::new(ConsoleWriter::new()));
        }
        if self.trace {
            writers.push(TraceWriter::instance());
        }
        if let Some(file) = &self.file {
            writers.push(registry.instance(file)?);
        }

        let log = Log::with_writers(name, writers)?;
        log.set_formatter(Arc::new(self.formatter()));
        Ok(log)
    }
}
