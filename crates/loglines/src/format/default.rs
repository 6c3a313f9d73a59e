//! Default prefix-based formatter
//!
//! Lines look like `Info (Worker): started`. Each formatter owns its three
//! level prefixes; they are copied from a [`FormatterDefaults`] when the
//! formatter is built, so changing the defaults later only affects
//! formatters built afterwards.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::traits::LogFormatter;

/// The three level prefixes used by [`DefaultLogFormatter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefixes {
    pub message: String,
    pub warning: String,
    pub error: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            message: "Info".to_string(),
            warning: "Warn".to_string(),
            error: "Error".to_string(),
        }
    }
}

/// Default prefixes that new formatters start from
///
/// # Thread Safety
///
/// All three prefixes sit behind one `RwLock`, so a formatter never sees a
/// half-applied update.
#[derive(Debug, Default)]
pub struct FormatterDefaults {
    prefixes: RwLock<Prefixes>,
}

static GLOBAL_DEFAULTS: Lazy<FormatterDefaults> = Lazy::new(FormatterDefaults::new);

impl FormatterDefaults {
    /// Create defaults holding `Info` / `Warn` / `Error`
    pub fn new() -> Self {
        Self::with_prefixes(Prefixes::default())
    }

    pub fn with_prefixes(prefixes: Prefixes) -> Self {
        Self {
            prefixes: RwLock::new(prefixes),
        }
    }

    /// The process-wide defaults used by [`DefaultLogFormatter::new`]
    ///
    /// Initialized on first use and never torn down.
    pub fn global() -> &'static FormatterDefaults {
        &GLOBAL_DEFAULTS
    }

    /// Copy of the current prefixes
    pub fn snapshot(&self) -> Prefixes {
        self.prefixes.read().clone()
    }

    pub fn message_prefix(&self) -> String {
        self.prefixes.read().message.clone()
    }

    pub fn warning_prefix(&self) -> String {
        self.prefixes.read().warning.clone()
    }

    pub fn error_prefix(&self) -> String {
        self.prefixes.read().error.clone()
    }

    pub fn set_message_prefix(&self, prefix: impl Into<String>) {
        self.prefixes.write().message = prefix.into();
    }

    pub fn set_warning_prefix(&self, prefix: impl Into<String>) {
        self.prefixes.write().warning = prefix.into();
    }

    pub fn set_error_prefix(&self, prefix: impl Into<String>) {
        self.prefixes.write().error = prefix.into();
    }

    /// Replace all three prefixes at once
    pub fn set_prefixes(&self, prefixes: Prefixes) {
        *self.prefixes.write() = prefixes;
    }

    /// Restore `Info` / `Warn` / `Error`
    pub fn reset(&self) {
        self.set_prefixes(Prefixes::default());
    }
}

/// Formats lines as `"{prefix} ({log_name}): {message}"`
///
/// # Example
///
/// ```
/// use loglines::format::{DefaultLogFormatter, LogFormatter};
///
/// let formatter = DefaultLogFormatter::new();
/// assert_eq!(
///     formatter.format_warning("Worker", "disk low"),
///     "Warn (Worker): disk low"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultLogFormatter {
    prefixes: Prefixes,
}

impl Default for DefaultLogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultLogFormatter {
    /// Create a formatter from the process-wide defaults
    pub fn new() -> Self {
        Self::from_defaults(FormatterDefaults::global())
    }

    /// Create a formatter from an explicit set of defaults
    pub fn from_defaults(defaults: &FormatterDefaults) -> Self {
        Self::with_prefixes(defaults.snapshot())
    }

    pub fn with_prefixes(prefixes: Prefixes) -> Self {
        Self { prefixes }
    }

    pub fn with_message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.message = prefix.into();
        self
    }

    pub fn with_warning_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.warning = prefix.into();
        self
    }

    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.error = prefix.into();
        self
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    pub fn message_prefix(&self) -> &str {
        &self.prefixes.message
    }

    pub fn warning_prefix(&self) -> &str {
        &self.prefixes.warning
    }

    pub fn error_prefix(&self) -> &str {
        &self.prefixes.error
    }

    pub fn set_message_prefix(&mut self, prefix: impl Into<String>) {
        self.prefixes.message = prefix.into();
    }

    pub fn set_warning_prefix(&mut self, prefix: impl Into<String>) {
        self.prefixes.warning = prefix.into();
    }

    pub fn set_error_prefix(&mut self, prefix: impl Into<String>) {
        self.prefixes.error = prefix.into();
    }

    fn format(level: &str, log_name: &str, message: &str) -> String {
        format!("{level} ({log_name}): {message}")
    }
}

impl LogFormatter for DefaultLogFormatter {
    fn format_message(&self, log_name: &str, message: &str) -> String {
        Self::format(&self.prefixes.message, log_name, message)
    }

    fn format_warning(&self, log_name: &str, message: &str) -> String {
        Self::format(&self.prefixes.warning, log_name, message)
    }

    fn format_error(&self, log_name: &str, message: &str) -> String {
        Self::format(&self.prefixes.error, log_name, message)
    }
}
