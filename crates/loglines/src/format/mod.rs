//! Message formatting
//!
//! - `LogFormatter`: the formatting contract
//! - `DefaultLogFormatter`: `"{prefix} ({name}): {message}"` lines
//! - `StackTrace` / `StackFrame`: call-site data rendered by formatters

mod traits;
mod default;
mod stack;

pub use traits::{LogFormatter, SharedFormatter, describe_error};
pub use default::{DefaultLogFormatter, FormatterDefaults, Prefixes};
pub use stack::{StackFrame, StackTrace, UNKNOWN_CLASS, UNKNOWN_FILE, UNKNOWN_METHOD};
