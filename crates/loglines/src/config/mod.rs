//! Logging configuration
//!
//! `LogConfig` is read from a YAML file (user level by default) and can be
//! overridden through `LOGLINES_*` environment variables.

mod file;

pub use file::{LogConfig, PrefixConfig, ENV_CONSOLE, ENV_FILE, ENV_TRACE};
