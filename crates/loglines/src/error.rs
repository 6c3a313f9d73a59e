//! Logging error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building loggers or writing log lines
#[derive(Error, Debug)]
pub enum LogError {
    /// A required argument was missing or blank
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A file destination could not be created or appended to
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stream destination (stdout/stderr) could not be written
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// Configuration could not be loaded or applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failure reported by a custom writer
    #[error("Writer error: {0}")]
    Writer(String),

    /// One or more child loggers failed during a fan-out
    #[error("{} of the fanned-out loggers failed: {}", .0.len(), join_errors(.0))]
    Fanout(Vec<LogError>),
}

fn join_errors(errors: &[LogError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl LogError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an IO error tied to a file destination
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a custom writer error
    pub fn writer(message: impl Into<String>) -> Self {
        Self::Writer(message.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;

/// Reject blank names, which would make formatted lines ambiguous
pub(crate) fn require_name(kind: &str, name: String) -> LogResult<String> {
    if name.trim().is_empty() {
        return Err(LogError::invalid_argument(format!("{kind} name must not be empty")));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name() {
        assert_eq!(require_name("log", "Worker".to_string()).unwrap(), "Worker");
        assert!(matches!(
            require_name("log", "  ".to_string()),
            Err(LogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fanout_display() {
        let err = LogError::Fanout(vec![
            LogError::writer("disk full"),
            LogError::invalid_argument("bad"),
        ]);
        assert_eq!(
            err.to_string(),
            "2 of the fanned-out loggers failed: Writer error: disk full; Invalid argument: bad"
        );
    }

    #[test]
    fn test_io_display() {
        let err = LogError::io(
            "app.log",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "IO error on app.log: denied");
    }
}
