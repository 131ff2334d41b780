//! Crate-level error type and `Result` alias.
//! Separates executable resolution, spawn failures, non-zero exits and cancellation so callers
//! can tell "the tool rejected the input" apart from "we gave up waiting".
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("executable not found: {name}: {source}")]
    NotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to spawn {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with {status}{}", .path.display(), stderr_suffix(.stderr))]
    NonZeroExit {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("execution cancelled")]
    Cancelled,

    #[error("execution timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True for both explicit cancellation and an expired deadline.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Cancelled | Error::TimedOut { .. })
    }

    /// Exit code of the tool, if it ran and exited normally with a non-zero code.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::NonZeroExit { status, .. } => status.code(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_kinds() {
        assert!(Error::Cancelled.is_cancellation());
        assert!(
            Error::TimedOut {
                timeout: Duration::from_secs(1)
            }
            .is_cancellation()
        );
        assert!(!Error::Config("bad".into()).is_cancellation());
    }

    #[test]
    fn stderr_suffix_skips_blank_output() {
        assert_eq!(stderr_suffix("  \n"), "");
        assert_eq!(stderr_suffix("Syntax Error\n"), ": Syntax Error");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: Error = serde_json::from_str::<u64>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
