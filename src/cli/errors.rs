use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Conflicting arguments: {first} and {second}")]
    Conflict {
        first: &'static str,
        second: &'static str,
    },

    #[error("Timeout must be greater than 0, got: {secs}")]
    ZeroTimeout { secs: u64 },
}
