use thiserror::Error;

/// Errors shared by every logbook crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings failed to load or are inconsistent.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A caller-supplied value that cannot be turned into a date or window.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
