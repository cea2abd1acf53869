use thiserror::Error;

/// Errors raised at the storage boundary and by window construction.
///
/// Recurrence expansion itself never fails; see `generate` and `merge`.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid entry at row {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error(transparent)]
    CoreError(#[from] logbook_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
