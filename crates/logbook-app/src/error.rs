use salvo::http::StatusCode;
use salvo::{Response, writing::Json};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ScheduleError(#[from] logbook_schedule::error::ScheduleError),

    #[error(transparent)]
    CoreError(#[from] logbook_core::error::CoreError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl AppError {
    /// ## Summary
    /// HTTP status reported for this error.
    ///
    /// Anything the caller sent (rows, window, body) is a 400; a bare
    /// `CoreError` only comes from server-side state and is a 500.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ScheduleError(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Writes `err` to `res` as `{ "error": "..." }` with its status code.
pub fn render_error(res: &mut Response, err: &AppError) {
    res.status_code(err.status_code());
    res.render(Json(ErrorResponse {
        error: err.to_string(),
    }));
}

pub type AppResult<T> = std::result::Result<T, AppError>;
