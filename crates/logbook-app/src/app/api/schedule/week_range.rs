use chrono::Local;
use logbook_schedule::transform_week_range;
use salvo::{Request, Response, handler, writing::Json};

use super::types::{WeekRangeRequest, WeekRangeResponse};
use crate::error::{AppError, render_error};

/// ## Summary
/// POST /api/schedule/week-range - Format a KPI week such as `"31-6"` in
/// `"July 2024"` as `"July 31 to August 6"`.
///
/// Unreadable ranges come back unchanged; only a malformed body is an error.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a `{ days, month }` object
#[handler]
pub async fn week_range(req: &mut Request, res: &mut Response) {
    let request: WeekRangeRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = ?e, "Failed to parse week-range request");
            render_error(res, &AppError::InvalidBody(e.to_string()));
            return;
        }
    };

    let label = transform_week_range(&request.days, &request.month, Local::now().date_naive());
    res.render(Json(WeekRangeResponse { label }));
}
