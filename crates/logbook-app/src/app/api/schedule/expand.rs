use chrono::{Local, NaiveDate};
use logbook_core::config::RecurrenceConfig;
use logbook_schedule::store::entries_from_rows;
use logbook_schedule::{ExpansionWindow, expand as expand_entries};
use salvo::{Depot, Request, Response, handler, writing::Json};

use super::types::{ExpandRequest, ExpandResponse};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, render_error};

/// ## Summary
/// Converts the stored rows, resolves the window and runs the expansion.
///
/// `clock_today` is only used when the request does not pin `today`.
///
/// ## Errors
/// Returns an error if a row has no readable `id`/`log_date`, or if the
/// window is longer than `config.max_window_days`.
pub fn build_expansion(
    request: ExpandRequest,
    config: &RecurrenceConfig,
    clock_today: NaiveDate,
) -> AppResult<ExpandResponse> {
    let today = request.today.unwrap_or(clock_today);
    let window = match request.window {
        Some(window) => window,
        None => ExpansionWindow::from_config(today, config)?,
    }
    .bounded(config.max_window_days)?;

    let entries = entries_from_rows(request.entries)?;
    let merged = expand_entries(&entries, window, today);

    Ok(ExpandResponse {
        generated_on: today,
        window,
        entries: merged,
    })
}

/// ## Summary
/// POST /api/schedule/expand - Merge stored rows with their virtual
/// occurrences.
///
/// ## Errors
/// Returns HTTP 400 if the body or a row is malformed, or the window is too long
/// Returns HTTP 500 if the configuration is missing from the depot
#[handler]
pub async fn expand(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Configuration unavailable");
            render_error(res, &e);
            return;
        }
    };

    let request: ExpandRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = ?e, "Failed to parse expand request");
            render_error(res, &AppError::InvalidBody(e.to_string()));
            return;
        }
    };

    let row_count = request.entries.len();
    match build_expansion(request, &settings.recurrence, Local::now().date_naive()) {
        Ok(response) => {
            tracing::debug!(
                rows = row_count,
                merged = response.entries.len(),
                generated_on = %response.generated_on,
                "Expanded schedule"
            );
            res.render(Json(response));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Expansion request rejected");
            render_error(res, &e);
        }
    }
}
