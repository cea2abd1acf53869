use chrono::NaiveDate;
use logbook_schedule::entry::Fields;
use logbook_schedule::{ExpansionWindow, ScheduledEntry};
use serde::{Deserialize, Serialize};

/// ## Summary
/// Body of `POST /api/schedule/expand`.
///
/// `entries` are stored rows as the storage layer returns them. `today` and
/// `window` default to the server's local date and the configured window.
#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    pub entries: Vec<Fields>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub window: Option<ExpansionWindow>,
}

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub generated_on: NaiveDate,
    pub window: ExpansionWindow,
    pub entries: Vec<ScheduledEntry>,
}

/// ## Summary
/// Body of `POST /api/schedule/week-range`.
#[derive(Debug, Deserialize)]
pub struct WeekRangeRequest {
    pub days: String,
    pub month: String,
}

#[derive(Debug, Serialize)]
pub struct WeekRangeResponse {
    pub label: String,
}
