//! Recurrence expansion endpoints consumed by the table, calendar and KPI
//! views.

use logbook_core::constants::SCHEDULE_ROUTE_COMPONENT;
use salvo::Router;

mod expand;
mod types;
mod week_range;


pub use expand::build_expansion;
pub use types::{ExpandRequest, ExpandResponse, WeekRangeRequest, WeekRangeResponse};

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SCHEDULE_ROUTE_COMPONENT)
        .push(Router::with_path("expand").post(expand::expand))
        .push(Router::with_path("week-range").post(week_range::week_range))
}
