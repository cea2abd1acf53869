//! The closed date window over which occurrences are generated.

use chrono::{Days, NaiveDate};
use logbook_core::config::RecurrenceConfig;
use logbook_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Closed range `[start, end]` of calendar dates.
///
/// A window with `start > end` is allowed and simply contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ExpansionWindow {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// ## Summary
    /// The window `today - days ..= today + days`.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if either bound falls outside the
    /// representable date range.
    pub fn around(today: NaiveDate, days: u16) -> ScheduleResult<Self> {
        let span = Days::new(u64::from(days));
        let start = today.checked_sub_days(span).ok_or_else(|| {
            CoreError::InvalidInput(format!("{days} days before {today} is out of range"))
        })?;
        let end = today.checked_add_days(span).ok_or_else(|| {
            CoreError::InvalidInput(format!("{days} days after {today} is out of range"))
        })?;
        Ok(Self { start, end })
    }

    /// ## Summary
    /// The default production window centered on `today`.
    ///
    /// ## Errors
    /// See [`ExpansionWindow::around`].
    pub fn from_config(today: NaiveDate, config: &RecurrenceConfig) -> ScheduleResult<Self> {
        Self::around(today, config.window_days)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    /// Number of dates in the window (zero when inverted).
    #[must_use]
    pub fn len_days(self) -> u64 {
        let days = self.end.signed_duration_since(self.start).num_days() + 1;
        u64::try_from(days).unwrap_or(0)
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the window, ascending.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// ## Summary
    /// Rejects windows longer than `max_days`.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidWindow` when the window is too long.
    pub fn bounded(self, max_days: u16) -> ScheduleResult<Self> {
        if self.len_days() > u64::from(max_days) {
            return Err(ScheduleError::InvalidWindow(format!(
                "{} .. {} spans {} days, limit is {max_days}",
                self.start,
                self.end,
                self.len_days()
            )));
        }
        Ok(self)
    }
}
