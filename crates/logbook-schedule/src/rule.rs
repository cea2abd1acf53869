//! Recurrence rules attached to log entries.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::dates;

/// Which instance of a weekday within a month a rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Occurrence {
    /// Position within the month, or `None` for `Last`.
    #[must_use]
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
            Self::Third => "Third",
            Self::Fourth => "Fourth",
            Self::Last => "Last",
        }
    }

    /// Parses `first`..`fourth`, `1st`..`4th`, `1`..`4` or `last` (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1st" | "1" => Self::First,
            "second" | "2nd" | "2" => Self::Second,
            "third" | "3rd" | "3" => Self::Third,
            "fourth" | "4th" | "4" => Self::Fourth,
            "last" | "-1" => Self::Last,
            _ => return None,
        })
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a log entry repeats.
///
/// A rule has no identity of its own: it always travels with exactly one
/// `LogEntry` and is stored as part of that entry's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// Every week on `weekday`.
    Weekly { weekday: Weekday },
    /// Every month on `day`, clamped to the month's last day.
    MonthlyByDay { day: u8 },
    /// Every month on its last calendar day.
    MonthlyLastDay,
    /// Every month on its last Monday–Friday.
    MonthlyLastWeekday,
    /// Every month on the nth (or last) `weekday`.
    MonthlyNthWeekday {
        occurrence: Occurrence,
        weekday: Weekday,
    },
}

impl RecurrenceRule {
    /// ## Summary
    /// Builds a `MonthlyByDay` rule, rejecting days outside 1..=31.
    #[must_use]
    pub fn monthly_by_day(day: u8) -> Option<Self> {
        (1..=31)
            .contains(&day)
            .then_some(Self::MonthlyByDay { day })
    }

    /// ## Summary
    /// The date this rule fires on in the given month.
    ///
    /// Returns `None` for weekly rules, for invalid months, and for
    /// nth-weekday rules whose occurrence does not exist that month.
    #[must_use]
    pub fn date_in_month(self, year: i32, month: u32) -> Option<NaiveDate> {
        match self {
            Self::Weekly { .. } => None,
            Self::MonthlyByDay { day } => {
                let last = dates::last_day_of_month(year, month)?;
                NaiveDate::from_ymd_opt(year, month, u32::from(day).min(last))
            }
            Self::MonthlyLastDay => dates::last_date_of_month(year, month),
            Self::MonthlyLastWeekday => dates::last_weekday_of_month(year, month),
            Self::MonthlyNthWeekday {
                occurrence,
                weekday,
            } => dates::nth_weekday_of_month(year, month, occurrence, weekday),
        }
    }

    /// ## Summary
    /// Whether the rule fires on `date`.
    #[must_use]
    pub fn fires_on(self, date: NaiveDate) -> bool {
        match self {
            Self::Weekly { weekday } => date.weekday() == weekday,
            _ => self.date_in_month(date.year(), date.month()) == Some(date),
        }
    }

    /// ## Summary
    /// Short human-readable description, rendered as `target_day` for
    /// virtual rows (e.g. `"Wednesday"`, `"Day 31"`, `"Second Tuesday"`).
    #[must_use]
    pub fn summary(self) -> String {
        match self {
            Self::Weekly { weekday } => dates::weekday_name(weekday).to_string(),
            Self::MonthlyByDay { day } => format!("Day {day}"),
            Self::MonthlyLastDay => "Last day".to_string(),
            Self::MonthlyLastWeekday => "Last weekday".to_string(),
            Self::MonthlyNthWeekday {
                occurrence,
                weekday,
            } => format!("{occurrence} {}", dates::weekday_name(weekday)),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
