//! KPI week labels: `"31-6"` + `"July 2024"` becomes `"July 31 to August 6"`.
//!
//! This is a cosmetic transform. Anything it cannot read is handed back
//! unchanged, so callers never have to handle an error.

use chrono::{Datelike, NaiveDate};

use crate::dates::{self, DayRange};

/// Splits `"July"` / `"July 2024"` into a month name and optional year.
fn split_month_descriptor(descriptor: &str) -> Option<(&str, Option<i32>)> {
    let mut parts = descriptor.split_whitespace();
    let name = parts.next()?;
    let year = match parts.next() {
        Some(raw) => Some(raw.parse::<i32>().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((name, year))
}

/// ## Summary
/// Resolves a `"D1-D2"` day range within a month descriptor.
///
/// `fallback_year` is used when the descriptor carries no year; it only
/// matters for February 29th and the December → January roll.
#[must_use]
pub fn parse_week_range(
    day_range: &str,
    month_descriptor: &str,
    fallback_year: i32,
) -> Option<DayRange> {
    let (start_day, end_day) = day_range.split_once(['-', '–'])?;
    let (month_name, year) = split_month_descriptor(month_descriptor)?;
    dates::cross_month_day_range(
        start_day,
        end_day,
        month_name,
        year.unwrap_or(fallback_year),
    )
}

/// ## Summary
/// Formats a terse KPI week as `"Month D1 to Month D2"`.
///
/// Returns `day_range` untouched when the range or month cannot be parsed.
#[must_use]
pub fn transform_week_range(day_range: &str, month_descriptor: &str, today: NaiveDate) -> String {
    if let Some(range) = parse_week_range(day_range, month_descriptor, today.year()) {
        range.label()
    } else {
        tracing::trace!(
            day_range,
            month_descriptor,
            "Week range not recognized, keeping original text"
        );
        day_range.to_string()
    }
}
