//! Calendar-date arithmetic used by the occurrence generator and the
//! week-range formatter.
//!
//! Everything here works on `NaiveDate`: no time of day, no time zone.
//! Functions that can be handed an impossible year/month return `None`
//! rather than panicking.

use std::str::FromStr;

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

use crate::rule::Occurrence;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday index with Sunday = 0 through Saturday = 6.
#[must_use]
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ## Summary
/// Returns the Monday on or before `date` (weeks start on Monday).
#[must_use]
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let back = match weekday_index(date) {
        0 => 6,
        idx => idx - 1,
    };
    date.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(NaiveDate::MIN)
}

/// ## Summary
/// Returns the Sunday that closes the Monday-start week containing `date`.
#[must_use]
pub fn sunday_of_week(date: NaiveDate) -> NaiveDate {
    monday_of_week(date)
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// ## Summary
/// Stable grouping key for a Monday-start week: the ISO date of its Monday.
///
/// Two dates share an identifier exactly when they fall in the same week.
#[must_use]
pub fn week_identifier(date: NaiveDate) -> String {
    monday_of_week(date).format("%Y-%m-%d").to_string()
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)
    }
}

/// ## Summary
/// Returns the last calendar date of the given month.
#[must_use]
pub fn last_date_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    first_of_next_month(year, month)?.pred_opt()
}

/// ## Summary
/// Number of days in the given month, leap years included.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    last_date_of_month(year, month).map(|date| date.day())
}

/// ## Summary
/// Walks back from the last day of the month to the nearest Monday–Friday.
#[must_use]
pub fn last_weekday_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let mut date = last_date_of_month(year, month)?;
    while is_weekend(date) {
        date = date.pred_opt()?;
    }
    Some(date)
}

/// ## Summary
/// Resolves "the nth `weekday` of the month".
///
/// `First` through `Fourth` return `None` when the month has fewer instances
/// of `weekday` than asked for (never the case for four, but the check is
/// kept general). `Last` always resolves for a valid month.
#[must_use]
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    occurrence: Occurrence,
    weekday: Weekday,
) -> Option<NaiveDate> {
    if let Some(n) = occurrence.ordinal() {
        return NaiveDate::from_weekday_of_month_opt(year, month, weekday, n);
    }

    let last = last_date_of_month(year, month)?;
    let offset =
        (last.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    last.checked_sub_days(Days::new(u64::from(offset)))
}

/// ## Summary
/// Every `(year, month)` pair touched by the closed range `[start, end]`,
/// in ascending order. Empty when `start > end`.
#[must_use]
pub fn months_overlapping(start: NaiveDate, end: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    if start > end {
        return months;
    }

    let (mut year, mut month) = (start.year(), start.month());
    let last = (end.year(), end.month());
    while (year, month) <= last {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    months
}

/// ## Summary
/// Full English name for a month number (1 = January).
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(idx).copied()
}

/// ## Summary
/// Full English name for a weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a month name in full or three-letter form, case-insensitive.
#[must_use]
pub fn parse_month(name: &str) -> Option<u32> {
    Month::from_str(name.trim())
        .ok()
        .map(|month| month.number_from_month())
}

/// A resolved "start day to end day" span, possibly crossing a month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DayRange {
    /// ## Summary
    /// Renders the range as `"July 31 to August 6"`.
    #[must_use]
    pub fn label(self) -> String {
        let start_month = month_name(self.start.month()).unwrap_or_default();
        let end_month = month_name(self.end.month()).unwrap_or_default();
        format!(
            "{start_month} {} to {end_month} {}",
            self.start.day(),
            self.end.day()
        )
    }
}

/// ## Summary
/// Builds the date span for a KPI week written as two day numbers within
/// `month_name`.
///
/// When `end_day < start_day` the end rolls into the following month, and
/// December rolls into January of the next year.
///
/// Returns `None` on any parse failure (non-numeric day, unknown month name,
/// day outside the month); callers fall back to the original text.
#[must_use]
pub fn cross_month_day_range(
    start_day: &str,
    end_day: &str,
    month_name: &str,
    year: i32,
) -> Option<DayRange> {
    let start_day: u32 = start_day.trim().parse().ok()?;
    let end_day: u32 = end_day.trim().parse().ok()?;
    let month = parse_month(month_name)?;

    let start = NaiveDate::from_ymd_opt(year, month, start_day)?;
    let end = if end_day < start_day {
        let next = first_of_next_month(year, month)?;
        NaiveDate::from_ymd_opt(next.year(), next.month(), end_day)?
    } else {
        NaiveDate::from_ymd_opt(year, month, end_day)?
    };

    Some(DayRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_monday_of_week() {
        // 2024-07-03 is a Wednesday
        assert_eq!(monday_of_week(date(2024, 7, 3)), date(2024, 7, 1));
        assert_eq!(monday_of_week(date(2024, 7, 1)), date(2024, 7, 1));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(monday_of_week(date(2024, 7, 7)), date(2024, 7, 1));
        // Across a month boundary
        assert_eq!(monday_of_week(date(2024, 8, 1)), date(2024, 7, 29));
    }

    #[test]
    fn test_sunday_of_week() {
        assert_eq!(sunday_of_week(date(2024, 7, 3)), date(2024, 7, 7));
        assert_eq!(sunday_of_week(date(2024, 7, 7)), date(2024, 7, 7));
        assert_eq!(sunday_of_week(date(2024, 12, 30)), date(2025, 1, 5));
    }

    #[test]
    fn test_week_identifier() {
        assert_eq!(week_identifier(date(2024, 7, 3)), "2024-07-01");
        assert_eq!(
            week_identifier(date(2024, 7, 1)),
            week_identifier(date(2024, 7, 7))
        );
        assert_ne!(
            week_identifier(date(2024, 7, 7)),
            week_identifier(date(2024, 7, 8))
        );
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), Some(29));
        assert_eq!(last_day_of_month(2023, 2), Some(28));
        assert_eq!(last_day_of_month(1900, 2), Some(28));
        assert_eq!(last_day_of_month(2000, 2), Some(29));
        assert_eq!(last_day_of_month(2024, 4), Some(30));
        assert_eq!(last_day_of_month(2024, 12), Some(31));
        assert_eq!(last_day_of_month(2024, 0), None);
        assert_eq!(last_day_of_month(2024, 13), None);
    }

    #[test]
    fn test_last_weekday_of_month() {
        // July 31 2024 is a Wednesday
        assert_eq!(last_weekday_of_month(2024, 7), Some(date(2024, 7, 31)));
        // August 31 2024 is a Saturday
        assert_eq!(last_weekday_of_month(2024, 8), Some(date(2024, 8, 30)));
        // March 31 2024 is a Sunday
        assert_eq!(last_weekday_of_month(2024, 3), Some(date(2024, 3, 29)));
    }

    #[test]
    fn test_nth_weekday_of_month() {
        // July 2024 Mondays: 1, 8, 15, 22, 29
        assert_eq!(
            nth_weekday_of_month(2024, 7, Occurrence::First, Weekday::Mon),
            Some(date(2024, 7, 1))
        );
        assert_eq!(
            nth_weekday_of_month(2024, 7, Occurrence::Fourth, Weekday::Mon),
            Some(date(2024, 7, 22))
        );
        assert_eq!(
            nth_weekday_of_month(2024, 7, Occurrence::Last, Weekday::Mon),
            Some(date(2024, 7, 29))
        );
        // February 2023 has exactly four Mondays: 6, 13, 20, 27
        assert_eq!(
            nth_weekday_of_month(2023, 2, Occurrence::Fourth, Weekday::Mon),
            Some(date(2023, 2, 27))
        );
        assert_eq!(
            nth_weekday_of_month(2023, 2, Occurrence::Last, Weekday::Mon),
            Some(date(2023, 2, 27))
        );
        assert_eq!(
            nth_weekday_of_month(2024, 13, Occurrence::Last, Weekday::Mon),
            None
        );
    }

    #[test]
    fn test_months_overlapping() {
        assert_eq!(
            months_overlapping(date(2024, 6, 26), date(2024, 7, 17)),
            vec![(2024, 6), (2024, 7)]
        );
        assert_eq!(
            months_overlapping(date(2024, 12, 20), date(2025, 1, 3)),
            vec![(2024, 12), (2025, 1)]
        );
        assert_eq!(
            months_overlapping(date(2024, 7, 5), date(2024, 7, 5)),
            vec![(2024, 7)]
        );
        assert!(months_overlapping(date(2024, 7, 5), date(2024, 7, 4)).is_empty());
    }

    #[test]
    fn test_cross_month_day_range() {
        let range = cross_month_day_range("31", "6", "July", 2024).expect("valid range");
        assert_eq!(range.start, date(2024, 7, 31));
        assert_eq!(range.end, date(2024, 8, 6));

        let range = cross_month_day_range("29", "4", "december", 2024).expect("valid range");
        assert_eq!(range.end, date(2025, 1, 4));

        let range = cross_month_day_range(" 14 ", "20", "Jul", 2024).expect("valid range");
        assert_eq!(range.label(), "July 14 to July 20");
    }

    #[test]
    fn test_cross_month_day_range_failures() {
        assert_eq!(cross_month_day_range("abc", "6", "July", 2024), None);
        assert_eq!(cross_month_day_range("1", "7", "Juno", 2024), None);
        // June has no 31st
        assert_eq!(cross_month_day_range("31", "6", "June", 2024), None);
        assert_eq!(cross_month_day_range("0", "6", "June", 2024), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(weekday_name(Weekday::Wed), "Wednesday");
        assert_eq!(parse_month("AUGUST"), Some(8));
        assert_eq!(parse_month("sep"), Some(9));
    }
}
