//! Turns a recurring entry into the virtual occurrences that fall inside a
//! window.

use chrono::NaiveDate;

use crate::dates;
use crate::entry::{LogEntry, VirtualOccurrence};
use crate::rule::RecurrenceRule;
use crate::window::ExpansionWindow;

/// ## Summary
/// Dates inside `window` on which `rule` fires, ascending.
///
/// Weekly rules scan the window day by day; monthly rules resolve one
/// candidate per overlapping month and keep it if it lands inside the
/// window. Months where the rule has no date (e.g. a missing nth weekday)
/// are skipped.
#[must_use]
pub fn occurrence_dates(rule: RecurrenceRule, window: ExpansionWindow) -> Vec<NaiveDate> {
    match rule {
        RecurrenceRule::Weekly { .. } => window
            .days()
            .filter(|date| rule.fires_on(*date))
            .collect(),
        _ => dates::months_overlapping(window.start, window.end)
            .into_iter()
            .filter_map(|(year, month)| rule.date_in_month(year, month))
            .filter(|date| window.contains(*date))
            .collect(),
    }
}

/// ## Summary
/// Materializes the virtual occurrences of `entry` inside `window`.
///
/// The entry's own `log_date` is never produced: that day is represented by
/// the real row. Non-recurring entries yield nothing.
#[must_use]
pub fn generate_occurrences(
    entry: &LogEntry,
    window: ExpansionWindow,
    today: NaiveDate,
) -> Vec<VirtualOccurrence> {
    let Some(rule) = entry.recurrence else {
        return Vec::new();
    };

    let occurrences: Vec<VirtualOccurrence> = occurrence_dates(rule, window)
        .into_iter()
        .filter(|date| *date != entry.log_date)
        .map(|date| VirtualOccurrence::from_source(entry, rule, date, today))
        .collect();

    tracing::trace!(
        entry_id = entry.id,
        rule = %rule,
        window_start = %window.start,
        window_end = %window.end,
        count = occurrences.len(),
        "Generated virtual occurrences"
    );

    occurrences
}


#[cfg(test)]
mod rule_cases {
    include!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/recurrence_cases_data/mod.rs"
    ));

    #[test]
    fn recurrence_cases_unit() {
        for case in recurrence_cases() {
            assert_case(&case);
        }
    }
}
