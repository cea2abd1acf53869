//! Combines real entries with their generated occurrences into one ordered
//! view.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::entry::{LogEntry, ScheduledEntry, VirtualOccurrence};
use crate::generate::generate_occurrences;
use crate::window::ExpansionWindow;

/// ## Summary
/// Display order: most recent date first, then higher id first.
///
/// A virtual row ranks by its source entry's id. Real rows precede virtual
/// rows on a full tie so the order stays total.
#[must_use]
pub fn display_order(a: &ScheduledEntry, b: &ScheduledEntry) -> Ordering {
    b.date()
        .cmp(&a.date())
        .then_with(|| b.sort_id().cmp(&a.sort_id()))
        .then_with(|| a.is_virtual().cmp(&b.is_virtual()))
}

/// ## Summary
/// Merges real entries and already-generated virtual occurrences, sorted by
/// [`display_order`].
#[must_use]
pub fn merge(real: &[LogEntry], virtuals: Vec<VirtualOccurrence>) -> Vec<ScheduledEntry> {
    let mut merged: Vec<ScheduledEntry> = Vec::with_capacity(real.len() + virtuals.len());
    merged.extend(real.iter().cloned().map(ScheduledEntry::Real));
    merged.extend(virtuals.into_iter().map(ScheduledEntry::Virtual));
    merged.sort_by(display_order);
    merged
}

/// ## Summary
/// Expands every recurring entry over `window` and merges the result with
/// the real entries.
///
/// The output depends only on the arguments: calling it twice with the same
/// entries, window, and `today` yields identical rows in identical order.
/// Inputs are never modified.
#[must_use]
pub fn expand(
    entries: &[LogEntry],
    window: ExpansionWindow,
    today: NaiveDate,
) -> Vec<ScheduledEntry> {
    let virtuals: Vec<VirtualOccurrence> = entries
        .iter()
        .filter(|entry| entry.is_recurring())
        .flat_map(|entry| generate_occurrences(entry, window, today))
        .collect();

    tracing::debug!(
        real = entries.len(),
        virtual_count = virtuals.len(),
        window_start = %window.start,
        window_end = %window.end,
        "Merging scheduled entries"
    );

    merge(entries, virtuals)
}
