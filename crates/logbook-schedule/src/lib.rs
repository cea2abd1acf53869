//! Recurrence expansion for operational log entries.
//!
//! Stored entries may carry a weekly or monthly [`rule::RecurrenceRule`].
//! [`merge::expand`] turns them into virtual occurrences over a date window
//! and merges those with the real entries into one display-ordered list.
//! Nothing generated here is ever persisted.

pub mod dates;
pub mod entry;
pub mod error;
pub mod generate;
pub mod merge;
pub mod rule;
pub mod store;
pub mod week_range;
pub mod window;

pub use entry::{LogEntry, ScheduledEntry, VirtualId, VirtualOccurrence};
pub use merge::expand;
pub use rule::{Occurrence, RecurrenceRule};
pub use week_range::transform_week_range;
pub use window::ExpansionWindow;
