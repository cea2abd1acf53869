//! Real and virtual log entries.

use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::rule::RecurrenceRule;

/// Opaque business columns carried through the engine untouched.
pub type Fields = Map<String, Value>;

/// A stored log entry as seen by the recurrence engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    /// Anchor date. Never produced again as a virtual occurrence.
    pub log_date: NaiveDate,
    pub recurrence: Option<RecurrenceRule>,
    pub fields: Fields,
}

impl LogEntry {
    #[must_use]
    pub fn new(id: i64, log_date: NaiveDate) -> Self {
        Self {
            id,
            log_date,
            recurrence: None,
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

/// Identifier of a virtual occurrence, derived only from its source entry
/// and date so every recomputation yields the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualId {
    pub source_entry_id: i64,
    pub date: NaiveDate,
}

impl fmt::Display for VirtualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.source_entry_id,
            self.date.format("%Y%m%d")
        )
    }
}

/// A generated, never-persisted instance of a recurring entry.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualOccurrence {
    pub id: VirtualId,
    /// Lookup-only back-reference; the source may change or disappear.
    pub source_entry_id: i64,
    pub occurrence_date: NaiveDate,
    pub rule: RecurrenceRule,
    /// The "today" of the batch that produced this record.
    pub generated_on: NaiveDate,
    pub fields: Fields,
}

impl VirtualOccurrence {
    /// ## Summary
    /// Materializes an occurrence of `source` on `date`, copying its fields.
    #[must_use]
    pub fn from_source(
        source: &LogEntry,
        rule: RecurrenceRule,
        date: NaiveDate,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            id: VirtualId {
                source_entry_id: source.id,
                date,
            },
            source_entry_id: source.id,
            occurrence_date: date,
            rule,
            generated_on,
            fields: source.fields.clone(),
        }
    }
}

/// One row of the merged view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledEntry {
    Real(LogEntry),
    Virtual(VirtualOccurrence),
}

impl ScheduledEntry {
    /// Calendar date the row is displayed on.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Real(entry) => entry.log_date,
            Self::Virtual(occurrence) => occurrence.occurrence_date,
        }
    }

    /// Id used for tie-breaking; a virtual row ranks as its source entry.
    #[must_use]
    pub const fn sort_id(&self) -> i64 {
        match self {
            Self::Real(entry) => entry.id,
            Self::Virtual(occurrence) => occurrence.source_entry_id,
        }
    }

    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual(_))
    }

    /// Virtual rows must never be edited, duplicated, or deleted as such.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !self.is_virtual()
    }

    #[must_use]
    pub const fn fields(&self) -> &Fields {
        match self {
            Self::Real(entry) => &entry.fields,
            Self::Virtual(occurrence) => &occurrence.fields,
        }
    }

    /// Rendered row id: the numeric id for real rows, the composite key for
    /// virtual ones.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Real(entry) => entry.id.to_string(),
            Self::Virtual(occurrence) => occurrence.id.to_string(),
        }
    }
}
