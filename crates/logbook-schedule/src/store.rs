//! Storage boundary: untyped rows in, flat presentation records out.
//!
//! Rows arrive as JSON objects with an `id`, a `log_date` and whatever other
//! columns the table has. Recurrence columns are read here and turned into a
//! [`RecurrenceRule`] straight away; nothing past this module sees the raw
//! strings.

use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::entry::{Fields, LogEntry, ScheduledEntry};
use crate::error::{ScheduleError, ScheduleResult};
use crate::rule::{Occurrence, RecurrenceRule};

pub const ID_KEY: &str = "id";
pub const LOG_DATE_KEY: &str = "log_date";
pub const LOG_DATE_ALIAS: &str = "logDate";
pub const RECURRENCE_TYPE_KEY: &str = "recurrence_type";
pub const DAY_OF_WEEK_KEY: &str = "day_of_the_week";
pub const DAY_OF_MONTH_KEY: &str = "day_of_the_month";
pub const MONTHLY_PATTERN_KEY: &str = "monthly_pattern";
pub const IS_VIRTUAL_KEY: &str = "is_virtual";
pub const ORIGINAL_ID_KEY: &str = "original_id";
pub const TARGET_DAY_KEY: &str = "target_day";
pub const GENERATED_ON_KEY: &str = "generated_on";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Recurrence columns exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurrenceDescriptor {
    pub recurrence_type: Option<String>,
    pub day_of_the_week: Option<String>,
    pub day_of_the_month: Option<String>,
    pub monthly_pattern: Option<String>,
}

/// Reads a column as trimmed text; numbers are accepted, blanks and nulls
/// are not.
fn column_text(fields: &Fields, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// ## Summary
/// Parses a weekday name (`"Wednesday"`, `"wed"`) or an index with
/// Sunday = 0 through Saturday = 6.
#[must_use]
pub fn parse_weekday(raw: &str) -> Option<Weekday> {
    let raw = raw.trim();
    if let Ok(idx) = raw.parse::<u8>() {
        return match idx {
            0 => Some(Weekday::Sun),
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            _ => None,
        };
    }
    Weekday::from_str(raw).ok()
}

impl RecurrenceDescriptor {
    #[must_use]
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            recurrence_type: column_text(fields, RECURRENCE_TYPE_KEY),
            day_of_the_week: column_text(fields, DAY_OF_WEEK_KEY),
            day_of_the_month: column_text(fields, DAY_OF_MONTH_KEY),
            monthly_pattern: column_text(fields, MONTHLY_PATTERN_KEY),
        }
    }

    fn weekday(&self) -> Option<Weekday> {
        parse_weekday(self.day_of_the_week.as_deref()?)
    }

    fn monthly_rule(&self) -> Option<RecurrenceRule> {
        let pattern = self
            .monthly_pattern
            .as_deref()
            .map(|p| p.to_ascii_lowercase().replace(['-', ' '], "_"));

        match pattern.as_deref() {
            None | Some("day" | "date" | "day_of_month" | "by_day") => {
                let day = self.day_of_the_month.as_deref()?.parse::<u8>().ok()?;
                RecurrenceRule::monthly_by_day(day)
            }
            Some("last_day") => Some(RecurrenceRule::MonthlyLastDay),
            Some("last_weekday") => Some(RecurrenceRule::MonthlyLastWeekday),
            Some(other) => Some(RecurrenceRule::MonthlyNthWeekday {
                occurrence: Occurrence::parse(other)?,
                weekday: self.weekday()?,
            }),
        }
    }

    /// ## Summary
    /// Interprets the stored columns as a rule.
    ///
    /// Returns `None` for non-recurring rows and for any shape it does not
    /// recognize; a bad descriptor must never break the rest of the view.
    #[must_use]
    pub fn to_rule(&self) -> Option<RecurrenceRule> {
        let kind = self.recurrence_type.as_deref()?.to_ascii_lowercase();
        let rule = match kind.as_str() {
            "weekly" => self.weekday().map(|weekday| RecurrenceRule::Weekly { weekday }),
            "monthly" => self.monthly_rule(),
            "none" | "never" => return None,
            _ => None,
        };
        if rule.is_none() {
            tracing::trace!(
                descriptor = ?self,
                "Unrecognized recurrence descriptor, treating as non-recurring"
            );
        }
        rule
    }
}

fn parse_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part introduced by
/// `T` or a space.
fn parse_log_date(value: Option<&Value>) -> Option<NaiveDate> {
    let raw = value?.as_str()?.trim();
    let (date_part, time_part) = (raw.get(..10)?, raw.get(10..)?);
    if !(time_part.is_empty() || time_part.starts_with(['T', ' '])) {
        return None;
    }
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// ## Summary
/// Converts one stored row into a `LogEntry`.
///
/// `id` and `log_date` are taken out of the passthrough columns; all other
/// columns, recurrence columns included, are kept verbatim. The date is read
/// from `log_date`, or from `logDate` when `log_date` is absent or null.
///
/// ## Errors
/// Returns `ScheduleError::InvalidEntry` if `id` or `log_date` is missing or
/// unreadable.
pub fn entry_from_row(index: usize, mut row: Fields) -> ScheduleResult<LogEntry> {
    let id = parse_id(row.get(ID_KEY)).ok_or_else(|| ScheduleError::InvalidEntry {
        index,
        reason: "missing or non-integer id".to_string(),
    })?;

    let raw_date = [LOG_DATE_KEY, LOG_DATE_ALIAS]
        .into_iter()
        .find_map(|key| row.get(key).filter(|value| !value.is_null()));
    let log_date = parse_log_date(raw_date).ok_or_else(|| ScheduleError::InvalidEntry {
        index,
        reason: format!("entry {id} has a missing or malformed log_date"),
    })?;

    row.remove(ID_KEY);
    row.remove(LOG_DATE_KEY);
    row.remove(LOG_DATE_ALIAS);

    let recurrence = RecurrenceDescriptor::from_fields(&row).to_rule();

    Ok(LogEntry {
        id,
        log_date,
        recurrence,
        fields: row,
    })
}

/// ## Summary
/// Converts a batch of stored rows.
///
/// ## Errors
/// Fails on the first row whose `id` or `log_date` cannot be read.
pub fn entries_from_rows(rows: Vec<Fields>) -> ScheduleResult<Vec<LogEntry>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| entry_from_row(index, row))
        .collect()
}

/// ## Summary
/// Renders a merged row as the flat record the presentation layer consumes.
///
/// Real rows carry `is_virtual: false`. Virtual rows carry the composite id,
/// `original_id`, `target_day` and `generated_on`, and use the occurrence
/// date as their `log_date`.
#[must_use]
pub fn to_record(entry: &ScheduledEntry) -> Fields {
    let mut record = entry.fields().clone();
    match entry {
        ScheduledEntry::Real(real) => {
            record.insert(ID_KEY.to_string(), Value::from(real.id));
            record.insert(
                LOG_DATE_KEY.to_string(),
                Value::from(real.log_date.format(DATE_FORMAT).to_string()),
            );
            record.insert(IS_VIRTUAL_KEY.to_string(), Value::Bool(false));
        }
        ScheduledEntry::Virtual(occurrence) => {
            record.insert(ID_KEY.to_string(), Value::from(entry.key()));
            record.insert(
                LOG_DATE_KEY.to_string(),
                Value::from(occurrence.occurrence_date.format(DATE_FORMAT).to_string()),
            );
            record.insert(IS_VIRTUAL_KEY.to_string(), Value::Bool(true));
            record.insert(
                ORIGINAL_ID_KEY.to_string(),
                Value::from(occurrence.source_entry_id),
            );
            record.insert(
                TARGET_DAY_KEY.to_string(),
                Value::from(occurrence.rule.summary()),
            );
            record.insert(
                GENERATED_ON_KEY.to_string(),
                Value::from(occurrence.generated_on.format(DATE_FORMAT).to_string()),
            );
        }
    }
    record
}

impl Serialize for ScheduledEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_record(self).serialize(serializer)
    }
}
