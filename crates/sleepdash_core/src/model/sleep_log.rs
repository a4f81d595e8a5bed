//! Sleep log domain model.
//!
//! # Responsibility
//! - Hold the canonical `date -> Option<hours>` mapping for one user.
//! - Validate hours at entry time.
//! - Provide the typed year-month key used by trend queries.
//!
//! # Invariants
//! - Keys are unique calendar dates; iteration is ascending by date.
//! - `Some(hours)` passed through `validate_hours` satisfies `0.0 <= hours <= 24.0`.
//! - `None` means "recorded as no sleep data", distinct from a missing key
//!   and distinct from a recorded `0.0`.
//! - Loaded data is NOT re-validated; out-of-range persisted values flow
//!   through downstream clamping instead of crashing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Inclusive bounds accepted for a sleep entry, in hours.
pub const MIN_ENTRY_HOURS: f64 = 0.0;
pub const MAX_ENTRY_HOURS: f64 = 24.0;

/// Validation failure for a new sleep entry.
#[derive(Debug, Clone, PartialEq)]
pub enum SleepEntryError {
    HoursOutOfRange { hours: f64 },
    HoursNotFinite,
}

impl Display for SleepEntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoursOutOfRange { hours } => write!(
                f,
                "hours out of range: {hours} (expected {MIN_ENTRY_HOURS}..={MAX_ENTRY_HOURS})"
            ),
            Self::HoursNotFinite => write!(f, "hours must be a finite number"),
        }
    }
}

impl Error for SleepEntryError {}

/// Checks a candidate hours value against entry-time bounds.
///
/// Applied at the prompt/service boundary only; values already persisted
/// bypass this check on load.
pub fn validate_hours(hours: f64) -> Result<(), SleepEntryError> {
    if !hours.is_finite() {
        return Err(SleepEntryError::HoursNotFinite);
    }
    if !(MIN_ENTRY_HOURS..=MAX_ENTRY_HOURS).contains(&hours) {
        return Err(SleepEntryError::HoursOutOfRange { hours });
    }
    Ok(())
}

/// Canonical mapping from calendar date to recorded sleep hours.
///
/// Serializes as a JSON object keyed by ISO-8601 date strings; an entry
/// recorded without data round-trips as an explicit `null`, never an
/// omitted key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SleepLog {
    entries: BTreeMap<NaiveDate, Option<f64>>,
}

impl SleepLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any entry exists for `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Returns the entry for `date`.
    ///
    /// Outer `None` means no entry was recorded; `Some(None)` means an
    /// entry was recorded with no sleep data.
    pub fn entry(&self, date: NaiveDate) -> Option<Option<f64>> {
        self.entries.get(&date).copied()
    }

    /// Inserts or replaces the entry for `date`.
    pub fn insert(&mut self, date: NaiveDate, hours: Option<f64>) {
        self.entries.insert(date, hours);
    }

    /// Iterates all entries ascending by date.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.entries.iter().map(|(date, hours)| (*date, *hours))
    }

    /// Iterates entries that carry an hours value, ascending by date.
    pub fn recorded(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.entries
            .iter()
            .filter_map(|(date, hours)| hours.map(|h| (*date, h)))
    }

    /// Earliest date with a non-null hours value, if any.
    pub fn first_recorded_date(&self) -> Option<NaiveDate> {
        self.recorded().next().map(|(date, _)| date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NaiveDate, Option<f64>)> for SleepLog {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Option<f64>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Typed `YYYY-MM` key for month-scoped queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Builds the key for the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse failure for a `YYYY-MM` month key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKeyParseError {
    input: String,
}

impl Display for MonthKeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid month key `{}`; expected YYYY-MM", self.input)
    }
}

impl Error for MonthKeyParseError {}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthKeyParseError {
            input: value.to_string(),
        };

        let (year_part, month_part) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}
