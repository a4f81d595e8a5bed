//! Daily entry use-case service.
//!
//! # Responsibility
//! - Run the once-per-run mutation: record today's entry and persist.
//! - Guard the hours invariant at the write boundary.
//!
//! # Invariants
//! - An already-recorded date is never overwritten.
//! - A prompt skip/cancel is recorded as an explicit null entry.
//! - The whole log is persisted at most once per `record_once` call.

use crate::model::sleep_log::{validate_hours, SleepEntryError, SleepLog};
use crate::store::{LogStore, StoreError};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EntryResult<T> = Result<T, EntryError>;

/// Entry-flow error: invalid hours or a persistence failure.
#[derive(Debug)]
pub enum EntryError {
    Validation(SleepEntryError),
    Store(StoreError),
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EntryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SleepEntryError> for EntryError {
    fn from(value: SleepEntryError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for EntryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Outcome of the daily prompt at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryDecision {
    /// The user entered an hours value (pre-validated by the prompt).
    Value(f64),
    /// The user skipped or the prompt failed; recorded as null.
    Skipped,
}

/// Result of the once-per-run record flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    /// The entry was written and the log persisted.
    Recorded { hours: Option<f64> },
    /// The date already had an entry; nothing was written.
    AlreadyRecorded { hours: Option<f64> },
}

/// Startup entry flow over any `LogStore`.
pub struct EntryService<S: LogStore> {
    store: S,
}

impl<S: LogStore> EntryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted log, initializing a fresh store when needed.
    pub fn open_log(&self) -> EntryResult<SleepLog> {
        Ok(self.store.load_or_init()?)
    }

    /// Records `decision` for `date` unless an entry already exists, then
    /// persists the whole log.
    ///
    /// The prompt boundary pre-validates hours; the service still guards
    /// the write so no out-of-range value reaches the store.
    pub fn record_once(
        &self,
        log: &mut SleepLog,
        date: NaiveDate,
        decision: EntryDecision,
    ) -> EntryResult<RecordOutcome> {
        if let Some(existing) = log.entry(date) {
            info!(
                "event=entry_exists module=service status=ok date={date} has_hours={}",
                existing.is_some()
            );
            return Ok(RecordOutcome::AlreadyRecorded { hours: existing });
        }

        let hours = match decision {
            EntryDecision::Value(value) => {
                validate_hours(value)?;
                Some(value)
            }
            EntryDecision::Skipped => None,
        };

        log.insert(date, hours);
        self.store.persist(log)?;

        match hours {
            Some(_) => info!("event=entry_recorded module=service status=ok date={date}"),
            None => info!("event=entry_skipped module=service status=ok date={date}"),
        }
        Ok(RecordOutcome::Recorded { hours })
    }
}
