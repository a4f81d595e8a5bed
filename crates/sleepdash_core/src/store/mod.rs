//! Persistence boundary for the sleep log.
//!
//! # Responsibility
//! - Define the storage contract consumed by the entry service.
//! - Keep file-format details inside the store implementations.
//!
//! # Invariants
//! - The log is read whole at startup and rewritten whole on mutation;
//!   there is no incremental write path.
//! - Load never fails on malformed content; policy is reset-to-empty.

pub mod json_store;

use crate::model::sleep_log::SleepLog;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for log persistence.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failed: {err}"),
            Self::Serialize(err) => write!(f, "store serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage contract for the sleep log.
pub trait LogStore {
    /// Loads the persisted log, creating a fresh empty store when the
    /// backing file is missing, empty, or malformed.
    fn load_or_init(&self) -> StoreResult<SleepLog>;

    /// Rewrites the whole persisted log.
    fn persist(&self, log: &SleepLog) -> StoreResult<()>;
}
