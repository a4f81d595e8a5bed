//! JSON-file log store.
//!
//! # Responsibility
//! - Round-trip the sleep log through one pretty-printed JSON document.
//! - Apply the load policy: missing/empty/malformed files become a fresh
//!   valid empty store on disk.
//!
//! # Side effects
//! - Emits `store_load` / `store_persist` events with duration and status.

use super::{LogStore, StoreResult};
use crate::model::sleep_log::SleepLog;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File-backed store holding the whole log as one JSON object.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_log(&self, log: &SleepLog) -> StoreResult<()> {
        let body = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}

impl LogStore for JsonFileStore {
    fn load_or_init(&self) -> StoreResult<SleepLog> {
        let started_at = Instant::now();
        info!("event=store_load module=store status=start");

        let missing = !self.path.exists()
            || fs::metadata(&self.path).map(|meta| meta.len() == 0).unwrap_or(true);
        if missing {
            let log = SleepLog::new();
            self.write_log(&log)?;
            info!(
                "event=store_load module=store status=ok outcome=initialized entries=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(log);
        }

        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=store_read_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match serde_json::from_str::<SleepLog>(&body) {
            Ok(log) => {
                info!(
                    "event=store_load module=store status=ok outcome=loaded entries={} duration_ms={}",
                    log.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(log)
            }
            Err(err) => {
                // Malformed store resets to a valid empty document instead
                // of failing startup.
                warn!(
                    "event=store_load module=store status=warn outcome=reset_malformed error={}",
                    err
                );
                let log = SleepLog::new();
                self.write_log(&log)?;
                Ok(log)
            }
        }
    }

    fn persist(&self, log: &SleepLog) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_log(log) {
            Ok(()) => {
                info!(
                    "event=store_persist module=store status=ok entries={} duration_ms={}",
                    log.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
