//! Streak counting rules.
//!
//! # Responsibility
//! - Count the consecutive-day streak ending at a given date (>= 7h rule).
//! - Track the best-ever run across the recorded history (>= 4h rule).
//!
//! # Invariants
//! - `current_streak` walks calendar days backward from the start date.
//! - `best_streak` walks the sorted *recorded key* sequence, NOT calendar
//!   days: a gap of unrecorded days does not break a run, only a null or
//!   sub-threshold entry does. The gap rule is intentional and kept as-is
//!   from the reference implementation.

use crate::model::sleep_log::SleepLog;
use chrono::NaiveDate;

/// Hours threshold for the streak ending "today".
pub const CURRENT_STREAK_MIN_HOURS: f64 = 7.0;

/// Hours threshold for the best-ever streak.
pub const BEST_STREAK_MIN_HOURS: f64 = 4.0;

/// Consecutive calendar days ending at `date` with at least 7h slept.
///
/// Returns 0 when `date` itself is missing, null, or below threshold.
pub fn current_streak(log: &SleepLog, date: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = Some(date);
    while let Some(current) = day {
        match log.entry(current) {
            Some(Some(hours)) if hours >= CURRENT_STREAK_MIN_HOURS => {
                streak += 1;
                day = current.pred_opt();
            }
            _ => break,
        }
    }
    streak
}

/// Longest run of consecutive recorded entries with at least 4h slept.
///
/// "Consecutive" means adjacent in the ascending key sequence; calendar
/// gaps between recorded dates do not reset the run.
pub fn best_streak(log: &SleepLog) -> u32 {
    let mut best = 0;
    let mut run = 0;
    for (_, hours) in log.iter() {
        match hours {
            Some(h) if h >= BEST_STREAK_MIN_HOURS => {
                run += 1;
                best = best.max(run);
            }
            _ => run = 0,
        }
    }
    best
}
