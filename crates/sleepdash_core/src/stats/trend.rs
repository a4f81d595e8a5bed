//! Single-month trend series.
//!
//! # Responsibility
//! - Build the dated hours series for one month with average and extrema.
//! - Pick the default month to chart (latest month with any data).
//!
//! # Invariants
//! - Only non-null entries participate; series dates are ascending.
//! - `min_index`/`max_index` point at the FIRST occurrence of each extremum.

use crate::model::sleep_log::{MonthKey, SleepLog};
use chrono::NaiveDate;

/// Trend series for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    pub month: MonthKey,
    pub dates: Vec<NaiveDate>,
    pub hours: Vec<f64>,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub min_index: usize,
    pub max_index: usize,
}

/// Builds the trend series for `month`.
///
/// Returns `None` when the month has no non-null entries.
pub fn monthly_trend(log: &SleepLog, month: MonthKey) -> Option<MonthlyTrend> {
    let mut dates = Vec::new();
    let mut hours = Vec::new();
    for (date, h) in log.recorded() {
        if month.contains(date) {
            dates.push(date);
            hours.push(h);
        }
    }
    if hours.is_empty() {
        return None;
    }

    let avg = hours.iter().sum::<f64>() / hours.len() as f64;
    let (mut min_index, mut max_index) = (0, 0);
    for (index, &h) in hours.iter().enumerate() {
        if h < hours[min_index] {
            min_index = index;
        }
        if h > hours[max_index] {
            max_index = index;
        }
    }

    Some(MonthlyTrend {
        month,
        min: hours[min_index],
        max: hours[max_index],
        avg,
        min_index,
        max_index,
        dates,
        hours,
    })
}

/// Most recent month carrying any non-null entry.
pub fn latest_month(log: &SleepLog) -> Option<MonthKey> {
    log.recorded().map(|(date, _)| MonthKey::of(date)).max()
}
