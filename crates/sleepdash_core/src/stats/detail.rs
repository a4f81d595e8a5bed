//! Per-day detail aggregation for the click popup.
//!
//! # Responsibility
//! - Collect everything the detail popup shows for one date in one pass.
//!
//! # Invariants
//! - The streak line is visible only for a non-null, non-zero entry.

use crate::model::sleep_log::SleepLog;
use crate::stats::streak::{best_streak, current_streak};
use chrono::{Datelike, NaiveDate, Weekday};

/// Everything the presentation layer needs to render one day's popup.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Recorded hours; `None` for both absent and null entries, which the
    /// popup renders identically ("No sleep recorded.").
    pub hours: Option<f64>,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Whether the current-streak line is shown at all.
    pub show_streak_line: bool,
}

/// Aggregates the popup content for `date`.
pub fn day_detail(log: &SleepLog, date: NaiveDate) -> DayDetail {
    let hours = log.entry(date).flatten();
    DayDetail {
        date,
        weekday: date.weekday(),
        hours,
        current_streak: current_streak(log, date),
        best_streak: best_streak(log),
        // Zero hours hides the line too, not just null.
        show_streak_line: hours.is_some_and(|h| h != 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::day_detail;
    use crate::model::sleep_log::SleepLog;
    use chrono::{NaiveDate, Weekday};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn log_of(entries: &[(&str, Option<f64>)]) -> SleepLog {
        entries.iter().map(|(s, h)| (d(s), *h)).collect()
    }

    #[test]
    fn detail_aggregates_streaks_and_weekday() {
        let log = log_of(&[
            ("2023-01-13", Some(7.2)),
            ("2023-01-14", Some(7.0)),
            ("2023-01-15", Some(8.0)),
        ]);

        let detail = day_detail(&log, d("2023-01-15"));
        assert_eq!(detail.weekday, Weekday::Sun);
        assert_eq!(detail.hours, Some(8.0));
        assert_eq!(detail.current_streak, 3);
        assert_eq!(detail.best_streak, 3);
        assert!(detail.show_streak_line);
    }

    #[test]
    fn streak_line_hidden_for_null_and_zero_entries() {
        let log = log_of(&[("2023-01-14", None), ("2023-01-15", Some(0.0))]);

        let null_day = day_detail(&log, d("2023-01-14"));
        assert_eq!(null_day.hours, None);
        assert!(!null_day.show_streak_line);

        let zero_day = day_detail(&log, d("2023-01-15"));
        assert_eq!(zero_day.hours, Some(0.0));
        assert!(!zero_day.show_streak_line);

        let absent_day = day_detail(&log, d("2023-01-16"));
        assert_eq!(absent_day.hours, None);
        assert!(!absent_day.show_streak_line);
    }
}
