//! End-to-end statistics properties over one realistic log.

use chrono::NaiveDate;
use sleepdash_core::{
    best_streak, bin_distribution, current_streak, day_detail, latest_month, monthly_trend,
    sleep_color, MonthKey, SleepLog, NEUTRAL_GRAY, STOP_HIGH, STOP_LOW, STOP_MID,
};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Three weeks of January plus a stray February null, with a mid-month dip.
fn sample_log() -> SleepLog {
    [
        ("2023-01-02", Some(6.0)),
        ("2023-01-03", Some(7.0)),
        ("2023-01-04", Some(7.5)),
        ("2023-01-05", Some(8.2)),
        ("2023-01-06", Some(3.0)),
        ("2023-01-07", Some(4.5)),
        ("2023-01-08", None),
        ("2023-01-09", Some(5.5)),
        ("2023-01-10", Some(7.1)),
        ("2023-01-11", Some(7.9)),
        ("2023-01-12", Some(11.5)),
        ("2023-02-01", None),
    ]
    .into_iter()
    .map(|(s, h)| (d(s), h))
    .collect()
}

#[test]
fn color_boundary_values_hit_the_documented_stops() {
    assert_eq!(sleep_color(None), NEUTRAL_GRAY);
    assert_eq!(sleep_color(Some(2.0)), STOP_LOW);
    assert_eq!(sleep_color(Some(6.5)), STOP_MID);
    assert_eq!(sleep_color(Some(11.0)), STOP_HIGH);
    // Clamping keeps loaded out-of-range data harmless.
    assert_eq!(sleep_color(Some(-3.0)), STOP_LOW);
    assert_eq!(sleep_color(Some(99.0)), STOP_HIGH);
}

#[test]
fn current_streak_walks_calendar_days_backward() {
    let log = sample_log();
    // Jan 10-12 all >= 7; Jan 9 breaks the walk.
    assert_eq!(current_streak(&log, d("2023-01-12")), 3);
    assert_eq!(current_streak(&log, d("2023-01-09")), 0);
    // Unrecorded day: zero without touching earlier entries.
    assert_eq!(current_streak(&log, d("2023-01-20")), 0);
}

#[test]
fn best_streak_runs_over_recorded_keys() {
    let log = sample_log();
    // Qualifying run: Jan 9 (5.5) through Jan 12 (11.5) -> 4, after the
    // Jan 6 dip and Jan 8 null reset earlier runs.
    assert_eq!(best_streak(&log), 4);
}

#[test]
fn distribution_matches_the_fixed_bins() {
    let log = sample_log();
    let bins = bin_distribution(&log);

    let labels: Vec<&str> = bins.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["3–4h", "4–5h", "5–6h", "6–7h", "7–8h", "8–9h", "11h+"]
    );

    let seven_to_eight = bins.iter().find(|b| b.label == "7–8h").unwrap();
    assert_eq!(seven_to_eight.count, 4);
    assert_eq!(
        seven_to_eight.dates,
        vec![
            d("2023-01-03"),
            d("2023-01-04"),
            d("2023-01-10"),
            d("2023-01-11")
        ]
    );

    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, 10);
}

#[test]
fn trend_defaults_to_the_latest_month_with_data() {
    let log = sample_log();
    // February holds only a null entry, so January is the latest month.
    let month = latest_month(&log).unwrap();
    assert_eq!(month, MonthKey { year: 2023, month: 1 });

    let trend = monthly_trend(&log, month).unwrap();
    assert_eq!(trend.dates.len(), 10);
    assert_eq!(trend.min, 3.0);
    assert_eq!(trend.min_index, 4);
    assert_eq!(trend.max, 11.5);
    assert_eq!(trend.max_index, 9);

    let expected_avg = (6.0 + 7.0 + 7.5 + 8.2 + 3.0 + 4.5 + 5.5 + 7.1 + 7.9 + 11.5) / 10.0;
    assert!((trend.avg - expected_avg).abs() < 1e-9);
}

#[test]
fn day_detail_combines_streaks_and_visibility() {
    let log = sample_log();

    let peak = day_detail(&log, d("2023-01-12"));
    assert_eq!(peak.hours, Some(11.5));
    assert_eq!(peak.current_streak, 3);
    assert_eq!(peak.best_streak, 4);
    assert!(peak.show_streak_line);

    let null_day = day_detail(&log, d("2023-01-08"));
    assert_eq!(null_day.hours, None);
    assert!(!null_day.show_streak_line);
}
