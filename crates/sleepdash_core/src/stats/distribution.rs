//! Fixed-edge distribution binning for the pie chart.
//!
//! # Responsibility
//! - Group non-null entries into half-open hour ranges with stable labels.
//!
//! # Invariants
//! - Bin edges are fixed at whole hours 1 through 11; values >= 11 fall
//!   into the open-ended `11h+` bin and values below 1 match no bin.
//! - Zero-count bins are dropped; surviving bins stay ascending by edge.
//! - Member dates within a bin are ascending.

use crate::model::sleep_log::SleepLog;
use chrono::NaiveDate;

const BIN_EDGES: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// One populated distribution bin.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionBin {
    /// Display label, e.g. `3–4h` or `11h+`.
    pub label: String,
    pub count: usize,
    /// Dates whose entries fell into this bin, ascending.
    pub dates: Vec<NaiveDate>,
}

impl DistributionBin {
    /// This bin's share of `total` entries, in percent.
    pub fn share_percent(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 * 100.0 / total as f64
        }
    }
}

/// Bins all non-null entries by hours slept.
pub fn bin_distribution(log: &SleepLog) -> Vec<DistributionBin> {
    let mut counts = [0usize; BIN_EDGES.len()];
    let mut dates: Vec<Vec<NaiveDate>> = vec![Vec::new(); BIN_EDGES.len()];

    for (date, hours) in log.recorded() {
        if let Some(index) = bin_index(hours) {
            counts[index] += 1;
            dates[index].push(date);
        }
    }

    counts
        .into_iter()
        .zip(dates)
        .enumerate()
        .filter(|(_, (count, _))| *count > 0)
        .map(|(index, (count, dates))| DistributionBin {
            label: bin_label(index),
            count,
            dates,
        })
        .collect()
}

fn bin_index(hours: f64) -> Option<usize> {
    for i in 0..BIN_EDGES.len() - 1 {
        if (BIN_EDGES[i] as f64) <= hours && hours < BIN_EDGES[i + 1] as f64 {
            return Some(i);
        }
    }
    if hours >= BIN_EDGES[BIN_EDGES.len() - 1] as f64 {
        return Some(BIN_EDGES.len() - 1);
    }
    None
}

fn bin_label(index: usize) -> String {
    if index == BIN_EDGES.len() - 1 {
        format!("{}h+", BIN_EDGES[index])
    } else {
        format!("{}–{}h", BIN_EDGES[index], BIN_EDGES[index + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::bin_distribution;
    use crate::model::sleep_log::SleepLog;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn log_of(entries: &[(&str, Option<f64>)]) -> SleepLog {
        entries.iter().map(|(s, h)| (d(s), *h)).collect()
    }

    #[test]
    fn zero_count_bins_are_dropped_and_order_is_ascending() {
        let log = log_of(&[
            ("2023-01-01", Some(3.5)),
            ("2023-01-02", Some(3.5)),
            ("2023-01-03", Some(11.5)),
        ]);

        let bins = bin_distribution(&log);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].label, "3–4h");
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[0].dates, vec![d("2023-01-01"), d("2023-01-02")]);
        assert_eq!(bins[1].label, "11h+");
        assert_eq!(bins[1].count, 1);
        assert_eq!(bins[1].dates, vec![d("2023-01-03")]);
    }

    #[test]
    fn bins_are_half_open_on_the_upper_edge() {
        let log = log_of(&[("2023-01-01", Some(4.0)), ("2023-01-02", Some(5.0))]);
        let bins = bin_distribution(&log);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].label, "4–5h");
        assert_eq!(bins[1].label, "5–6h");
    }

    #[test]
    fn values_below_one_hour_match_no_bin() {
        let log = log_of(&[("2023-01-01", Some(0.5)), ("2023-01-02", Some(0.0))]);
        assert!(bin_distribution(&log).is_empty());
    }

    #[test]
    fn null_entries_are_excluded() {
        let log = log_of(&[("2023-01-01", None), ("2023-01-02", Some(11.0))]);
        let bins = bin_distribution(&log);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].label, "11h+");
    }

    #[test]
    fn share_percent_is_relative_to_total() {
        let log = log_of(&[
            ("2023-01-01", Some(3.5)),
            ("2023-01-02", Some(3.5)),
            ("2023-01-03", Some(8.5)),
            ("2023-01-04", Some(8.5)),
        ]);
        let bins = bin_distribution(&log);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
        assert!((bins[0].share_percent(total) - 50.0).abs() < 1e-9);
    }
}
