//! Core domain logic for SleepDash.
//! This crate is the single source of truth for business invariants.

pub mod color;
pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod store;
pub mod view;

pub use color::{
    label_color_on, legend_swatches, relative_luminance, sleep_color, Rgb, NEUTRAL_GRAY,
    STOP_HIGH, STOP_LOW, STOP_MID,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::sleep_log::{
    validate_hours, MonthKey, MonthKeyParseError, SleepEntryError, SleepLog,
};
pub use service::entry_service::{
    EntryDecision, EntryError, EntryResult, EntryService, RecordOutcome,
};
pub use stats::detail::{day_detail, DayDetail};
pub use stats::distribution::{bin_distribution, DistributionBin};
pub use stats::streak::{best_streak, current_streak};
pub use stats::trend::{latest_month, monthly_trend, MonthlyTrend};
pub use store::json_store::JsonFileStore;
pub use store::{LogStore, StoreError, StoreResult};
pub use view::calendar::{calendar_view, CalendarCell, CalendarView, CellLabel, MONTH_LETTERS};
pub use view::regions::{Rect, RegionMap};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
