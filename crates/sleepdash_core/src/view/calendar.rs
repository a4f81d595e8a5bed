//! Year calendar heatmap view model.
//!
//! # Responsibility
//! - Lay out one year as a 12x31 grid of unit cells with fills and labels.
//! - Expose a region map so the renderer can resolve clicks to dates.
//!
//! # Invariants
//! - Cell geometry: `x = month_index`, `y = 31 - day`; invalid dates
//!   (e.g. Feb 30) produce no cell.
//! - Fill precedence: recorded non-null entry -> gradient; otherwise a date
//!   between the first recorded date (inclusive) and today (exclusive) ->
//!   neutral gray; otherwise white.

use crate::color::{label_color_on, sleep_color, Rgb, NEUTRAL_GRAY, WHITE};
use crate::model::sleep_log::SleepLog;
use crate::view::regions::{Rect, RegionMap};
use chrono::NaiveDate;

/// Single-letter month headers, January through December.
pub const MONTH_LETTERS: [char; 12] = ['J', 'F', 'M', 'A', 'M', 'J', 'J', 'A', 'S', 'O', 'N', 'D'];

const DAYS_PER_COLUMN: u32 = 31;

/// Hour label drawn inside a recorded cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLabel {
    /// One-decimal hours text, e.g. `7.5`.
    pub text: String,
    /// Luminance-contrast text color for the cell fill.
    pub color: Rgb,
}

/// One unit cell of the heatmap grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub x: f64,
    pub y: f64,
    pub fill: Rgb,
    /// Present only when the date has a non-null entry.
    pub label: Option<CellLabel>,
}

/// Full-year heatmap with click regions.
#[derive(Debug, Clone)]
pub struct CalendarView {
    pub year: i32,
    pub cells: Vec<CalendarCell>,
    pub regions: RegionMap<NaiveDate>,
}

impl CalendarView {
    /// Cell for a specific date, if the grid contains it.
    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

/// Builds the heatmap grid for `year`.
///
/// `today` bounds the gray backfill range; dates from today onward stay
/// white even when earlier dates are recorded.
pub fn calendar_view(log: &SleepLog, year: i32, today: NaiveDate) -> CalendarView {
    // No recorded data means no backfill window at all.
    let first_recorded = log.first_recorded_date().unwrap_or(today);

    let mut cells = Vec::new();
    let mut regions = RegionMap::new();

    for day in 1..=DAYS_PER_COLUMN {
        for month in 1..=12u32 {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };

            let x = (month - 1) as f64;
            let y = (DAYS_PER_COLUMN - day) as f64;
            let entry = log.entry(date).flatten();

            let (fill, label) = match entry {
                Some(hours) => {
                    let fill = sleep_color(Some(hours));
                    let label = CellLabel {
                        text: format!("{hours:.1}"),
                        color: label_color_on(fill),
                    };
                    (fill, Some(label))
                }
                None if first_recorded <= date && date < today => (NEUTRAL_GRAY, None),
                None => (WHITE, None),
            };

            cells.push(CalendarCell { date, x, y, fill, label });
            regions.insert(Rect::new(x, y, 1.0, 1.0), date);
        }
    }

    CalendarView { year, cells, regions }
}
