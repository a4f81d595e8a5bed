//! On-demand statistics over the sleep log.
//!
//! # Responsibility
//! - Derive streaks, distribution bins, monthly trends and per-day detail
//!   as pure functions of the loaded log.
//!
//! # Invariants
//! - No function here mutates the log or touches storage.
//! - Null entries are excluded from every numeric aggregate.

pub mod detail;
pub mod distribution;
pub mod streak;
pub mod trend;
