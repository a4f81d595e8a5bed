//! Domain model for the sleep log.
//!
//! # Responsibility
//! - Define the canonical date-keyed sleep record shared by all queries.
//! - Keep entry validation rules in one place.
//!
//! # Invariants
//! - One entry per calendar date; dates iterate in ascending order.
//! - A present entry with no hours value is distinct from an absent entry.

pub mod sleep_log;
