//! Presentation-facing view models.
//!
//! # Responsibility
//! - Describe chart geometry and fills without rendering anything.
//! - Map charted regions back to lookup keys for click handling.
//!
//! # Invariants
//! - View models are plain data; building one never mutates the log.

pub mod calendar;
pub mod regions;
