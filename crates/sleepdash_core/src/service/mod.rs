//! Use-case services over the store boundary.
//!
//! # Responsibility
//! - Orchestrate the load-prompt-persist startup flow.
//!
//! # Invariants
//! - Services stay storage-agnostic behind the `LogStore` trait.

pub mod entry_service;
