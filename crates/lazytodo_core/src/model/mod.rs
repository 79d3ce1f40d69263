//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record shared by storage, store and view.
//! - Define the visibility filter and the creation clock.
//!
//! # Invariants
//! - A stored task always has non-empty, trimmed text.
//! - Task identity is the creation timestamp in epoch milliseconds.

pub mod clock;
pub mod filter;
pub mod task;
