//! Repository layer for task persistence.
//!
//! # Responsibility
//! - Define the storage contract used by the background writer.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before touching SQL.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod task_repo;
