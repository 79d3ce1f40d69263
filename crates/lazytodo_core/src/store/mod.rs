//! In-memory task store synchronized with storage.
//!
//! # Responsibility
//! - Own the authoritative task list and the visibility filter.
//! - Apply every mutation to memory first, render, then queue persistence.
//!
//! # Invariants
//! - The store is the only mutation surface for tasks and filter.
//! - A render follows every state change.
//! - Failed writes are never rolled back in memory.

mod task_store;

pub use task_store::{RenderSink, StoreMode, TaskStore};
