//! Asynchronous storage adapter over the task repository.
//!
//! # Responsibility
//! - Open the task database on a dedicated writer thread.
//! - Expose get-all/put/delete/clear as asynchronous operations.
//! - Report the outcome of each write through a [`PendingWrite`] handle.
//!
//! # Invariants
//! - One writer thread owns the connection; commands run in enqueue order.
//! - Commands for the same record are never reordered (last enqueued wins).
//! - Every failed write is logged by the writer whether or not the caller
//!   waits on its handle.

mod adapter;
mod error;
mod pending;
mod writer;

pub use adapter::{StorageAdapter, StorageLocation};
pub use error::{StorageError, StorageResult};
pub use pending::{PendingWrite, WriteOp};
