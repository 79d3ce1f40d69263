//! Core logic for LazyTodo, a local task list.
//!
//! Every mutation lands in memory first, is rendered immediately, and is
//! written to a local SQLite store by a single background writer.

pub mod bindings;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod store;
pub mod view;

pub use bindings::{Key, TodoBindings, UiEvent};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::clock::{Clock, SystemClock};
pub use model::filter::{FilterKind, ParseFilterError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use storage::{
    PendingWrite, StorageAdapter, StorageError, StorageLocation, StorageResult, WriteOp,
};
pub use store::{RenderSink, StoreMode, TaskStore};
pub use view::{render, render_html, render_text, Locale, TaskListView, TaskRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
