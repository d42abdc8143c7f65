//! Core task-list logic for the to-do app.
//! This crate owns the task record, its operations and its local persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod ops;
pub mod screen;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{now_epoch_ms, SortMode, Task, TaskId, UnknownSortMode};
pub use screen::TaskScreen;
pub use storage::{
    KvStore, MemoryKvStore, SqliteKvStore, StorageError, StorageResult, TaskStorage, TODOS_KEY,
};
pub use store::TaskStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
