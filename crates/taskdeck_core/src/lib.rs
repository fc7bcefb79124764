//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{CategoryFilter, Priority, Task, TaskId, TaskValidationError};
pub use persist::memory::MemoryStorageAdapter;
pub use persist::sqlite::SqliteStorageAdapter;
pub use persist::{StorageAdapter, StoreError, StoreResult};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};
pub use store::task_store::{TaskStore, TaskView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
