//! Core state management for a single-user task board.
//!
//! Projects (columns) own ordered tasks (cards). All mutations flow through
//! `BoardManager`, which reduces actions into a new `AppState` and persists
//! the snapshot to one local key-value slot.

pub mod db;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use model::state::AppState;
pub use model::task::{Task, TaskId, ValidationError};
pub use reducer::{reduce, Action};
pub use service::board_manager::BoardManager;
pub use service::task_id::generate_task_id;
pub use storage::slot::{MemorySlotStore, SlotStore, SqliteSlotStore};
pub use storage::state_storage::StateStorage;
pub use storage::{
    default_db_path, StorageError, StorageResult, DB_FILE_NAME, STORAGE_KEY,
    UNREADABLE_BACKUP_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
