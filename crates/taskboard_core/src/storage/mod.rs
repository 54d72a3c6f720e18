//! Board persistence: one serialized snapshot in one key-value slot.
//!
//! # Responsibility
//! - Abstract the raw slot backend (`SlotStore`).
//! - Load/save whole `AppState` snapshots as JSON (`StateStorage`).
//!
//! # Invariants
//! - `StateStorage::load` and `StateStorage::save` never fail outward.
//! - Every snapshot lives under `STORAGE_KEY`; there is no version field.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod slot;
pub mod state_storage;

/// Fixed slot key for the board snapshot.
pub const STORAGE_KEY: &str = "projectBoardState";
/// Slot that keeps the last payload `load` could not parse.
pub const UNREADABLE_BACKUP_KEY: &str = "projectBoardState.unreadable";
/// Conventional database file name inside an app data directory.
pub const DB_FILE_NAME: &str = "taskboard.sqlite3";

pub type StorageResult<T> = Result<T, StorageError>;

/// Internal persistence failure. Logged, never surfaced to board callers.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialize(serde_json::Error),
    Deserialize(serde_json::Error),
    /// Payload parsed but has no usable `projects` field.
    MissingProjects,
}

impl StorageError {
    /// Short machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "slot_io_failed",
            Self::Serialize(_) => "serialize_failed",
            Self::Deserialize(_) => "deserialize_failed",
            Self::MissingProjects => "missing_projects",
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize board state: {err}"),
            Self::Deserialize(err) => write!(f, "failed to parse stored board state: {err}"),
            Self::MissingProjects => write!(f, "stored board state has no `projects` field"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) | Self::Deserialize(err) => Some(err),
            Self::MissingProjects => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Joins `DB_FILE_NAME` onto an app data directory.
pub fn default_db_path(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join(DB_FILE_NAME)
}
