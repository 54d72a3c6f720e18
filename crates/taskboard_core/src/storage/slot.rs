//! Raw key-value slot backends.

use crate::db::open_db;
use crate::storage::StorageResult;
use rusqlite::{params, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Persistent string slots addressed by key.
pub trait SlotStore {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>>;
    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-file slots. Holds no connection between calls.
#[derive(Debug, Clone)]
pub struct SqliteSlotStore {
    db_path: PathBuf,
}

impl SqliteSlotStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl SlotStore for SqliteSlotStore {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = open_db(&self.db_path)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = open_db(&self.db_path)?;
        conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local slots for tests and throwaway boards.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates one slot, e.g. with a hand-written payload.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.into(), value.into());
        store
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write_slot(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySlotStore, SlotStore, SqliteSlotStore};

    #[test]
    fn memory_slot_overwrites_previous_value() {
        let store = MemorySlotStore::new();
        assert_eq!(store.read_slot("k").unwrap(), None);
        store.write_slot("k", "one").unwrap();
        store.write_slot("k", "two").unwrap();
        assert_eq!(store.read_slot("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn sqlite_slot_persists_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.sqlite3");

        SqliteSlotStore::new(&path).write_slot("k", "v1").unwrap();
        SqliteSlotStore::new(&path).write_slot("k", "v2").unwrap();

        let reopened = SqliteSlotStore::new(&path);
        assert_eq!(reopened.read_slot("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(reopened.read_slot("other").unwrap(), None);
    }
}
