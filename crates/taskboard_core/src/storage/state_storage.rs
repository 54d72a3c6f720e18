//! Snapshot load/save with fallback to the default seed.

use crate::model::state::AppState;
use crate::storage::slot::SlotStore;
use crate::storage::{StorageError, StorageResult, STORAGE_KEY, UNREADABLE_BACKUP_KEY};
use log::{debug, info, warn};
use serde_json::Value;

/// Storage adapter for whole-board snapshots.
pub struct StateStorage<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> StateStorage<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Reads the stored snapshot, or the seed when absent or unusable.
    ///
    /// Never fails; problems are logged and degrade to `AppState::default_seed()`.
    /// A payload that cannot be parsed is copied to `UNREADABLE_BACKUP_KEY`
    /// first, since the next `save` replaces it.
    pub fn load(&self) -> AppState {
        match self.try_load() {
            Ok(Some(state)) => {
                info!(
                    "event=state_load module=storage status=ok projects={} tasks={}",
                    state.projects.len(),
                    state.total_tasks()
                );
                state
            }
            Ok(None) => {
                info!("event=state_load module=storage status=empty fallback=seed");
                AppState::default_seed()
            }
            Err(err) => {
                warn!(
                    "event=state_load module=storage status=error fallback=seed error_code={} error={}",
                    err.code(),
                    err
                );
                AppState::default_seed()
            }
        }
    }

    /// Writes `state` under `STORAGE_KEY`. Fire-and-forget.
    pub fn save(&self, state: &AppState) {
        match self.try_save(state) {
            Ok(bytes) => debug!(
                "event=state_save module=storage status=ok bytes={} tasks={}",
                bytes,
                state.total_tasks()
            ),
            Err(err) => warn!(
                "event=state_save module=storage status=error error_code={} error={}",
                err.code(),
                err
            ),
        }
    }

    fn try_load(&self) -> StorageResult<Option<AppState>> {
        let Some(raw) = self.slots.read_slot(STORAGE_KEY)? else {
            return Ok(None);
        };
        match parse_snapshot(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                self.preserve_unreadable(&raw);
                Err(err)
            }
        }
    }

    fn preserve_unreadable(&self, raw: &str) {
        match self.slots.write_slot(UNREADABLE_BACKUP_KEY, raw) {
            Ok(()) => info!(
                "event=state_backup module=storage status=ok key={} bytes={}",
                UNREADABLE_BACKUP_KEY,
                raw.len()
            ),
            Err(err) => warn!(
                "event=state_backup module=storage status=error error_code={} error={}",
                err.code(),
                err
            ),
        }
    }

    fn try_save(&self, state: &AppState) -> StorageResult<usize> {
        let raw = serde_json::to_string(state).map_err(StorageError::Serialize)?;
        self.slots.write_slot(STORAGE_KEY, &raw)?;
        Ok(raw.len())
    }
}

/// Parses a stored payload. Unknown fields are ignored and `null` text or
/// task lists read as empty.
fn parse_snapshot(raw: &str) -> StorageResult<AppState> {
    let value: Value = serde_json::from_str(raw).map_err(StorageError::Deserialize)?;
    match value.get("projects") {
        None | Some(Value::Null) => return Err(StorageError::MissingProjects),
        Some(_) => {}
    }
    serde_json::from_value(value).map_err(StorageError::Deserialize)
}
