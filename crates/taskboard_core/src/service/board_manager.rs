//! Board manager facade.
//!
//! # Responsibility
//! - Build tasks (id, trimming, title validation) and dispatch actions.
//! - Hold the single current `AppState` and persist it after each change.
//!
//! # Invariants
//! - The stored snapshot is loaded once, inside `open`, before any mutation.
//! - Every mutation is visible to the next read on the same manager.
//! - Moving a task onto its own project never reaches the reducer.
//! - Unknown project/task ids are silent no-ops for callers (debug-logged).

use crate::model::project::Project;
use crate::model::state::AppState;
use crate::model::task::{normalize_title, Task, ValidationError};
use crate::reducer::{reduce, Action};
use crate::service::task_id::generate_task_id;
use crate::storage::slot::SlotStore;
use crate::storage::state_storage::StateStorage;
use log::{debug, info};

/// Stateful board container handed to the presentation layer.
pub struct BoardManager<S: SlotStore> {
    state: AppState,
    storage: StateStorage<S>,
}

impl<S: SlotStore> BoardManager<S> {
    /// Hydrates from storage (seed on empty/corrupt data) and returns a
    /// manager ready to accept mutations.
    pub fn open(storage: StateStorage<S>) -> Self {
        let loaded = storage.load();
        let mut manager = Self {
            state: AppState::default_seed(),
            storage,
        };
        manager.dispatch(Action::LoadState(loaded));
        info!(
            "event=board_open module=service status=ok projects={} tasks={}",
            manager.state.projects.len(),
            manager.state.total_tasks()
        );
        manager
    }

    /// Creates a task in `project_id` and returns it.
    ///
    /// Title and description are trimmed. An unknown `project_id` still
    /// returns the built task, but the board is left unchanged.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when the trimmed title is empty; the
    ///   board is not touched.
    pub fn add_task(
        &mut self,
        project_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, ValidationError> {
        let title = normalize_title(title)?;
        let task = Task::new(
            generate_task_id(),
            title,
            description.unwrap_or_default().trim(),
        );

        if self.state.project(project_id).is_none() {
            debug!(
                "event=task_add module=service status=not_found project_id={}",
                project_id
            );
        }

        self.dispatch(Action::AddTask {
            project_id: project_id.to_string(),
            task: task.clone(),
        });
        Ok(task)
    }

    /// Removes a task. Missing project or task is a no-op.
    pub fn delete_task(&mut self, project_id: &str, task_id: &str) {
        let present = self
            .state
            .project(project_id)
            .is_some_and(|project| project.contains_task(task_id));
        if !present {
            debug!(
                "event=task_delete module=service status=not_found project_id={} task_id={}",
                project_id, task_id
            );
        }

        self.dispatch(Action::DeleteTask {
            project_id: project_id.to_string(),
            task_id: task_id.to_string(),
        });
    }

    /// Moves a task to the end of another project.
    pub fn move_task(&mut self, task_id: &str, from_project_id: &str, to_project_id: &str) {
        if from_project_id == to_project_id {
            return;
        }

        let present = self
            .state
            .project(from_project_id)
            .is_some_and(|project| project.contains_task(task_id));
        if !present {
            debug!(
                "event=task_move module=service status=not_found task_id={} from={} to={}",
                task_id, from_project_id, to_project_id
            );
        }

        self.dispatch(Action::MoveTask {
            task_id: task_id.to_string(),
            from_project_id: from_project_id.to_string(),
            to_project_id: to_project_id.to_string(),
        });
    }

    /// Current projects in board order, for rendering.
    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn get_projects(&self) -> &[Project] {
        self.projects()
    }

    /// Returns `None` when no project has `project_id`.
    pub fn get_project(&self, project_id: &str) -> Option<&Project> {
        self.state.project(project_id)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        if next == self.state {
            debug!(
                "event=dispatch module=service status=unchanged action={}",
                kind
            );
            return;
        }

        self.state = next;
        debug!(
            "event=dispatch module=service status=ok action={} tasks={}",
            kind,
            self.state.total_tasks()
        );
        self.storage.save(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::BoardManager;
    use crate::storage::slot::MemorySlotStore;
    use crate::storage::state_storage::StateStorage;

    #[test]
    fn add_task_trims_fields_and_defaults_description() {
        let mut board = BoardManager::open(StateStorage::new(MemorySlotStore::new()));

        let task = board.add_task("p3", "  Write tests  ", None).unwrap();
        assert_eq!(task.title, "Write tests");
        assert_eq!(task.description, "");

        let task = board.add_task("p3", "Docs", Some("\n  cover storage  ")).unwrap();
        assert_eq!(task.description, "cover storage");
        assert_eq!(board.get_project("p3").unwrap().task_count(), 2);
    }

    #[test]
    fn add_task_to_unknown_project_returns_task_without_mutation() {
        let mut board = BoardManager::open(StateStorage::new(MemorySlotStore::new()));
        let before = board.state().clone();

        let task = board.add_task("p404", "Orphan", None).unwrap();
        assert_eq!(task.title, "Orphan");
        assert_eq!(board.state(), &before);
    }
}
