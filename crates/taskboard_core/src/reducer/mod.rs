//! Board state transitions.
//!
//! # Responsibility
//! - Map `(current state, action)` to the next whole-board snapshot.
//! - Keep every transition pure: no I/O, no logging, no panics.
//!
//! # Invariants
//! - The input snapshot is never mutated; a new `AppState` is returned.
//! - Unknown project/task ids degrade to no-ops instead of errors.
//! - Move is one transition: the task is never observable in zero or two
//!   projects.

use crate::model::project::{Project, ProjectId};
use crate::model::state::AppState;
use crate::model::task::{Task, TaskId};

/// Closed set of board transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Appends `task` to the end of `project_id`'s sequence.
    AddTask { project_id: ProjectId, task: Task },
    /// Removes `task_id` from `project_id`'s sequence if present.
    DeleteTask {
        project_id: ProjectId,
        task_id: TaskId,
    },
    /// Removes `task_id` from the source and appends it to the destination.
    MoveTask {
        task_id: TaskId,
        from_project_id: ProjectId,
        to_project_id: ProjectId,
    },
    /// Replaces the whole state verbatim. Used for init hydration only.
    LoadState(AppState),
}

impl Action {
    /// Stable label for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::MoveTask { .. } => "move_task",
            Self::LoadState(_) => "load_state",
        }
    }
}

/// Computes the next board snapshot. Total over all inputs.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::AddTask { project_id, task } => map_project(state, &project_id, |project| {
            let mut tasks = project.tasks.clone();
            tasks.push(task.clone());
            tasks
        }),
        Action::DeleteTask {
            project_id,
            task_id,
        } => map_project(state, &project_id, |project| without_task(project, &task_id)),
        Action::MoveTask {
            task_id,
            from_project_id,
            to_project_id,
        } => move_task(state, &task_id, &from_project_id, &to_project_id),
        Action::LoadState(payload) => payload,
    }
}

fn map_project<F>(state: &AppState, project_id: &str, rebuild_tasks: F) -> AppState
where
    F: Fn(&Project) -> Vec<Task>,
{
    let projects = state
        .projects
        .iter()
        .map(|project| {
            if project.id == project_id {
                Project {
                    tasks: rebuild_tasks(project),
                    ..project.clone()
                }
            } else {
                project.clone()
            }
        })
        .collect();
    AppState::new(projects)
}

fn move_task(state: &AppState, task_id: &str, from_id: &str, to_id: &str) -> AppState {
    let Some(task) = state
        .project(from_id)
        .and_then(|project| project.task(task_id))
        .cloned()
    else {
        return state.clone();
    };

    let projects = state
        .projects
        .iter()
        .map(|project| {
            // Same-project moves remove then re-append, so the task ends up last.
            let mut tasks = if project.id == from_id {
                without_task(project, task_id)
            } else {
                project.tasks.clone()
            };
            if project.id == to_id {
                tasks.push(task.clone());
            }
            Project {
                tasks,
                ..project.clone()
            }
        })
        .collect();
    AppState::new(projects)
}

fn without_task(project: &Project, task_id: &str) -> Vec<Task> {
    project
        .tasks
        .iter()
        .filter(|task| task.id != task_id)
        .cloned()
        .collect()
}
