//! Project (column) model.

use crate::model::null_as_default;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Opaque project identifier from the fixed seed (`p1`, `p2`, ...).
pub type ProjectId = String;

/// Named column owning an ordered task sequence.
///
/// Task order is insertion order; moved tasks land at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks,
        }
    }

    /// Looks up one task of this project by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Number of cards shown in the column header.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.task(task_id).is_some()
    }
}
