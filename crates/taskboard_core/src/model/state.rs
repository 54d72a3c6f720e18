//! Root board snapshot and the default seed.
//!
//! # Invariants
//! - `AppState` is replaced as a whole on every transition; callers never
//!   mutate a published snapshot in place.
//! - The persisted JSON shape is `{ "projects": [...] }` with no version field.

use crate::model::project::Project;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Whole-board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub projects: Vec<Project>,
}

impl AppState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Returns the three-column seed used for first launch and corrupt data.
    pub fn default_seed() -> Self {
        Self::new(vec![
            Project::new(
                "p1",
                "Frontend",
                vec![
                    Task::new("t1", "Setup React project", "Initialize project structure"),
                    Task::new("t2", "Create components", "Build reusable components"),
                ],
            ),
            Project::new(
                "p2",
                "Backend",
                vec![Task::new("t3", "Design API", "Plan API endpoints")],
            ),
            Project::new("p3", "Testing", Vec::new()),
        ])
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
    }

    /// Sum of task counts over all projects.
    pub fn total_tasks(&self) -> usize {
        self.projects.iter().map(Project::task_count).sum()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::default_seed()
    }
}
