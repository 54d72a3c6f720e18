//! Task (card) model and title validation.

use crate::model::null_as_default;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque task identifier, e.g. `t3` or `t1718000000000-k3j9x0a1b`.
pub type TaskId = String;

/// One unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Non-empty after trimming for tasks built by the manager.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free text, may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// User-facing validation failure for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Trims a raw title and rejects blank input.
pub fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_title, Task, ValidationError};

    #[test]
    fn normalize_title_trims_surrounding_whitespace() {
        assert_eq!(normalize_title("  Ship it \n").unwrap(), "Ship it");
    }

    #[test]
    fn normalize_title_rejects_blank_input() {
        assert_eq!(normalize_title("").unwrap_err(), ValidationError::EmptyTitle);
        assert_eq!(
            normalize_title(" \t\r\n").unwrap_err(),
            ValidationError::EmptyTitle
        );
    }

    #[test]
    fn missing_description_deserializes_as_empty() {
        let task: Task = serde_json::from_str(r#"{"id":"t9","title":"x"}"#).unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn null_text_fields_deserialize_as_empty() {
        let task: Task =
            serde_json::from_str(r#"{"id":"u1","title":null,"description":null}"#).unwrap();
        assert_eq!(task, Task::new("u1", "", ""));
    }

    #[test]
    fn validation_error_message_is_stable() {
        assert_eq!(
            ValidationError::EmptyTitle.to_string(),
            "task title cannot be empty"
        );
    }
}
