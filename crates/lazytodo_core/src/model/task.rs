//! Task record.
//!
//! # Invariants
//! - `text` is trimmed and non-empty for every record that reaches storage.
//! - `id` doubles as the creation timestamp and is never reassigned.
//! - `created_at` is persisted and indexed, never used for ordering.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Primary key of a task: epoch milliseconds at creation.
///
/// Two tasks created within the same millisecond share an id. Operations
/// keyed by id then affect both.
pub type TaskId = i64;

/// One entry of the task list.
///
/// Serialized with the external field names `id`, `text`, `completed` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyText,
    UntrimmedText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::UntrimmedText => {
                write!(f, "task text must not start or end with whitespace")
            }
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Builds a new, not yet completed task from raw user input.
    ///
    /// Returns `None` when the input is empty after trimming. `now_ms` is
    /// used for both `id` and `created_at`.
    pub fn from_input(raw_text: &str, now_ms: i64) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id: now_ms,
            text: text.to_owned(),
            completed: false,
            created_at: now_ms,
        })
    }

    /// Checks the record invariants enforced on every write and read-back.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if self.text.trim().len() != self.text.len() {
            return Err(TaskValidationError::UntrimmedText);
        }
        Ok(())
    }

    /// Flips completion state.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};

    #[test]
    fn from_input_trims_and_defaults_to_active() {
        let task = Task::from_input("  Buy milk \n", 1_700_000_000_000).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.id, 1_700_000_000_000);
        assert_eq!(task.created_at, task.id);
    }

    #[test]
    fn from_input_rejects_blank_text() {
        assert!(Task::from_input("", 1).is_none());
        assert!(Task::from_input(" \t\r\n ", 1).is_none());
    }

    #[test]
    fn validate_catches_hand_built_records() {
        let mut task = Task::from_input("ok", 1).unwrap();
        task.text = "   ".to_string();
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyText));

        task.text = " padded".to_string();
        assert_eq!(task.validate(), Err(TaskValidationError::UntrimmedText));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut task = Task::from_input("walk the dog", 5).unwrap();
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn serializes_with_external_field_names() {
        let task = Task {
            id: 42,
            text: "Buy milk".to_string(),
            completed: true,
            created_at: 42,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "text": "Buy milk",
                "completed": true,
                "createdAt": 42
            })
        );
    }
}
