//! Task Model
//!
//! Data structure matching the backend todo entity.

use serde::{Deserialize, Serialize};

/// Todo task (matches backend). `id` is `None` until the backend has
/// assigned one; a create request body omits the key entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Empty unsaved draft: no id, blank fields, not completed
    pub fn draft() -> Self {
        Self::default()
    }

    /// Replace exactly one field, leaving every other field untouched
    pub fn apply(&mut self, field: TaskField) {
        match field {
            TaskField::Title(title) => self.title = title,
            TaskField::Description(description) => self.description = description,
            TaskField::Completed(completed) => self.completed = completed,
        }
    }
}

/// Single-field edit coming out of the modal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskField {
    Title(String),
    Description(String),
    Completed(bool),
}
