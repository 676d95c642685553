//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Positions are 1-based indexes into a single fetched list. They are not
//! stable: two fetches may put different items at the same position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    /// Set once `done` flips to true. Omitted from the wire while unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Copy of this item marked done at `now`.
    ///
    /// An item that is already done keeps its original completion time.
    pub fn completed(&self, now: DateTime<Utc>) -> Todo {
        Todo {
            id: self.id.clone(),
            task: self.task.clone(),
            done: true,
            created_at: self.created_at,
            completed_at: self.completed_at.or(Some(now)),
        }
    }
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub task: String,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    pub fn new(task: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            task: task.into(),
            done: false,
            created_at,
        }
    }
}

/// Envelope of the list endpoint: `{"data": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    #[serde(default)]
    pub data: Vec<Todo>,
}

/// Number of items whose `done` flag is false.
pub fn pending_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.done).count()
}

/// Item at the 1-based `position`, or `None` when out of range.
pub fn at_position(todos: &[Todo], position: i64) -> Option<&Todo> {
    if position <= 0 {
        return None;
    }
    let index = usize::try_from(position - 1).ok()?;
    todos.get(index)
}
