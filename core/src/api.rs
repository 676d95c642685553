//! The four user-facing operations, composed from `TodoClient` build/parse
//! pairs and a `Transport`.
//!
//! Complete and delete fetch the whole list, resolve the 1-based position in
//! the returned order, then write by id. The list can change between the
//! fetch and the write; the position is only as good as that fetch.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{at_position, NewTodo, Todo};

/// Source of "now" for created and completed timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Runs todo operations against a remote service, one request at a time.
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
    clock: Clock,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Create a pending item with the given task text.
    pub fn add(&self, task: &str) -> Result<(), ApiError> {
        let input = NewTodo::new(task, (self.clock)());
        let req = self.client.build_create_todo(&input)?;
        debug!(task, "creating todo");
        let resp = self.transport.execute(req)?;
        self.client.parse_create_todo(resp)
    }

    /// Fetch the full list in server order.
    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let resp = self.transport.execute(self.client.build_list_todos())?;
        let todos = self.client.parse_list_todos(resp)?;
        debug!(count = todos.len(), "fetched todos");
        Ok(todos)
    }

    /// Mark the item at `position` done.
    ///
    /// Returns the updated item, or `None` without touching the server when
    /// no item sits at that position.
    pub fn complete(&self, position: i64) -> Result<Option<Todo>, ApiError> {
        let todos = self.list()?;
        let Some(target) = at_position(&todos, position) else {
            debug!(position, len = todos.len(), "position out of range, nothing to complete");
            return Ok(None);
        };
        let updated = target.completed((self.clock)());
        debug!(position, id = %updated.id, "completing todo");
        let req = self.client.build_update_todo(&updated.id, &updated)?;
        let resp = self.transport.execute(req)?;
        self.client.parse_update_todo(resp)?;
        Ok(Some(updated))
    }

    /// Remove the item at `position`.
    ///
    /// Returns the removed item, or `None` when no item sits at that
    /// position.
    pub fn delete(&self, position: i64) -> Result<Option<Todo>, ApiError> {
        let todos = self.list()?;
        let Some(target) = at_position(&todos, position) else {
            debug!(position, len = todos.len(), "position out of range, nothing to delete");
            return Ok(None);
        };
        debug!(position, id = %target.id, "deleting todo");
        let resp = self.transport.execute(self.client.build_delete_todo(&target.id))?;
        self.client.parse_delete_todo(resp)?;
        Ok(Some(target.clone()))
    }
}
