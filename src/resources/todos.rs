//! Todos resource client.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::ClientInner;
use crate::error::ApiError;

/// Todos resource client.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/todos.md>.
pub struct TodosResource {
    client: Arc<ClientInner>,
}

impl TodosResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all todos for a todolist.
    pub async fn all(&self, project_id: u64, todolist_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/todolists/{todolist_id}/todos.json"),
                &[],
            )
            .await
    }

    /// Get a specific todo.
    pub async fn get(&self, project_id: u64, todo_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/todos/{todo_id}.json"), &[])
            .await
    }

    /// Create a new todo in a todolist.
    pub async fn create(
        &self,
        project_id: u64,
        todolist_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                &format!("/projects/{project_id}/todolists/{todolist_id}/todos.json"),
                data,
            )
            .await
    }

    /// Update a todo.
    pub async fn update(
        &self,
        project_id: u64,
        todo_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(&format!("/projects/{project_id}/todos/{todo_id}.json"), data)
            .await
    }

    /// Delete a todo.
    pub async fn delete(&self, project_id: u64, todo_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/projects/{project_id}/todos/{todo_id}.json"))
            .await
    }

    /// Mark a todo as complete.
    pub async fn complete(&self, project_id: u64, todo_id: u64) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/todos/{todo_id}.json"),
                &json!({ "completed": true }),
            )
            .await
    }

    /// Mark a todo as incomplete.
    pub async fn uncomplete(&self, project_id: u64, todo_id: u64) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/todos/{todo_id}.json"),
                &json!({ "completed": false }),
            )
            .await
    }
}
