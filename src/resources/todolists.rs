//! Todolists resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Todolists resource client.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/todolists.md>.
pub struct TodolistsResource {
    client: Arc<ClientInner>,
}

impl TodolistsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all active todolists across all projects.
    pub async fn all_global(&self) -> Result<Value, ApiError> {
        self.client.get("/todolists.json", &[]).await
    }

    /// Get all completed todolists across all projects.
    pub async fn completed_global(&self) -> Result<Value, ApiError> {
        self.client.get("/todolists/completed.json", &[]).await
    }

    /// Get all trashed todolists across all projects.
    pub async fn trashed_global(&self) -> Result<Value, ApiError> {
        self.client.get("/todolists/trashed.json", &[]).await
    }

    /// Get all todolists with todos assigned to the current user.
    pub async fn assigned(&self) -> Result<Value, ApiError> {
        self.client.get("/todolists/assigned.json", &[]).await
    }

    /// Get all active todolists in a project.
    pub async fn all(&self, project_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/todolists.json"), &[])
            .await
    }

    /// Get all completed todolists in a project.
    pub async fn completed(&self, project_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/todolists/completed.json"),
                &[],
            )
            .await
    }

    /// Get all trashed todolists in a project.
    pub async fn trashed(&self, project_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/todolists/trashed.json"),
                &[],
            )
            .await
    }

    /// Get a specific todolist.
    ///
    /// Set `exclude_todos` to skip the embedded todo collection, which is
    /// recommended for lists with 1000+ items.
    pub async fn get(
        &self,
        project_id: u64,
        todolist_id: u64,
        exclude_todos: bool,
    ) -> Result<Value, ApiError> {
        let url = format!("/projects/{project_id}/todolists/{todolist_id}.json");
        let query: &[(&str, &str)] = if exclude_todos {
            &[("exclude_todos", "true")]
        } else {
            &[]
        };
        self.client.get(&url, query).await
    }

    /// Create a new todolist in a project.
    pub async fn create(&self, project_id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .post(&format!("/projects/{project_id}/todolists.json"), data)
            .await
    }

    /// Update a todolist.
    pub async fn update(
        &self,
        project_id: u64,
        todolist_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/todolists/{todolist_id}.json"),
                data,
            )
            .await
    }

    /// Delete a todolist.
    pub async fn delete(&self, project_id: u64, todolist_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/projects/{project_id}/todolists/{todolist_id}.json"
            ))
            .await
    }
}
