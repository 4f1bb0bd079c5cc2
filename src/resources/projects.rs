//! Projects resource client.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::ClientInner;
use crate::error::ApiError;

/// Projects resource client.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/projects.md>.
pub struct ProjectsResource {
    client: Arc<ClientInner>,
}

impl ProjectsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all active projects.
    pub async fn all(&self) -> Result<Value, ApiError> {
        self.client.get("/projects.json", &[]).await
    }

    /// Get all archived projects.
    pub async fn archived(&self) -> Result<Value, ApiError> {
        self.client.get("/projects/archived.json", &[]).await
    }

    /// Get a specific project.
    pub async fn get(&self, project_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}.json"), &[])
            .await
    }

    /// Create a new project.
    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/projects.json", data).await
    }

    /// Update a project.
    pub async fn update(&self, project_id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .put(&format!("/projects/{project_id}.json"), data)
            .await
    }

    /// Delete a project (archives it).
    pub async fn delete(&self, project_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/projects/{project_id}.json"))
            .await
    }

    /// Activate an archived project.
    pub async fn activate(&self, project_id: u64) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}.json"),
                &json!({ "archived": false }),
            )
            .await
    }
}
