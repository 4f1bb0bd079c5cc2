//! Documents resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Documents resource client.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/documents.md>.
pub struct DocumentsResource {
    client: Arc<ClientInner>,
}

impl DocumentsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all documents in a project. Supported query parameters: `page`,
    /// `sort`.
    pub async fn all(&self, project_id: u64, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/documents.json"), query)
            .await
    }

    /// Get all documents across all projects.
    pub async fn all_global(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get("/documents.json", query).await
    }

    /// Get a specific document.
    pub async fn get(&self, project_id: u64, document_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/documents/{document_id}.json"),
                &[],
            )
            .await
    }

    /// Create a new document in a project.
    pub async fn create(&self, project_id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .post(&format!("/projects/{project_id}/documents.json"), data)
            .await
    }

    /// Update a document.
    pub async fn update(
        &self,
        project_id: u64,
        document_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/documents/{document_id}.json"),
                data,
            )
            .await
    }

    /// Delete a document.
    pub async fn delete(&self, project_id: u64, document_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/projects/{project_id}/documents/{document_id}.json"
            ))
            .await
    }
}
