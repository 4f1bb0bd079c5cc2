//! Uploads (attachments) resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Uploads (attachments) resource client.
///
/// The API calls these "attachments"; this wrapper says "uploads" to
/// distinguish them from the attachment tokens used when creating content.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/attachments.md>.
pub struct UploadsResource {
    client: Arc<ClientInner>,
}

impl UploadsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all attachments in a project. Supported query parameters: `page`,
    /// `sort` (az, za, biggest, smallest, newest, oldest).
    pub async fn all(&self, project_id: u64, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/attachments.json"), query)
            .await
    }

    /// Get all attachments across all projects.
    pub async fn all_global(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get("/attachments.json", query).await
    }

    /// Get a specific attachment.
    pub async fn get(&self, project_id: u64, attachment_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/attachments/{attachment_id}.json"),
                &[],
            )
            .await
    }

    /// Upload a file and get back an attachment token.
    ///
    /// The returned token can be used when creating messages, todos,
    /// comments and other content. The file content is sent verbatim, with
    /// `Content-Type` and `Content-Length` replacing the JSON defaults.
    pub async fn create(&self, content: Vec<u8>, content_type: &str) -> Result<Value, ApiError> {
        let content_length = content.len().to_string();
        let headers = [
            ("Content-Type", content_type),
            ("Content-Length", content_length.as_str()),
        ];
        self.client
            .post_raw("/attachments.json", content, &headers)
            .await
    }

    /// Rename an attachment. Linked files (e.g. Google Docs) cannot be
    /// renamed.
    pub async fn update(
        &self,
        project_id: u64,
        attachment_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/attachments/{attachment_id}.json"),
                data,
            )
            .await
    }

    /// Delete an attachment.
    pub async fn delete(&self, project_id: u64, attachment_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/projects/{project_id}/attachments/{attachment_id}.json"
            ))
            .await
    }
}
