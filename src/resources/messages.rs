//! Messages resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Messages resource client.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/messages.md>.
pub struct MessagesResource {
    client: Arc<ClientInner>,
}

impl MessagesResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get a specific message.
    pub async fn get(&self, project_id: u64, message_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/messages/{message_id}.json"),
                &[],
            )
            .await
    }

    /// Create a new message in a project.
    pub async fn create(&self, project_id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .post(&format!("/projects/{project_id}/messages.json"), data)
            .await
    }

    /// Update a message.
    pub async fn update(
        &self,
        project_id: u64,
        message_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/messages/{message_id}.json"),
                data,
            )
            .await
    }

    /// Delete a message.
    pub async fn delete(&self, project_id: u64, message_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/projects/{project_id}/messages/{message_id}.json"
            ))
            .await
    }
}
