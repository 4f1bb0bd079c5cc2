//! Topics resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Topics resource client.
///
/// Topics are the navigation layer over messages, todos, documents and
/// other content within a project.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/topics.md>.
pub struct TopicsResource {
    client: Arc<ClientInner>,
}

impl TopicsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all topics in a project. Supported query parameters: `page`.
    pub async fn all_in_project(
        &self,
        project_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/topics.json"), query)
            .await
    }
}
