//! Comments resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Comments resource client.
///
/// Comments attach to a commentable section (`messages`, `todos`, ...)
/// rather than living under a collection of their own, so creation takes
/// the section name as part of the path.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/comments.md>.
pub struct CommentsResource {
    client: Arc<ClientInner>,
}

impl CommentsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Create a comment on a resource, e.g. section `"messages"` with the
    /// message id.
    pub async fn create(
        &self,
        project_id: u64,
        section: &str,
        resource_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                &format!("/projects/{project_id}/{section}/{resource_id}/comments.json"),
                data,
            )
            .await
    }

    /// Delete a comment.
    pub async fn delete(&self, project_id: u64, comment_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/projects/{project_id}/comments/{comment_id}.json"
            ))
            .await
    }
}
