//! Groups resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Groups resource client.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/groups.md>.
pub struct GroupsResource {
    client: Arc<ClientInner>,
}

impl GroupsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all groups on the account.
    pub async fn all(&self) -> Result<Value, ApiError> {
        self.client.get("/groups.json", &[]).await
    }

    /// Get a specific group.
    pub async fn get(&self, group_id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/groups/{group_id}.json"), &[]).await
    }
}
