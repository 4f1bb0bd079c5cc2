//! Events resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Events resource client.
///
/// Events are the account activity feed. All listings accept `since`
/// (ISO-8601) and `page` query parameters.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/events.md>.
pub struct EventsResource {
    client: Arc<ClientInner>,
}

impl EventsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all events across the account.
    pub async fn all(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get("/events.json", query).await
    }

    /// Get all events in a project.
    pub async fn all_in_project(
        &self,
        project_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/events.json"), query)
            .await
    }

    /// Get all events created by a person.
    pub async fn all_by_person(
        &self,
        person_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/people/{person_id}/events.json"), query)
            .await
    }
}
