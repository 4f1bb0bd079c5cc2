//! Calendar events resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// Calendar events resource client.
///
/// Calendar events live on standalone calendars as well as on project
/// calendars; mutations address the standalone calendar endpoints.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/calendar_events.md>.
pub struct CalendarEventsResource {
    client: Arc<ClientInner>,
}

impl CalendarEventsResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all upcoming calendar events across the account.
    pub async fn all(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get("/calendar_events.json", query).await
    }

    /// Get all upcoming calendar events on a calendar.
    pub async fn all_in_calendar(
        &self,
        calendar_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/calendars/{calendar_id}/calendar_events.json"),
                query,
            )
            .await
    }

    /// Get all upcoming calendar events in a project.
    pub async fn all_in_project(
        &self,
        project_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/projects/{project_id}/calendar_events.json"),
                query,
            )
            .await
    }

    /// Get past calendar events on a calendar.
    pub async fn past(&self, calendar_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/calendars/{calendar_id}/calendar_events/past.json"),
                &[],
            )
            .await
    }

    /// Get a specific calendar event.
    pub async fn get(&self, calendar_id: u64, event_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/calendars/{calendar_id}/calendar_events/{event_id}.json"),
                &[],
            )
            .await
    }

    /// Create a new calendar event.
    pub async fn create(&self, calendar_id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .post(
                &format!("/calendars/{calendar_id}/calendar_events.json"),
                data,
            )
            .await
    }

    /// Update a calendar event.
    pub async fn update(
        &self,
        calendar_id: u64,
        event_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/calendars/{calendar_id}/calendar_events/{event_id}.json"),
                data,
            )
            .await
    }

    /// Delete a calendar event.
    pub async fn delete(&self, calendar_id: u64, event_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/calendars/{calendar_id}/calendar_events/{event_id}.json"
            ))
            .await
    }
}
