//! People resource client.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::error::ApiError;

/// People resource client.
///
/// Also covers project accesses, which the API models as grants of people
/// onto projects.
///
/// See <https://github.com/basecamp/bcx-api/blob/master/sections/people.md>.
pub struct PeopleResource {
    client: Arc<ClientInner>,
}

impl PeopleResource {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Get all people on the account.
    pub async fn all(&self) -> Result<Value, ApiError> {
        self.client.get("/people.json", &[]).await
    }

    /// Get all trashed people.
    pub async fn trashed(&self) -> Result<Value, ApiError> {
        self.client.get("/people/trashed.json", &[]).await
    }

    /// Get all people with access to a project.
    pub async fn in_project(&self, project_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/projects/{project_id}/accesses.json"), &[])
            .await
    }

    /// Get a specific person.
    pub async fn get(&self, person_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/people/{person_id}.json"), &[])
            .await
    }

    /// Get the person behind the current credentials.
    pub async fn me(&self) -> Result<Value, ApiError> {
        self.client.get("/people/me.json", &[]).await
    }

    /// Get todos assigned to a person, optionally only those due since the
    /// given ISO-8601 timestamp.
    pub async fn assigned_todos(
        &self,
        person_id: u64,
        due_since: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = format!("/people/{person_id}/assigned_todos.json");
        match due_since {
            Some(due_since) => self.client.get(&url, &[("due_since", due_since)]).await,
            None => self.client.get(&url, &[]).await,
        }
    }

    /// Get events created by a person.
    pub async fn events(&self, person_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/people/{person_id}/events.json"), &[])
            .await
    }

    /// Get projects a person has access to.
    pub async fn projects(&self, person_id: u64) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/people/{person_id}/projects.json"), &[])
            .await
    }

    /// Grant people access to a project.
    pub async fn grant_access(&self, project_id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .post(&format!("/projects/{project_id}/accesses.json"), data)
            .await
    }

    /// Revoke a person's access to a project.
    pub async fn revoke_access(&self, project_id: u64, person_id: u64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/projects/{project_id}/accesses/{person_id}.json"))
            .await
    }

    /// Update a person's access to a project.
    pub async fn update_access(
        &self,
        project_id: u64,
        person_id: u64,
        data: &Value,
    ) -> Result<Value, ApiError> {
        self.client
            .put(
                &format!("/projects/{project_id}/accesses/{person_id}.json"),
                data,
            )
            .await
    }
}
