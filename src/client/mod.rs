//! BCX API client.
//!
//! This module provides:
//! - [`BcxClient`], the entry point for all API access
//! - Verb-level request methods used by every resource wrapper
//! - Memoized accessors for the twelve resource families
//!
//! # Architecture
//!
//! The client uses `reqwest` for HTTP. Each verb call runs the same
//! pipeline: local authentication check, URL construction, header
//! assembly, dispatch, then status classification into [`ApiError`].
//! No retries are performed; a failed call is reported once to the caller.
//!
//! # Example
//!
//! ```no_run
//! use bcx_client::{Authentication, BcxClient};
//!
//! # async fn run() -> Result<(), bcx_client::ApiError> {
//! let auth = Authentication::bearer("access-token");
//! let client = BcxClient::new("999999999", auth)?;
//!
//! let projects = client.projects().all().await?;
//! println!("{projects:#?}");
//! # Ok(())
//! # }
//! ```

mod config;
mod inner;

pub use config::{
    ClientConfig, API_VERSION, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_TIMEOUT_MS,
    DEFAULT_USER_AGENT,
};
pub(crate) use inner::ClientInner;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde_json::Value;

use crate::auth::Authentication;
use crate::error::ApiError;
use crate::resources::{
    CalendarEventsResource, CommentsResource, DocumentsResource, EventsResource, GroupsResource,
    MessagesResource, PeopleResource, ProjectsResource, TodolistsResource, TodosResource,
    TopicsResource, UploadsResource,
};

/// Client for the Basecamp Classic (BCX) API.
///
/// Constructed once per logical session. The client holds no connection
/// state across requests; independent instances share nothing. Resource
/// accessors are created on first use and cached for the client's lifetime.
pub struct BcxClient {
    inner: Arc<ClientInner>,
    projects: OnceLock<ProjectsResource>,
    todolists: OnceLock<TodolistsResource>,
    todos: OnceLock<TodosResource>,
    people: OnceLock<PeopleResource>,
    messages: OnceLock<MessagesResource>,
    comments: OnceLock<CommentsResource>,
    documents: OnceLock<DocumentsResource>,
    uploads: OnceLock<UploadsResource>,
    events: OnceLock<EventsResource>,
    calendar_events: OnceLock<CalendarEventsResource>,
    topics: OnceLock<TopicsResource>,
    groups: OnceLock<GroupsResource>,
}

impl BcxClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP transport cannot be built.
    pub fn new(
        account_id: impl Into<String>,
        authentication: Authentication,
    ) -> Result<Self, ApiError> {
        Self::with_config(account_id, authentication, ClientConfig::default())
    }

    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP transport cannot be built.
    pub fn with_config(
        account_id: impl Into<String>,
        authentication: Authentication,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self::with_http_client(
            account_id,
            authentication,
            config,
            http,
        ))
    }

    /// Create a client around a caller-supplied `reqwest::Client`.
    ///
    /// The supplied transport is used as-is; the timeouts in `config` are
    /// not applied to it.
    #[must_use]
    pub fn with_http_client(
        account_id: impl Into<String>,
        authentication: Authentication,
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner::new(
                account_id.into(),
                authentication,
                http,
                config,
            )),
            projects: OnceLock::new(),
            todolists: OnceLock::new(),
            todos: OnceLock::new(),
            people: OnceLock::new(),
            messages: OnceLock::new(),
            comments: OnceLock::new(),
            documents: OnceLock::new(),
            uploads: OnceLock::new(),
            events: OnceLock::new(),
            calendar_events: OnceLock::new(),
            topics: OnceLock::new(),
            groups: OnceLock::new(),
        }
    }

    /// The account identifier this client addresses.
    #[must_use]
    pub fn account_id(&self) -> &str {
        self.inner.account_id()
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Replace the active authentication strategy.
    ///
    /// Strategies are immutable; a refreshed token becomes a new
    /// [`Authentication`] value swapped in here. Requests in flight keep
    /// the headers they were built with.
    pub fn set_authentication(&self, authentication: Authentication) {
        self.inner.set_authentication(authentication);
    }

    /// Make a GET request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or HTTP failure.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.inner.get(path, query).await
    }

    /// Make a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or HTTP failure.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.inner.post(path, body).await
    }

    /// Make a POST request with a raw byte body, e.g. a file upload.
    ///
    /// The supplied headers override the defaults, which raw uploads use to
    /// replace the `Content-Type` and set `Content-Length`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or HTTP failure.
    pub async fn post_raw(
        &self,
        path: &str,
        body: Vec<u8>,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.inner.post_raw(path, body, headers).await
    }

    /// Make a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or HTTP failure.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.inner.put(path, body).await
    }

    /// Make a DELETE request. No response body is parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on authentication, transport or HTTP failure.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.inner.delete(path).await
    }

    /// Projects resource client.
    pub fn projects(&self) -> &ProjectsResource {
        self.projects
            .get_or_init(|| ProjectsResource::new(Arc::clone(&self.inner)))
    }

    /// Todolists resource client.
    pub fn todolists(&self) -> &TodolistsResource {
        self.todolists
            .get_or_init(|| TodolistsResource::new(Arc::clone(&self.inner)))
    }

    /// Todos resource client.
    pub fn todos(&self) -> &TodosResource {
        self.todos
            .get_or_init(|| TodosResource::new(Arc::clone(&self.inner)))
    }

    /// People resource client.
    pub fn people(&self) -> &PeopleResource {
        self.people
            .get_or_init(|| PeopleResource::new(Arc::clone(&self.inner)))
    }

    /// Messages resource client.
    pub fn messages(&self) -> &MessagesResource {
        self.messages
            .get_or_init(|| MessagesResource::new(Arc::clone(&self.inner)))
    }

    /// Comments resource client.
    pub fn comments(&self) -> &CommentsResource {
        self.comments
            .get_or_init(|| CommentsResource::new(Arc::clone(&self.inner)))
    }

    /// Documents resource client.
    pub fn documents(&self) -> &DocumentsResource {
        self.documents
            .get_or_init(|| DocumentsResource::new(Arc::clone(&self.inner)))
    }

    /// Uploads (attachments) resource client.
    pub fn uploads(&self) -> &UploadsResource {
        self.uploads
            .get_or_init(|| UploadsResource::new(Arc::clone(&self.inner)))
    }

    /// Events resource client.
    pub fn events(&self) -> &EventsResource {
        self.events
            .get_or_init(|| EventsResource::new(Arc::clone(&self.inner)))
    }

    /// Calendar events resource client.
    pub fn calendar_events(&self) -> &CalendarEventsResource {
        self.calendar_events
            .get_or_init(|| CalendarEventsResource::new(Arc::clone(&self.inner)))
    }

    /// Topics resource client.
    pub fn topics(&self) -> &TopicsResource {
        self.topics
            .get_or_init(|| TopicsResource::new(Arc::clone(&self.inner)))
    }

    /// Groups resource client.
    pub fn groups(&self) -> &GroupsResource {
        self.groups
            .get_or_init(|| GroupsResource::new(Arc::clone(&self.inner)))
    }
}

impl std::fmt::Debug for BcxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BcxClient")
            .field("account_id", &self.account_id())
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}
