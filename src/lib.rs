//! Rust client for the Basecamp Classic (BCX) API.
//!
//! # Features
//!
//! - All twelve BCX resource families behind one client
//! - Pluggable authentication: HTTP Basic or OAuth 2.0 bearer tokens with
//!   optional expiry
//! - OAuth 2.0 web-server flow against the 37signals Launchpad
//! - Typed error taxonomy separating authentication, HTTP and transport
//!   failures
//!
//! # Quick Start
//!
//! ```no_run
//! use bcx_client::{Authentication, BcxClient};
//!
//! # async fn run() -> Result<(), bcx_client::ApiError> {
//! let auth = Authentication::basic("user@example.com", "password");
//! let client = BcxClient::new("999999999", auth)?;
//!
//! let projects = client.projects().all().await?;
//! let me = client.people().me().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! caller ──▶ resource wrapper ──▶ BcxClient verb ──▶ request engine
//!                                                      │
//!                         auth check ─ URL ─ headers ─ HTTP ─ classify
//! ```
//!
//! Responses are untyped `serde_json::Value`s; this crate models the
//! request contract, not the domain entities. Retry policy and token
//! persistence are the caller's responsibility.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod oauth;
pub mod resources;

pub use auth::Authentication;
pub use client::{BcxClient, ClientConfig};
pub use error::{ApiError, ConfigError};
pub use oauth::{OAuthFlow, TokenResponse};
