//! Resource endpoint families of the BCX API.
//!
//! Each family is a stateless wrapper around the shared request engine:
//! a method is a path template plus a verb, with responses passed through
//! as untyped JSON. Instances are obtained from the accessors on
//! [`BcxClient`](crate::BcxClient) and live as long as the client.

#![allow(clippy::missing_errors_doc)]

mod calendar_events;
mod comments;
mod documents;
mod events;
mod groups;
mod messages;
mod people;
mod projects;
mod todolists;
mod todos;
mod topics;
mod uploads;

pub use calendar_events::CalendarEventsResource;
pub use comments::CommentsResource;
pub use documents::DocumentsResource;
pub use events::EventsResource;
pub use groups::GroupsResource;
pub use messages::MessagesResource;
pub use people::PeopleResource;
pub use projects::ProjectsResource;
pub use todolists::TodolistsResource;
pub use todos::TodosResource;
pub use topics::TopicsResource;
pub use uploads::UploadsResource;
