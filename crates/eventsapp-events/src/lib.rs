//! Events App — Event service.
//!
//! Lookup, create, update and delete over the event store. Event payloads
//! may reference an existing category or carry a new one that is persisted
//! together with the event.

pub mod application;

pub use application::{CHAT_STATUS, EventService};
