//! Application layer for events.

mod chat;
mod command_handlers;
mod query_handlers;
mod service;

pub use chat::CHAT_STATUS;
pub use service::EventService;
