//! Application layer for categories.

mod command_handlers;
mod query_handlers;
mod service;

pub use service::CategoryService;
