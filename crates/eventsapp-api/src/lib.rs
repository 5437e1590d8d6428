//! Events App API — HTTP surface over the category and event services.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
