//! Events App — Category service.
//!
//! Lookup, create, update and delete over the category store, with
//! existence checks before update and delete.

pub mod application;

pub use application::CategoryService;
