//! Events App Core — shared data model and persistence ports.
//!
//! This crate defines the resources, the error taxonomy and the repository
//! traits that the services and the store depend on. It contains no
//! infrastructure code.

pub mod error;
pub mod model;
pub mod repository;
