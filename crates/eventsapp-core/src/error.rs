//! Domain error types.

use std::fmt;

use thiserror::Error;

/// The kind of resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A category.
    Category,
    /// An event.
    Event,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => f.write_str("category"),
            Self::Event => f.write_str("event"),
        }
    }
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No resource matches the requested identifier or name.
    #[error("{entity} not found with {key}")]
    NotFound {
        /// The kind of resource that was looked up.
        entity: EntityKind,
        /// Human-readable lookup key, e.g. `id: 7` or `name: Music`.
        key: String,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// A `NotFound` error for a lookup by identifier.
    #[must_use]
    pub fn not_found_id(entity: EntityKind, id: i64) -> Self {
        Self::NotFound {
            entity,
            key: format!("id: {id}"),
        }
    }

    /// A `NotFound` error for a lookup by name.
    #[must_use]
    pub fn not_found_name(entity: EntityKind, name: &str) -> Self {
        Self::NotFound {
            entity,
            key: format!("name: {name}"),
        }
    }
}
