//! Error types for the repository layer

use league_core::CoreError;
use std::fmt;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Kind of stored entity, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    League,
    Team,
    Match,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::League => f.write_str("league"),
            EntityKind::Team => f.write_str("team"),
            EntityKind::Match => f.write_str("match"),
        }
    }
}

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Uniqueness constraint on a natural key violated
    #[error("Duplicate {entity} key: {key}")]
    DuplicateKey { entity: EntityKind, key: String },

    /// No record for the given id or key
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    /// Database error (when database feature is enabled)
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Update refused by the entity itself, e.g. a counter overflow
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Stored data could not be mapped back to an entity
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}

impl RepositoryError {
    pub fn duplicate(entity: EntityKind, key: impl fmt::Display) -> Self {
        RepositoryError::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    }

    pub fn not_found(entity: EntityKind, key: impl fmt::Display) -> Self {
        RepositoryError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
