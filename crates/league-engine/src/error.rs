//! Engine error types

use league_core::CoreError;
use league_repository::{EntityKind, RepositoryError};
use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed input, a counter overflow or an aggregate over no teams
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("league already exists - name and season combination must be unique")]
    DuplicateLeague,

    #[error("team already exists - name and season combination must be unique")]
    DuplicateTeam,

    #[error("match already exists - home team, away team and date combination must be unique")]
    DuplicateMatch,

    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    /// Storage failure
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl EngineError {
    pub fn not_found(entity: EntityKind, key: impl std::fmt::Display) -> Self {
        EngineError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<RepositoryError> for EngineError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey { entity, .. } => match entity {
                EntityKind::League => EngineError::DuplicateLeague,
                EntityKind::Team => EngineError::DuplicateTeam,
                EntityKind::Match => EngineError::DuplicateMatch,
            },
            RepositoryError::NotFound { entity, key } => EngineError::NotFound { entity, key },
            RepositoryError::Core(err) => EngineError::Core(err),
            other => EngineError::Repository(other),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
