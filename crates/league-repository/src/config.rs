//! Repository configuration types
//!
//! Selects the storage backend and opens it as a shared [`Store`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::memory::InMemoryRepository;
use crate::traits::Store;
use crate::{RepositoryError, RepositoryResult};

/// Repository source type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    /// Process memory, lost on restart
    #[default]
    Memory,
    /// PostgreSQL database
    Database,
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use league_repository::RepositoryConfig;
///
/// let config = RepositoryConfig::memory();
/// assert!(config.validate().is_ok());
///
/// let config = RepositoryConfig::database("postgresql://localhost/league");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub source: RepositorySource,

    /// Database connection URL (required for Database source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

impl RepositoryConfig {
    pub fn memory() -> Self {
        Self {
            source: RepositorySource::Memory,
            database_url: None,
        }
    }

    pub fn database(url: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::Database,
            database_url: Some(url.into()),
        }
    }

    /// Check that the fields required by the source are present
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.source {
            RepositorySource::Memory => Ok(()),
            RepositorySource::Database => match self.database_url.as_deref() {
                Some(url) if !url.trim().is_empty() => Ok(()),
                _ => Err(ConfigError::MissingField {
                    source: "Database",
                    field: "database_url",
                }),
            },
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingField {
        source: &'static str,
        field: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingField { source, field } => {
                write!(f, "{} source requires {} to be set", source, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Open the configured backend
///
/// The database source needs the `postgres` feature; without it the call
/// fails with `RepositoryError::Other`.
pub async fn open_repository(config: &RepositoryConfig) -> RepositoryResult<Arc<dyn Store>> {
    config
        .validate()
        .map_err(|e| RepositoryError::Other(e.to_string()))?;

    match config.source {
        RepositorySource::Memory => {
            info!("Using in-memory repository");
            Ok(Arc::new(InMemoryRepository::new()))
        }
        RepositorySource::Database => {
            let url = config.database_url.as_deref().unwrap_or_default();
            open_database(url).await
        }
    }
}

#[cfg(feature = "postgres")]
async fn open_database(url: &str) -> RepositoryResult<Arc<dyn Store>> {
    let repo = crate::postgres::PostgresRepository::new(url).await?;
    repo.migrate().await?;
    info!("Using PostgreSQL repository");
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "postgres"))]
async fn open_database(_url: &str) -> RepositoryResult<Arc<dyn Store>> {
    Err(RepositoryError::Other(
        "Database source requires the 'postgres' feature".to_string(),
    ))
}
