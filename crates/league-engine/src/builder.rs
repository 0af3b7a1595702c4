//! Builder pattern for LeagueEngine

use crate::engine::LeagueEngine;
use crate::error::Result;
use league_repository::{open_repository, RepositoryConfig, Store};
use std::sync::Arc;
use tracing::info;

/// Builder for LeagueEngine
///
/// # Example
///
/// ```rust,ignore
/// use league_engine::{LeagueEngineBuilder, RepositoryConfig};
///
/// // In-memory (default)
/// let engine = LeagueEngineBuilder::new().build().await?;
///
/// // From database
/// let engine = LeagueEngineBuilder::new()
///     .with_repository(RepositoryConfig::database("postgresql://localhost/league"))
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct LeagueEngineBuilder {
    repository_config: Option<RepositoryConfig>,
    store: Option<Arc<dyn Store>>,
}

impl LeagueEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the repository described by `config` when building
    pub fn with_repository(mut self, config: RepositoryConfig) -> Self {
        self.repository_config = Some(config);
        self
    }

    /// Use an already opened repository; takes precedence over
    /// [`with_repository`](Self::with_repository)
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the engine
    pub async fn build(self) -> Result<LeagueEngine> {
        let store = match (self.store, self.repository_config) {
            (Some(store), _) => store,
            (None, Some(config)) => open_repository(&config).await?,
            (None, None) => open_repository(&RepositoryConfig::memory()).await?,
        };

        info!("League engine ready");
        Ok(LeagueEngine::new(store))
    }
}
