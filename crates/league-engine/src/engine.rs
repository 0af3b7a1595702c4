//! LeagueEngine - Main API for leagues, teams and match results

mod leagues;
mod matches;
mod teams;

use league_repository::Store;
use std::sync::Arc;

/// Entry point for every league operation
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct LeagueEngine {
    store: Arc<dyn Store>,
}

impl LeagueEngine {
    /// Create an engine over an already opened repository
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// The underlying repository
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }
}

impl std::fmt::Debug for LeagueEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeagueEngine").finish_non_exhaustive()
    }
}
