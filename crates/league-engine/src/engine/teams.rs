//! Team operations

use league_core::{Team, TeamId, TeamKey};
use league_repository::{EntityKind, TeamRepository};
use tracing::info;

use super::LeagueEngine;
use crate::error::{EngineError, Result};

impl LeagueEngine {
    /// Create a team with zero counters
    pub async fn create_team(&self, name: &str, season: i32) -> Result<TeamId> {
        let team = Team::new(name, season);
        self.store.insert_team(&team).await?;
        info!("Created team {} as {}", team.key(), team.id);
        Ok(team.id)
    }

    pub async fn get_team_by_id(&self, id: TeamId) -> Result<Team> {
        self.store
            .find_team_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::Team, id))
    }

    pub async fn get_team(&self, name: &str, season: i32) -> Result<Team> {
        let key = TeamKey::new(name, season);
        self.store
            .find_team(&key)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::Team, &key))
    }
}
