//! League operations and league-wide aggregates

use league_core::{
    extremal_team, Direction, League, LeagueId, LeagueKey, MatchId, Metric, Team, TeamId,
};
use league_repository::{EntityKind, LeagueRepository};
use tracing::{debug, info};

use super::LeagueEngine;
use crate::error::{EngineError, Result};

impl LeagueEngine {
    /// Create a league, optionally linking existing teams
    ///
    /// Every id in `teams` must refer to a stored team. Repeated ids are
    /// linked once.
    pub async fn create_league(
        &self,
        name: &str,
        season: i32,
        teams: &[TeamId],
    ) -> Result<LeagueId> {
        for id in teams {
            self.get_team_by_id(*id).await?;
        }

        let league = League::new(name, season).with_teams(teams.iter().copied());
        self.store.insert_league(&league).await?;
        info!(
            "Created league {} as {} with {} teams",
            league.key(),
            league.id,
            league.teams.len()
        );
        Ok(league.id)
    }

    pub async fn get_league_by_id(&self, id: LeagueId) -> Result<League> {
        self.store
            .find_league_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::League, id))
    }

    pub async fn get_league(&self, name: &str, season: i32) -> Result<League> {
        let key = LeagueKey::new(name, season);
        self.store
            .find_league(&key)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::League, &key))
    }

    /// Link a stored team to a league; linking twice is a no-op
    pub async fn add_team_to_league(&self, league: LeagueId, team: TeamId) -> Result<League> {
        self.get_team_by_id(team).await?;
        let updated = self.store.add_team_to_league(league, team).await?;
        info!("Linked team {} to league {}", team, league);
        Ok(updated)
    }

    /// Link a stored match to a league; linking twice is a no-op
    pub async fn add_match_to_league(&self, league: LeagueId, id: MatchId) -> Result<League> {
        self.get_match_by_id(id).await?;
        let updated = self.store.add_match_to_league(league, id).await?;
        info!("Linked match {} to league {}", id, league);
        Ok(updated)
    }

    /// Team records of a league, in the order they were linked
    pub async fn league_teams(&self, league: LeagueId) -> Result<Vec<Team>> {
        let league = self.get_league_by_id(league).await?;

        let mut teams = Vec::with_capacity(league.teams.len());
        for id in &league.teams {
            teams.push(self.get_team_by_id(*id).await?);
        }
        debug!("Loaded {} teams for league {}", teams.len(), league.key());
        Ok(teams)
    }

    /// Team of a league with the highest or lowest `metric`
    ///
    /// Ties go to the team linked first.
    pub async fn league_extremal_team(
        &self,
        league: LeagueId,
        metric: Metric,
        direction: Direction,
    ) -> Result<Team> {
        let teams = self.league_teams(league).await?;
        let team = extremal_team(&teams, metric, direction)?;
        debug!("{} {} in league {}: {}", direction, metric, league, team.key());
        Ok(team.clone())
    }
}
