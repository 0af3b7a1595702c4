//! In-memory repository implementation
//!
//! Keeps every entity in a single map guarded by one `RwLock`, with a
//! secondary index per natural key. Used for development, tests and the
//! default server configuration; nothing survives a restart.

use async_trait::async_trait;
use league_core::statistics::TeamResultUpdate;
use league_core::{League, LeagueId, LeagueKey, Match, MatchId, MatchKey, Team, TeamId, TeamKey};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{EntityKind, RepositoryError};
use crate::traits::{LeagueRepository, MatchRepository, TeamRepository};
use crate::RepositoryResult;

#[derive(Default)]
struct Tables {
    leagues: HashMap<LeagueId, League>,
    league_keys: HashMap<LeagueKey, LeagueId>,
    teams: HashMap<TeamId, Team>,
    team_keys: HashMap<TeamKey, TeamId>,
    matches: HashMap<MatchId, Match>,
    match_keys: HashMap<MatchKey, MatchId>,
}

impl Tables {
    fn league_mut(&mut self, id: LeagueId) -> RepositoryResult<&mut League> {
        self.leagues
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::League, id))
    }

    fn team_id_or_create(&mut self, key: &TeamKey) -> TeamId {
        if let Some(id) = self.team_keys.get(key) {
            return *id;
        }

        let team = Team::from_key(key);
        let id = team.id;
        debug!("Creating team {} on first result", key);
        self.team_keys.insert(key.clone(), id);
        self.teams.insert(id, team);
        id
    }

    fn team(&self, key: &TeamKey) -> RepositoryResult<Option<&Team>> {
        match self.team_keys.get(key) {
            Some(id) => self.teams.get(id).map(Some).ok_or_else(|| {
                RepositoryError::Corrupt(format!("team index points at missing {}", id))
            }),
            None => Ok(None),
        }
    }

    /// Apply `updates` to copies of the teams, creating missing ones, and
    /// return the copies without touching the tables
    fn stage(
        &self,
        updates: &[TeamResultUpdate],
        match_id: MatchId,
    ) -> RepositoryResult<Vec<Team>> {
        let mut staged: Vec<Team> = Vec::with_capacity(updates.len());
        for update in updates {
            let position = staged.iter().position(|t| t.key() == update.team);
            let team = match position {
                Some(i) => &mut staged[i],
                None => {
                    let team = match self.team(&update.team)? {
                        Some(team) => team.clone(),
                        None => Team::from_key(&update.team),
                    };
                    staged.push(team);
                    let last = staged.len() - 1;
                    &mut staged[last]
                }
            };
            team.apply_result(update, match_id)?;
        }
        Ok(staged)
    }

    fn commit(&mut self, teams: Vec<Team>) {
        for team in teams {
            if !self.team_keys.contains_key(&team.key()) {
                debug!("Creating team {} on first result", team.key());
                self.team_keys.insert(team.key(), team.id);
            }
            self.teams.insert(team.id, team);
        }
    }

    fn check_match_free(&self, m: &Match) -> RepositoryResult<MatchKey> {
        let key = m.key();
        if self.match_keys.contains_key(&key) || self.matches.contains_key(&m.id) {
            return Err(RepositoryError::duplicate(EntityKind::Match, key));
        }
        Ok(key)
    }
}

/// Repository holding all data in process memory
#[derive(Default)]
pub struct InMemoryRepository {
    tables: RwLock<Tables>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (leagues, teams, matches)
    pub async fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read().await;
        (tables.leagues.len(), tables.teams.len(), tables.matches.len())
    }
}

#[async_trait]
impl LeagueRepository for InMemoryRepository {
    async fn insert_league(&self, league: &League) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let key = league.key();
        if tables.league_keys.contains_key(&key) || tables.leagues.contains_key(&league.id) {
            return Err(RepositoryError::duplicate(EntityKind::League, key));
        }

        tables.league_keys.insert(key, league.id);
        tables.leagues.insert(league.id, league.clone());
        Ok(())
    }

    async fn find_league(&self, key: &LeagueKey) -> RepositoryResult<Option<League>> {
        let tables = self.tables.read().await;
        Ok(tables
            .league_keys
            .get(key)
            .and_then(|id| tables.leagues.get(id))
            .cloned())
    }

    async fn find_league_by_id(&self, id: LeagueId) -> RepositoryResult<Option<League>> {
        Ok(self.tables.read().await.leagues.get(&id).cloned())
    }

    async fn add_team_to_league(&self, league: LeagueId, team: TeamId) -> RepositoryResult<League> {
        let mut tables = self.tables.write().await;
        let league = tables.league_mut(league)?;
        league.add_team(team);
        Ok(league.clone())
    }

    async fn add_match_to_league(&self, league: LeagueId, id: MatchId) -> RepositoryResult<League> {
        let mut tables = self.tables.write().await;
        let league = tables.league_mut(league)?;
        league.add_match(id);
        Ok(league.clone())
    }
}

#[async_trait]
impl TeamRepository for InMemoryRepository {
    async fn insert_team(&self, team: &Team) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let key = team.key();
        if tables.team_keys.contains_key(&key) || tables.teams.contains_key(&team.id) {
            return Err(RepositoryError::duplicate(EntityKind::Team, key));
        }

        tables.team_keys.insert(key, team.id);
        tables.teams.insert(team.id, team.clone());
        Ok(())
    }

    async fn find_team(&self, key: &TeamKey) -> RepositoryResult<Option<Team>> {
        let tables = self.tables.read().await;
        Ok(tables
            .team_keys
            .get(key)
            .and_then(|id| tables.teams.get(id))
            .cloned())
    }

    async fn find_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        Ok(self.tables.read().await.teams.get(&id).cloned())
    }

    async fn find_or_create_team(&self, key: &TeamKey) -> RepositoryResult<Team> {
        let mut tables = self.tables.write().await;
        let id = tables.team_id_or_create(key);
        tables
            .teams
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::Corrupt(format!("team index points at missing {}", id)))
    }

    async fn increment_and_append(
        &self,
        update: &TeamResultUpdate,
        match_id: MatchId,
    ) -> RepositoryResult<Team> {
        let mut tables = self.tables.write().await;
        let mut team = tables
            .team(&update.team)?
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Team, &update.team))?;

        team.apply_result(update, match_id)?;
        tables.teams.insert(team.id, team.clone());
        Ok(team)
    }
}

#[async_trait]
impl MatchRepository for InMemoryRepository {
    async fn insert_match(&self, m: &Match) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let key = tables.check_match_free(m)?;

        tables.match_keys.insert(key, m.id);
        tables.matches.insert(m.id, m.clone());
        Ok(())
    }

    async fn find_match(&self, key: &MatchKey) -> RepositoryResult<Option<Match>> {
        let tables = self.tables.read().await;
        Ok(tables
            .match_keys
            .get(key)
            .and_then(|id| tables.matches.get(id))
            .cloned())
    }

    async fn find_match_by_id(&self, id: MatchId) -> RepositoryResult<Option<Match>> {
        Ok(self.tables.read().await.matches.get(&id).cloned())
    }

    async fn record_match_result(
        &self,
        m: &Match,
        updates: &[TeamResultUpdate],
    ) -> RepositoryResult<()> {
        // Everything below happens under one write guard, and nothing is
        // written until every update has been applied to a staged copy.
        let mut tables = self.tables.write().await;
        let key = tables.check_match_free(m)?;
        let staged = tables.stage(updates, m.id)?;

        tables.commit(staged);
        tables.match_keys.insert(key, m.id);
        tables.matches.insert(m.id, m.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::statistics::TeamOutcome;
    use league_core::MatchDate;

    fn date(s: &str) -> MatchDate {
        MatchDate::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_find_or_create_is_stable() {
        let repo = InMemoryRepository::new();
        let key = TeamKey::new("Real Madrid", 2020);

        let first = repo.find_or_create_team(&key).await.unwrap();
        let second = repo.find_or_create_team(&key).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.matches_played(), 0);
        assert_eq!(repo.counts().await, (0, 1, 0));
    }

    #[tokio::test]
    async fn test_increment_missing_team_fails() {
        let repo = InMemoryRepository::new();
        let update = TeamResultUpdate {
            team: TeamKey::new("Nobody", 2020),
            outcome: TeamOutcome::Win,
            scored: 1,
            received: 0,
        };

        let err = repo.increment_and_append(&update, MatchId::new()).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::NotFound { entity: EntityKind::Team, .. }
        ));
    }

    #[tokio::test]
    async fn test_overflowing_result_stores_nothing() {
        let repo = InMemoryRepository::new();
        let mut full = Team::new("A", 2021);
        full.number_of_scored_goals = league_core::MAX_COUNT;
        repo.insert_team(&full).await.unwrap();

        let m = Match::completed("A", "B", date("2021-01-01"), league_core::Score::new(1, 0));
        let updates = league_core::statistics::team_updates(&m).unwrap();
        let err = repo.record_match_result(&m, &updates).await.unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::Core(league_core::CoreError::CounterOverflow { .. })
        ));
        assert_eq!(repo.counts().await, (0, 1, 0));
        assert!(repo.find_match(&m.key()).await.unwrap().is_none());
        assert_eq!(repo.find_team(&full.key()).await.unwrap().unwrap(), full);
    }

    #[tokio::test]
    async fn test_match_key_index() {
        let repo = InMemoryRepository::new();
        let m = Match::scheduled("A", "B", date("2021-05-01"));
        repo.insert_match(&m).await.unwrap();

        let found = repo.find_match(&m.key()).await.unwrap().unwrap();
        assert_eq!(found.id, m.id);

        // Reversed fixture is a different key
        let reversed = MatchKey::new("B", "A", date("2021-05-01"));
        assert!(repo.find_match(&reversed).await.unwrap().is_none());
    }
}
