//! Repository traits for leagues, teams and matches
//!
//! Each entity gets its own trait; [`Store`] bundles the three so a single
//! backend can be injected as `Arc<dyn Store>`.
//!
//! # Examples
//!
//! ```no_run
//! use league_core::{Match, MatchDate, Score, TeamKey};
//! use league_core::statistics::team_updates;
//! use league_repository::{InMemoryRepository, MatchRepository, TeamRepository};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = InMemoryRepository::new();
//!
//! let m = Match::completed("A", "B", MatchDate::parse("2021-01-01")?, Score::parse("2-1")?);
//! let updates = team_updates(&m).expect("completed match");
//! repo.record_match_result(&m, &updates).await?;
//!
//! let a = repo.find_team(&TeamKey::new("A", 2021)).await?.expect("created on first result");
//! assert_eq!(a.number_of_wins, 1);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use league_core::statistics::TeamResultUpdate;
use league_core::{League, LeagueId, LeagueKey, Match, MatchId, MatchKey, Team, TeamId, TeamKey};

use crate::RepositoryResult;

/// Storage for leagues
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Insert a new league
    ///
    /// Fails with `DuplicateKey` if a league with the same name and season
    /// already exists.
    async fn insert_league(&self, league: &League) -> RepositoryResult<()>;

    async fn find_league(&self, key: &LeagueKey) -> RepositoryResult<Option<League>>;

    async fn find_league_by_id(&self, id: LeagueId) -> RepositoryResult<Option<League>>;

    /// Link a team to a league and return the updated league
    ///
    /// Linking an already linked team leaves the league unchanged. Fails with
    /// `NotFound` if the league does not exist; the team is not checked.
    async fn add_team_to_league(&self, league: LeagueId, team: TeamId) -> RepositoryResult<League>;

    /// Link a match to a league and return the updated league
    async fn add_match_to_league(&self, league: LeagueId, id: MatchId) -> RepositoryResult<League>;
}

/// Storage for seasonal team records
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team
    ///
    /// Fails with `DuplicateKey` if a team with the same name and season
    /// already exists.
    async fn insert_team(&self, team: &Team) -> RepositoryResult<()>;

    async fn find_team(&self, key: &TeamKey) -> RepositoryResult<Option<Team>>;

    async fn find_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;

    /// Return the team for `key`, creating it with zero counters if absent
    ///
    /// Lookup and creation happen as one step, so two concurrent callers
    /// always end up with the same record.
    async fn find_or_create_team(&self, key: &TeamKey) -> RepositoryResult<Team>;

    /// Apply one match result to an existing team
    ///
    /// Adds the goal tallies, increments one outcome counter and appends
    /// `match_id` to the matching list, all in one atomic update of the team
    /// named by `update.team`. Fails with `NotFound` if the team is missing.
    async fn increment_and_append(
        &self,
        update: &TeamResultUpdate,
        match_id: MatchId,
    ) -> RepositoryResult<Team>;
}

/// Storage for matches
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Insert a match without touching any team
    ///
    /// Fails with `DuplicateKey` if a match with the same home team, away
    /// team and date already exists.
    async fn insert_match(&self, m: &Match) -> RepositoryResult<()>;

    async fn find_match(&self, key: &MatchKey) -> RepositoryResult<Option<Match>>;

    async fn find_match_by_id(&self, id: MatchId) -> RepositoryResult<Option<Match>>;

    /// Insert a completed match and apply its team updates as one unit
    ///
    /// Each team in `updates` is found or created, then updated as by
    /// [`TeamRepository::increment_and_append`]. If the match already exists
    /// the call fails with `DuplicateKey` and no team changes.
    async fn record_match_result(
        &self,
        m: &Match,
        updates: &[TeamResultUpdate],
    ) -> RepositoryResult<()>;
}

/// A backend that stores all three entity kinds
pub trait Store: LeagueRepository + TeamRepository + MatchRepository {}

impl<T> Store for T where T: LeagueRepository + TeamRepository + MatchRepository {}
