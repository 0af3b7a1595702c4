//! Entity definitions
//!
//! Leagues, teams and matches are identified by generated ids and by their
//! natural keys:
//! - League: (name, season)
//! - Team: (name, season)
//! - Match: (home team, away team, date)

pub mod ids;
pub mod league;
pub mod matches;
pub mod team;

pub use ids::{LeagueId, MatchId, TeamId};
pub use league::{League, LeagueKey};
pub use matches::{ensure_opponents, Match, MatchKey, MatchResult, MatchState, Outcome};
pub use team::{Team, TeamKey};
