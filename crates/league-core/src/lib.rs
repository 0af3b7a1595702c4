//! League Core - Core types and statistics logic for the league records service
//!
//! This crate provides the fundamental types used across the workspace:
//! - Entity types (League, Team, Match) and their natural keys
//! - Score and match date parsing
//! - Statistics engine: match outcome interpretation and team updates
//! - Aggregate queries over a set of teams
//! - Error types

pub mod aggregate;
pub mod error;
pub mod model;
pub mod statistics;
pub mod types;

// Re-export commonly used types
pub use aggregate::{extremal_team, Direction, Metric};
pub use error::{CoreError, Result};
pub use model::{
    ensure_opponents, League, LeagueId, LeagueKey, Match, MatchId, MatchKey, MatchResult, MatchState, Outcome,
    Team, TeamId, TeamKey,
};
pub use statistics::{completed_match, TeamOutcome, TeamResultUpdate};
pub use types::{MatchDate, Score, MAX_COUNT};
