//! Error types for League Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Score is not `<int>-<int>` without leading zeros
    #[error("Invalid score format: '{0}' (expected e.g. '3-1')")]
    InvalidScoreFormat(String),

    /// Date is not a calendar date in `YYYY-MM-DD` form
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Home and away side name the same team
    #[error("A team cannot play against itself: '{0}'")]
    SameTeam(String),

    /// A team counter would exceed the storable range
    #[error("Counter overflow: {field} of {team} would exceed {max}")]
    CounterOverflow {
        team: String,
        field: &'static str,
        max: u32,
    },

    /// Aggregate query over no teams
    #[error("Cannot select a team from an empty team set")]
    EmptyTeamSet,
}

pub type Result<T> = std::result::Result<T, CoreError>;
