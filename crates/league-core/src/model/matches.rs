//! Match definitions
//!
//! A match is either scheduled (no score) or completed (score and outcome).
//! Both are terminal: a scheduled match never transitions to completed.

use super::ids::MatchId;
use crate::error::{CoreError, Result};
use crate::statistics::interpret_score;
use crate::types::{MatchDate, Score};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural key of a match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    pub home_team: String,
    pub away_team: String,
    pub date: MatchDate,
}

impl MatchKey {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>, date: MatchDate) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            date,
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {} on {}", self.home_team, self.away_team, self.date)
    }
}

/// Reject a fixture in which a team would play itself
pub fn ensure_opponents(home_team: &str, away_team: &str) -> Result<()> {
    if home_team == away_team {
        return Err(CoreError::SameTeam(home_team.to_string()));
    }
    Ok(())
}

/// How a completed match ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Both sides scored the same number of goals
    Draw,

    /// One side scored strictly more
    Decided {
        team_won: String,
        team_lost: String,
        team_won_score: u32,
        team_lost_score: u32,
    },
}

/// Final score and its interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: Score,
    pub outcome: Outcome,
}

impl MatchResult {
    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, Outcome::Draw)
    }

    pub fn team_won(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Decided { team_won, .. } => Some(team_won),
            Outcome::Draw => None,
        }
    }

    pub fn team_lost(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Decided { team_lost, .. } => Some(team_lost),
            Outcome::Draw => None,
        }
    }
}

/// Lifecycle state of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchState {
    Scheduled,
    Completed(MatchResult),
}

/// A fixture between two teams on a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub date: MatchDate,
    pub state: MatchState,
}

impl Match {
    /// Create a match that has not been played yet
    pub fn scheduled(home_team: impl Into<String>, away_team: impl Into<String>, date: MatchDate) -> Self {
        Self {
            id: MatchId::new(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            date,
            state: MatchState::Scheduled,
        }
    }

    /// Create a finished match, interpreting the score
    pub fn completed(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        date: MatchDate,
        score: Score,
    ) -> Self {
        let home_team = home_team.into();
        let away_team = away_team.into();
        let result = interpret_score(&home_team, &away_team, score);
        Self::with_result(home_team, away_team, date, result)
    }

    /// Create a finished match from an already interpreted result
    pub fn with_result(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        date: MatchDate,
        result: MatchResult,
    ) -> Self {
        Self {
            id: MatchId::new(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            date,
            state: MatchState::Completed(result),
        }
    }

    pub fn key(&self) -> MatchKey {
        MatchKey::new(self.home_team.clone(), self.away_team.clone(), self.date)
    }

    /// Season the match counts towards
    pub fn season(&self) -> i32 {
        self.date.season()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        match &self.state {
            MatchState::Completed(result) => Some(result),
            MatchState::Scheduled => None,
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.result().map(|r| r.score)
    }

    pub fn is_completed(&self) -> bool {
        self.result().is_some()
    }
}
