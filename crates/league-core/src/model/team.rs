//! Team definitions

use super::ids::{MatchId, TeamId};
use crate::error::{CoreError, Result};
use crate::statistics::{TeamOutcome, TeamResultUpdate};
use crate::types::MAX_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural key of a team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamKey {
    /// Team name
    pub name: String,

    /// Season year
    pub season: i32,
}

impl TeamKey {
    pub fn new(name: impl Into<String>, season: i32) -> Self {
        Self {
            name: name.into(),
            season,
        }
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.season)
    }
}

/// A club's record for one season
///
/// Invariant: `number_of_wins + number_of_losses + number_of_draws` equals
/// the combined length of `matches_wins`, `matches_loss` and `matches_draw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,

    pub name: String,

    pub season: i32,

    #[serde(default)]
    pub number_of_wins: u32,

    /// Matches this team won
    #[serde(default)]
    pub matches_wins: Vec<MatchId>,

    #[serde(default)]
    pub number_of_losses: u32,

    /// Matches this team lost
    #[serde(default)]
    pub matches_loss: Vec<MatchId>,

    #[serde(default)]
    pub number_of_draws: u32,

    /// Matches that ended level
    #[serde(default)]
    pub matches_draw: Vec<MatchId>,

    #[serde(default)]
    pub number_of_scored_goals: u32,

    #[serde(default)]
    pub number_of_received_goals: u32,
}

impl Team {
    /// Create a team with every counter at zero
    pub fn new(name: impl Into<String>, season: i32) -> Self {
        Self {
            id: TeamId::new(),
            name: name.into(),
            season,
            number_of_wins: 0,
            matches_wins: Vec::new(),
            number_of_losses: 0,
            matches_loss: Vec::new(),
            number_of_draws: 0,
            matches_draw: Vec::new(),
            number_of_scored_goals: 0,
            number_of_received_goals: 0,
        }
    }

    pub fn from_key(key: &TeamKey) -> Self {
        Self::new(key.name.clone(), key.season)
    }

    pub fn key(&self) -> TeamKey {
        TeamKey::new(self.name.clone(), self.season)
    }

    /// Number of completed matches recorded for this team
    pub fn matches_played(&self) -> u64 {
        u64::from(self.number_of_wins)
            + u64::from(self.number_of_losses)
            + u64::from(self.number_of_draws)
    }

    /// Apply one match result: goal tallies, one outcome counter and one
    /// match list are updated together.
    ///
    /// Fails with `CounterOverflow` and leaves the team unchanged if any
    /// counter would pass [`MAX_COUNT`].
    pub fn apply_result(&mut self, update: &TeamResultUpdate, match_id: MatchId) -> Result<()> {
        let scored = self.bump("number_of_scored_goals", self.number_of_scored_goals, update.scored)?;
        let received = self.bump(
            "number_of_received_goals",
            self.number_of_received_goals,
            update.received,
        )?;

        let field = update.outcome.counter_field();
        let count = match update.outcome {
            TeamOutcome::Win => self.bump(field, self.number_of_wins, 1)?,
            TeamOutcome::Loss => self.bump(field, self.number_of_losses, 1)?,
            TeamOutcome::Draw => self.bump(field, self.number_of_draws, 1)?,
        };

        match update.outcome {
            TeamOutcome::Win => {
                self.number_of_wins = count;
                self.matches_wins.push(match_id);
            }
            TeamOutcome::Loss => {
                self.number_of_losses = count;
                self.matches_loss.push(match_id);
            }
            TeamOutcome::Draw => {
                self.number_of_draws = count;
                self.matches_draw.push(match_id);
            }
        }
        self.number_of_scored_goals = scored;
        self.number_of_received_goals = received;
        Ok(())
    }

    fn bump(&self, field: &'static str, current: u32, by: u32) -> Result<u32> {
        checked_count(current, by).ok_or_else(|| CoreError::CounterOverflow {
            team: self.key().to_string(),
            field,
            max: MAX_COUNT,
        })
    }
}

fn checked_count(current: u32, by: u32) -> Option<u32> {
    current.checked_add(by).filter(|total| *total <= MAX_COUNT)
}
