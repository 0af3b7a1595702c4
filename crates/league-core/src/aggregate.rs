//! Aggregate queries over a set of teams

use crate::error::{CoreError, Result};
use crate::model::Team;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team statistic an aggregate query ranks by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// `number_of_scored_goals`
    ScoredGoals,
    /// `number_of_wins`
    Wins,
}

impl Metric {
    pub fn value(&self, team: &Team) -> u32 {
        match self {
            Metric::ScoredGoals => team.number_of_scored_goals,
            Metric::Wins => team.number_of_wins,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::ScoredGoals => f.write_str("scored_goals"),
            Metric::Wins => f.write_str("wins"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Max,
    Min,
}

impl Direction {
    /// True if `candidate` strictly beats `best`
    fn beats(&self, candidate: u32, best: u32) -> bool {
        match self {
            Direction::Max => candidate > best,
            Direction::Min => candidate < best,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Max => f.write_str("max"),
            Direction::Min => f.write_str("min"),
        }
    }
}

/// Select the team with the highest or lowest value of `metric`
///
/// Scans `teams` in order and only replaces the running best on a strict
/// improvement, so on ties the first team in input order is returned.
pub fn extremal_team(teams: &[Team], metric: Metric, direction: Direction) -> Result<&Team> {
    let (first, rest) = teams.split_first().ok_or(CoreError::EmptyTeamSet)?;

    let mut best = first;
    let mut best_value = metric.value(first);
    for team in rest {
        let value = metric.value(team);
        if direction.beats(value, best_value) {
            best = team;
            best_value = value;
        }
    }

    Ok(best)
}
