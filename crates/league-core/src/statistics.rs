//! Statistics engine
//!
//! Turns a final score into a match outcome and into the per-team updates
//! that recording the result applies:
//!
//! ```text
//! "3-1"  ──► Score { home: 3, away: 1 }
//!        ──► Outcome::Decided { team_won: home, team_lost: away, .. }
//!        ──► [ home: Win  scored 3 received 1,
//!              away: Loss scored 1 received 3 ]
//! ```
//!
//! Both updates target the team records of the season derived from the
//! match date.

use crate::error::Result;
use crate::model::{ensure_opponents, Match, MatchResult, Outcome, TeamKey};
use crate::types::{MatchDate, Score};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of a match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamOutcome {
    Win,
    Loss,
    Draw,
}

impl TeamOutcome {
    /// Name of the counter this outcome increments
    pub fn counter_field(&self) -> &'static str {
        match self {
            TeamOutcome::Win => "number_of_wins",
            TeamOutcome::Loss => "number_of_losses",
            TeamOutcome::Draw => "number_of_draws",
        }
    }

    /// Name of the match list this outcome appends to
    pub fn list_field(&self) -> &'static str {
        match self {
            TeamOutcome::Win => "matches_wins",
            TeamOutcome::Loss => "matches_loss",
            TeamOutcome::Draw => "matches_draw",
        }
    }
}

impl TeamOutcome {
    /// The same match seen from the other side
    pub fn opposite(&self) -> TeamOutcome {
        match self {
            TeamOutcome::Win => TeamOutcome::Loss,
            TeamOutcome::Loss => TeamOutcome::Win,
            TeamOutcome::Draw => TeamOutcome::Draw,
        }
    }
}

impl fmt::Display for TeamOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TeamOutcome::Win => "win",
            TeamOutcome::Loss => "loss",
            TeamOutcome::Draw => "draw",
        };
        f.write_str(name)
    }
}

/// Counter changes for one team caused by one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResultUpdate {
    /// Team record to update
    pub team: TeamKey,

    pub outcome: TeamOutcome,

    /// Goals this team scored
    pub scored: u32,

    /// Goals the opponent scored
    pub received: u32,
}

/// Interpret a score between two named teams
///
/// Equal goals are a draw; otherwise the side with strictly more goals wins.
pub fn interpret_score(home_team: &str, away_team: &str, score: Score) -> MatchResult {
    let outcome = match score.home_ordering() {
        Ordering::Equal => Outcome::Draw,
        Ordering::Greater => Outcome::Decided {
            team_won: home_team.to_string(),
            team_lost: away_team.to_string(),
            team_won_score: score.home,
            team_lost_score: score.away,
        },
        Ordering::Less => Outcome::Decided {
            team_won: away_team.to_string(),
            team_lost: home_team.to_string(),
            team_won_score: score.away,
            team_lost_score: score.home,
        },
    };

    MatchResult { score, outcome }
}

/// Updates for the home and away teams of an interpreted result, in that
/// order
///
/// The outcome of each side is read from `result.outcome`. The two team
/// names must differ, see [`ensure_opponents`].
pub fn result_updates(
    home_team: &str,
    away_team: &str,
    season: i32,
    result: &MatchResult,
) -> [TeamResultUpdate; 2] {
    let home_outcome = match &result.outcome {
        Outcome::Draw => TeamOutcome::Draw,
        Outcome::Decided { team_won, .. } if team_won == home_team => TeamOutcome::Win,
        Outcome::Decided { .. } => TeamOutcome::Loss,
    };
    let score = result.score;

    [
        TeamResultUpdate {
            team: TeamKey::new(home_team, season),
            outcome: home_outcome,
            scored: score.home,
            received: score.away,
        },
        TeamResultUpdate {
            team: TeamKey::new(away_team, season),
            outcome: home_outcome.opposite(),
            scored: score.away,
            received: score.home,
        },
    ]
}

/// Updates for the home and away teams of a stored match
///
/// Returns `None` for a scheduled match.
pub fn team_updates(m: &Match) -> Option<[TeamResultUpdate; 2]> {
    let result = m.result()?;
    Some(result_updates(&m.home_team, &m.away_team, m.season(), result))
}

/// Build a completed match together with the team updates it causes
///
/// Fails with `SameTeam` if both sides name the same team.
pub fn completed_match(
    home_team: &str,
    away_team: &str,
    date: MatchDate,
    score: Score,
) -> Result<(Match, [TeamResultUpdate; 2])> {
    ensure_opponents(home_team, away_team)?;

    let result = interpret_score(home_team, away_team, score);
    let updates = result_updates(home_team, away_team, date.season(), &result);
    Ok((Match::with_result(home_team, away_team, date, result), updates))
}
