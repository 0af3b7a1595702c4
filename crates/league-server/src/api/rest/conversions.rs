//! Conversions between engine entities and API payloads

use super::types::MatchView;
use crate::error::ServerError;
use league_core::{Match, MatchState};
use std::str::FromStr;

impl From<&Match> for MatchView {
    fn from(m: &Match) -> Self {
        let result = match &m.state {
            MatchState::Completed(result) => Some(result),
            MatchState::Scheduled => None,
        };

        Self {
            id: m.id.to_string(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            date: m.date.to_string(),
            season: m.season(),
            status: if result.is_some() { "completed" } else { "scheduled" }.to_string(),
            score: result.map(|r| r.score.to_string()),
            is_draw: result.map(|r| r.is_draw()),
            team_won: result.and_then(|r| r.team_won()).map(str::to_string),
            team_lost: result.and_then(|r| r.team_lost()).map(str::to_string),
        }
    }
}

/// Parse an id taken from the request path
pub(super) fn parse_id<T: FromStr>(raw: &str, entity: &str) -> Result<T, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::ValidationError(format!("Invalid {} id: '{}'", entity, raw)))
}
