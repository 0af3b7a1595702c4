//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::error::ServerError;
use league_core::{Direction, MatchId, Metric, TeamId};
use league_engine::LeagueEngine;
use serde::{Deserialize, Serialize};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: LeagueEngine,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Successful response: `status`, `message` and one named payload field
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(message: impl Into<String>, body: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IdBody {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct LeagueBody {
    pub league: league_core::League,
}

#[derive(Debug, Serialize)]
pub struct TeamBody {
    pub team: league_core::Team,
}

#[derive(Debug, Serialize)]
pub struct TeamsBody {
    pub teams: Vec<league_core::Team>,
}

#[derive(Debug, Serialize)]
pub struct MatchBody {
    #[serde(rename = "match")]
    pub m: MatchView,
}

/// Flat rendering of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub date: String,
    pub season: i32,

    /// "scheduled" or "completed"
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_draw: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_won: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_lost: Option<String>,
}

/// Seasons accepted by the API
const SEASONS: std::ops::RangeInclusive<i32> = 1..=9999;

fn require_name(field: &str, value: &str) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(ServerError::ValidationError(format!("'{}' must not be empty", field)));
    }
    Ok(())
}

fn require_season(season: i32) -> Result<(), ServerError> {
    if !SEASONS.contains(&season) {
        return Err(ServerError::ValidationError(format!(
            "'season' must be between {} and {}, got {}",
            SEASONS.start(),
            SEASONS.end(),
            season
        )));
    }
    Ok(())
}

/// Create league request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateLeaguePayload {
    pub name: String,
    pub season: i32,

    /// Existing teams to link
    #[serde(default)]
    pub teams: Vec<TeamId>,
}

impl CreateLeaguePayload {
    pub fn validate(&self) -> Result<(), ServerError> {
        require_name("name", &self.name)?;
        require_season(self.season)
    }
}

/// Create team request
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTeamPayload {
    pub name: String,
    pub season: i32,
}

impl CreateTeamPayload {
    pub fn validate(&self) -> Result<(), ServerError> {
        require_name("name", &self.name)?;
        require_season(self.season)
    }
}

/// Match request; with `score` the result is recorded, without it the
/// match is scheduled
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchPayload {
    pub home_team: String,
    pub away_team: String,

    /// "YYYY-MM-DD"
    pub date: String,

    /// "<home>-<away>", e.g. "3-1"
    #[serde(default)]
    pub score: Option<String>,
}

impl MatchPayload {
    pub fn validate(&self) -> Result<(), ServerError> {
        require_name("home_team", &self.home_team)?;
        require_name("away_team", &self.away_team)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkTeamPayload {
    pub team_id: TeamId,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkMatchPayload {
    pub match_id: MatchId,
}

/// `?name=&season=` lookup of a league or team
#[derive(Debug, Deserialize)]
pub struct NaturalKeyQuery {
    pub name: String,
    pub season: i32,
}

/// `?home_team=&away_team=&date=` lookup of a match
#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub home_team: String,
    pub away_team: String,
    pub date: String,
}

/// `?metric=&direction=` for league aggregates
#[derive(Debug, Deserialize)]
pub struct ExtremalQuery {
    pub metric: Metric,
    pub direction: Direction,
}
