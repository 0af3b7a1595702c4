//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::conversions::parse_id;
use super::extractors::{JsonExtractor, QueryExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    Json,
};
use league_core::{LeagueId, MatchId, TeamId};
use tracing::{debug, info, warn};

type ApiResult<T> = Result<Json<SuccessResponse<T>>, ServerError>;

fn ok<T: serde::Serialize>(message: &str, body: T) -> ApiResult<T> {
    Ok(Json(SuccessResponse::new(message, body)))
}

/// Log a failed request and pass the error on
fn failed(operation: &str, err: ServerError) -> ServerError {
    warn!("{} failed: {}", operation, err);
    err
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Leagues
// ============================================================================

pub(super) async fn create_league(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateLeaguePayload>,
) -> ApiResult<IdBody> {
    info!("Create league - name: {}, season: {}", payload.name, payload.season);
    payload.validate().map_err(|e| failed("Create league", e))?;

    let id = state
        .engine
        .create_league(&payload.name, payload.season, &payload.teams)
        .await
        .map_err(|e| failed("Create league", e.into()))?;

    ok("the league added", IdBody { id: id.to_string() })
}

pub(super) async fn get_league_by_key(
    State(state): State<AppState>,
    QueryExtractor(query): QueryExtractor<NaturalKeyQuery>,
) -> ApiResult<LeagueBody> {
    debug!("Get league - name: {}, season: {}", query.name, query.season);
    let league = state
        .engine
        .get_league(&query.name, query.season)
        .await
        .map_err(|e| failed("Get league", e.into()))?;

    ok("success", LeagueBody { league })
}

pub(super) async fn get_league_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LeagueBody> {
    let id: LeagueId = parse_id(&id, "league")?;
    let league = state
        .engine
        .get_league_by_id(id)
        .await
        .map_err(|e| failed("Get league", e.into()))?;

    ok("success", LeagueBody { league })
}

pub(super) async fn league_teams(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TeamsBody> {
    let id: LeagueId = parse_id(&id, "league")?;
    let teams = state
        .engine
        .league_teams(id)
        .await
        .map_err(|e| failed("List league teams", e.into()))?;

    ok("success", TeamsBody { teams })
}

pub(super) async fn add_team_to_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(payload): JsonExtractor<LinkTeamPayload>,
) -> ApiResult<LeagueBody> {
    let id: LeagueId = parse_id(&id, "league")?;
    info!("Add team {} to league {}", payload.team_id, id);

    let league = state
        .engine
        .add_team_to_league(id, payload.team_id)
        .await
        .map_err(|e| failed("Add team to league", e.into()))?;

    ok("the team added to the league", LeagueBody { league })
}

pub(super) async fn add_match_to_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonExtractor(payload): JsonExtractor<LinkMatchPayload>,
) -> ApiResult<LeagueBody> {
    let id: LeagueId = parse_id(&id, "league")?;
    info!("Add match {} to league {}", payload.match_id, id);

    let league = state
        .engine
        .add_match_to_league(id, payload.match_id)
        .await
        .map_err(|e| failed("Add match to league", e.into()))?;

    ok("the match added to the league", LeagueBody { league })
}

pub(super) async fn league_extremal_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    QueryExtractor(query): QueryExtractor<ExtremalQuery>,
) -> ApiResult<TeamBody> {
    let id: LeagueId = parse_id(&id, "league")?;
    debug!("Extremal team - league: {}, {} {}", id, query.direction, query.metric);

    let team = state
        .engine
        .league_extremal_team(id, query.metric, query.direction)
        .await
        .map_err(|e| failed("Extremal team", e.into()))?;

    ok("success", TeamBody { team })
}

// ============================================================================
// Teams
// ============================================================================

pub(super) async fn create_team(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateTeamPayload>,
) -> ApiResult<IdBody> {
    info!("Create team - name: {}, season: {}", payload.name, payload.season);
    payload.validate().map_err(|e| failed("Create team", e))?;

    let id = state
        .engine
        .create_team(&payload.name, payload.season)
        .await
        .map_err(|e| failed("Create team", e.into()))?;

    ok("the team added", IdBody { id: id.to_string() })
}

pub(super) async fn get_team_by_key(
    State(state): State<AppState>,
    QueryExtractor(query): QueryExtractor<NaturalKeyQuery>,
) -> ApiResult<TeamBody> {
    debug!("Get team - name: {}, season: {}", query.name, query.season);
    let team = state
        .engine
        .get_team(&query.name, query.season)
        .await
        .map_err(|e| failed("Get team", e.into()))?;

    ok("success", TeamBody { team })
}

pub(super) async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TeamBody> {
    let id: TeamId = parse_id(&id, "team")?;
    let team = state
        .engine
        .get_team_by_id(id)
        .await
        .map_err(|e| failed("Get team", e.into()))?;

    ok("success", TeamBody { team })
}

// ============================================================================
// Matches
// ============================================================================

/// Record a result when a score is given, otherwise schedule the match
pub(super) async fn create_match(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<MatchPayload>,
) -> ApiResult<IdBody> {
    info!(
        "Create match - {} vs {} on {}, score: {:?}",
        payload.home_team, payload.away_team, payload.date, payload.score
    );
    payload.validate().map_err(|e| failed("Create match", e))?;

    let (id, message) = match &payload.score {
        Some(score) => {
            let id = state
                .engine
                .record_match_result(&payload.home_team, &payload.away_team, &payload.date, score)
                .await
                .map_err(|e| failed("Record match result", e.into()))?;
            (id, "the match added")
        }
        None => {
            let id = state
                .engine
                .schedule_match(&payload.home_team, &payload.away_team, &payload.date)
                .await
                .map_err(|e| failed("Schedule match", e.into()))?;
            (id, "the match scheduled")
        }
    };

    ok(message, IdBody { id: id.to_string() })
}

pub(super) async fn get_match_by_key(
    State(state): State<AppState>,
    QueryExtractor(query): QueryExtractor<MatchQuery>,
) -> ApiResult<MatchBody> {
    let m = state
        .engine
        .get_match(&query.home_team, &query.away_team, &query.date)
        .await
        .map_err(|e| failed("Get match", e.into()))?;

    ok("success", MatchBody { m: MatchView::from(&m) })
}

pub(super) async fn get_match_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MatchBody> {
    let id: MatchId = parse_id(&id, "match")?;
    let m = state
        .engine
        .get_match_by_id(id)
        .await
        .map_err(|e| failed("Get match", e.into()))?;

    ok("success", MatchBody { m: MatchView::from(&m) })
}
