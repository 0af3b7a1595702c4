//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use league_engine::LeagueEngine;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(engine: LeagueEngine) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/health", get(health))
        .route("/v1/leagues", post(create_league).get(get_league_by_key))
        .route("/v1/leagues/:id", get(get_league_by_id))
        .route(
            "/v1/leagues/:id/teams",
            get(league_teams).post(add_team_to_league),
        )
        .route("/v1/leagues/:id/matches", post(add_match_to_league))
        .route("/v1/leagues/:id/extremal", get(league_extremal_team))
        .route("/v1/teams", post(create_team).get(get_team_by_key))
        .route("/v1/teams/:id", get(get_team_by_id))
        .route("/v1/matches", post(create_match).get(get_match_by_key))
        .route("/v1/matches/:id", get(get_match_by_id))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
