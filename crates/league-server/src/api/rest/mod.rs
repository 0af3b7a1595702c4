//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Request/response type definitions and payload validation
//! - extractors: Custom request extractors with uniform rejections
//! - conversions: Entity to response conversions
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod conversions;
mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{JsonExtractor, QueryExtractor};
pub use router::create_router;
pub use types::{
    AppState, CreateLeaguePayload, CreateTeamPayload, ExtremalQuery, HealthResponse,
    LinkMatchPayload, LinkTeamPayload, MatchPayload, MatchQuery, MatchView, NaturalKeyQuery,
    SuccessResponse,
};
