//! League records engine
//!
//! High-level API for recording match results, managing leagues and teams,
//! and querying extremal teams. All storage goes through an injected
//! [`league_repository::Store`].
//!
//! ```rust,ignore
//! use league_engine::{Direction, LeagueEngineBuilder, Metric};
//!
//! let engine = LeagueEngineBuilder::new().build().await?;
//! engine.record_match_result("Real Madrid", "Barcelona", "2020-03-20", "3-1").await?;
//!
//! let madrid = engine.get_team("Real Madrid", 2020).await?;
//! assert_eq!(madrid.number_of_wins, 1);
//! ```

pub mod builder;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::LeagueEngineBuilder;
pub use engine::LeagueEngine;
pub use error::{EngineError, Result};

// Re-export commonly used types from dependencies
pub use league_core::{
    Direction, League, LeagueId, Match, MatchId, MatchState, Metric, Outcome, Team, TeamId,
};
pub use league_repository::{EntityKind, RepositoryConfig};
