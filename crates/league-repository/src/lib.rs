//! Entity repository for the league records service
//!
//! This crate stores leagues, teams and matches behind async traits so the
//! engine does not depend on a particular backend.
//!
//! # Features
//!
//! - **In-memory repository**: everything in one lock-guarded table set, the
//!   default for development and tests
//! - **PostgreSQL repository**: one table per entity with unique natural keys
//!   (feature `postgres`)
//! - **Atomic result recording**: a completed match and both team updates are
//!   committed together or not at all
//!
//! # Natural keys
//!
//! | Entity | Key |
//! |---|---|
//! | League | name, season |
//! | Team | name, season |
//! | Match | home team, away team, date |
//!
//! Inserting a second entity with an existing key fails with
//! [`RepositoryError::DuplicateKey`].
//!
//! # Quick Start
//!
//! ```no_run
//! use league_repository::{open_repository, RepositoryConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = open_repository(&RepositoryConfig::memory()).await?;
//! # let _ = store;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use config::{open_repository, ConfigError, RepositoryConfig, RepositorySource};
pub use error::{EntityKind, RepositoryError, RepositoryResult};
pub use memory::InMemoryRepository;
pub use traits::{LeagueRepository, MatchRepository, Store, TeamRepository};

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
