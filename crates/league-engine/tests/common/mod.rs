//! Common test utilities for engine integration tests

#![allow(dead_code)]

use league_engine::{LeagueEngine, Team};
use league_repository::InMemoryRepository;
use std::collections::HashSet;
use std::sync::Arc;

/// Engine over a fresh in-memory repository
pub fn test_engine() -> LeagueEngine {
    LeagueEngine::new(Arc::new(InMemoryRepository::new()))
}

/// Record a list of `(home, away, date, score)` results, panicking on failure
pub async fn record_all(engine: &LeagueEngine, results: &[(&str, &str, &str, &str)]) {
    for (home, away, date, score) in results {
        engine
            .record_match_result(home, away, date, score)
            .await
            .unwrap_or_else(|e| panic!("recording {} vs {} on {}: {}", home, away, date, e));
    }
}

/// Assertions on team records
pub trait TeamAssertions {
    /// Assert (wins, losses, draws)
    fn assert_record(&self, wins: u32, losses: u32, draws: u32);

    /// Assert (scored, received)
    fn assert_goals(&self, scored: u32, received: u32);

    /// Assert counters agree with the match lists
    fn assert_consistent(&self);
}

impl TeamAssertions for Team {
    fn assert_record(&self, wins: u32, losses: u32, draws: u32) {
        assert_eq!(
            (self.number_of_wins, self.number_of_losses, self.number_of_draws),
            (wins, losses, draws),
            "record of {}",
            self.key()
        );
    }

    fn assert_goals(&self, scored: u32, received: u32) {
        assert_eq!(
            (self.number_of_scored_goals, self.number_of_received_goals),
            (scored, received),
            "goals of {}",
            self.key()
        );
    }

    fn assert_consistent(&self) {
        assert_eq!(self.number_of_wins as usize, self.matches_wins.len());
        assert_eq!(self.number_of_losses as usize, self.matches_loss.len());
        assert_eq!(self.number_of_draws as usize, self.matches_draw.len());

        let listed: HashSet<_> = self
            .matches_wins
            .iter()
            .chain(&self.matches_loss)
            .chain(&self.matches_draw)
            .collect();
        assert_eq!(
            self.matches_played(),
            listed.len() as u64,
            "a match is listed twice for {}",
            self.key()
        );
    }
}
