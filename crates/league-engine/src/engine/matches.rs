//! Match scheduling and result recording

use league_core::statistics::completed_match;
use league_core::{ensure_opponents, Match, MatchDate, MatchId, MatchKey, Score};
use league_repository::{EntityKind, MatchRepository};
use tracing::{debug, info, warn};

use super::LeagueEngine;
use crate::error::{EngineError, Result};

impl LeagueEngine {
    /// Record a finished match and update both teams
    ///
    /// `score` is `"<home>-<away>"`, whitespace is ignored. Teams for the
    /// season of `date` are created on first use. The match and both team
    /// updates are stored as one unit; recording the same fixture twice fails
    /// with [`EngineError::DuplicateMatch`] and leaves the teams untouched.
    /// A team cannot play itself.
    pub async fn record_match_result(
        &self,
        home_team: &str,
        away_team: &str,
        date: &str,
        score: &str,
    ) -> Result<MatchId> {
        let score = Score::parse(score)?;
        let date = MatchDate::parse(date)?;
        let (m, updates) = completed_match(home_team, away_team, date, score)?;
        debug!(
            "Recording {} with score {}: {} {}, {} {}",
            m.key(),
            score,
            updates[0].team,
            updates[0].outcome,
            updates[1].team,
            updates[1].outcome
        );

        match self.store.record_match_result(&m, &updates).await {
            Ok(()) => {
                info!("Recorded match {} ({}) as {}", m.key(), score, m.id);
                Ok(m.id)
            }
            Err(e) => {
                warn!("Failed to record match {}: {}", m.key(), e);
                Err(e.into())
            }
        }
    }

    /// Create a match without a score
    pub async fn schedule_match(
        &self,
        home_team: &str,
        away_team: &str,
        date: &str,
    ) -> Result<MatchId> {
        let date = MatchDate::parse(date)?;
        ensure_opponents(home_team, away_team)?;
        let m = Match::scheduled(home_team, away_team, date);

        self.store.insert_match(&m).await?;
        info!("Scheduled match {} as {}", m.key(), m.id);
        Ok(m.id)
    }

    pub async fn get_match_by_id(&self, id: MatchId) -> Result<Match> {
        self.store
            .find_match_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::Match, id))
    }

    /// Look a match up by its fixture
    pub async fn get_match(&self, home_team: &str, away_team: &str, date: &str) -> Result<Match> {
        let key = MatchKey::new(home_team, away_team, MatchDate::parse(date)?);
        self.store
            .find_match(&key)
            .await?
            .ok_or_else(|| EngineError::not_found(EntityKind::Match, &key))
    }
}
