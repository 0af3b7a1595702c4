//! Unit tests for InMemoryRepository

use league_core::statistics::{team_updates, TeamOutcome, TeamResultUpdate};
use league_core::*;
use league_repository::{
    EntityKind, InMemoryRepository, LeagueRepository, MatchRepository, RepositoryError,
    RepositoryResult, Store, TeamRepository,
};
use std::sync::Arc;

fn date(s: &str) -> MatchDate {
    MatchDate::parse(s).unwrap()
}

fn completed(home: &str, away: &str, day: &str, score: &str) -> Match {
    Match::completed(home, away, date(day), Score::parse(score).unwrap())
}

async fn record(repo: &InMemoryRepository, m: &Match) -> RepositoryResult<()> {
    let updates = team_updates(m).unwrap();
    repo.record_match_result(m, &updates).await
}

// =============================================================================
// Leagues
// =============================================================================

#[tokio::test]
async fn test_insert_and_find_league() {
    let repo = InMemoryRepository::new();
    let league = League::new("Spanish", 2020);
    repo.insert_league(&league).await.unwrap();

    let by_key = repo.find_league(&LeagueKey::new("Spanish", 2020)).await.unwrap();
    assert_eq!(by_key, Some(league.clone()));

    let by_id = repo.find_league_by_id(league.id).await.unwrap();
    assert_eq!(by_id, Some(league));

    assert!(repo
        .find_league(&LeagueKey::new("Spanish", 2021))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_league_rejected() {
    let repo = InMemoryRepository::new();
    repo.insert_league(&League::new("Spanish", 2020)).await.unwrap();

    let err = repo.insert_league(&League::new("Spanish", 2020)).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::DuplicateKey { entity: EntityKind::League, .. }
    ));
    assert_eq!(repo.counts().await.0, 1);
}

#[tokio::test]
async fn test_link_team_and_match_to_league() {
    let repo = InMemoryRepository::new();
    let league = League::new("Spanish", 2020);
    repo.insert_league(&league).await.unwrap();

    let (a, b) = (TeamId::new(), TeamId::new());
    repo.add_team_to_league(league.id, a).await.unwrap();
    repo.add_team_to_league(league.id, b).await.unwrap();
    let updated = repo.add_team_to_league(league.id, a).await.unwrap();
    assert_eq!(updated.teams, vec![a, b]);

    let m = MatchId::new();
    let updated = repo.add_match_to_league(league.id, m).await.unwrap();
    assert_eq!(updated.matches, vec![m]);
}

#[tokio::test]
async fn test_link_to_missing_league_fails() {
    let repo = InMemoryRepository::new();
    let err = repo
        .add_team_to_league(LeagueId::new(), TeamId::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::NotFound { entity: EntityKind::League, .. }
    ));
}

// =============================================================================
// Teams
// =============================================================================

#[tokio::test]
async fn test_insert_team_and_duplicate() {
    let repo = InMemoryRepository::new();
    let team = Team::new("Barcelona", 2020);
    repo.insert_team(&team).await.unwrap();

    assert_eq!(repo.find_team_by_id(team.id).await.unwrap(), Some(team.clone()));

    let err = repo.insert_team(&Team::new("Barcelona", 2020)).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::DuplicateKey { entity: EntityKind::Team, .. }
    ));

    // Same name in another season is a different team
    repo.insert_team(&Team::new("Barcelona", 2021)).await.unwrap();
}

#[tokio::test]
async fn test_find_or_create_returns_existing() {
    let repo = InMemoryRepository::new();
    let team = Team::new("Barcelona", 2020);
    repo.insert_team(&team).await.unwrap();

    let found = repo
        .find_or_create_team(&TeamKey::new("Barcelona", 2020))
        .await
        .unwrap();
    assert_eq!(found.id, team.id);
}

#[tokio::test]
async fn test_increment_and_append() {
    let repo = InMemoryRepository::new();
    let key = TeamKey::new("A", 2021);
    repo.find_or_create_team(&key).await.unwrap();

    let match_id = MatchId::new();
    let update = TeamResultUpdate {
        team: key.clone(),
        outcome: TeamOutcome::Draw,
        scored: 2,
        received: 2,
    };
    let team = repo.increment_and_append(&update, match_id).await.unwrap();

    assert_eq!(team.number_of_draws, 1);
    assert_eq!(team.matches_draw, vec![match_id]);
    assert_eq!(team.number_of_scored_goals, 2);
    assert_eq!(team.number_of_received_goals, 2);
    assert_eq!(repo.find_team(&key).await.unwrap(), Some(team));
}

// =============================================================================
// Matches
// =============================================================================

#[tokio::test]
async fn test_record_creates_both_teams() {
    let repo = InMemoryRepository::new();
    let m = completed("Real Madrid", "Barcelona", "2020-03-20", "3-1");
    record(&repo, &m).await.unwrap();

    let madrid = repo
        .find_team(&TeamKey::new("Real Madrid", 2020))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(madrid.number_of_wins, 1);
    assert_eq!(madrid.matches_wins, vec![m.id]);

    let barca = repo
        .find_team(&TeamKey::new("Barcelona", 2020))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(barca.number_of_losses, 1);
    assert_eq!(barca.number_of_received_goals, 3);

    assert_eq!(repo.find_match_by_id(m.id).await.unwrap(), Some(m));
}

#[tokio::test]
async fn test_duplicate_record_changes_nothing() {
    let repo = InMemoryRepository::new();
    let first = completed("A", "B", "2021-01-01", "2-2");
    record(&repo, &first).await.unwrap();

    let again = completed("A", "B", "2021-01-01", "5-0");
    let err = record(&repo, &again).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::DuplicateKey { entity: EntityKind::Match, .. }
    ));

    let a = repo.find_team(&TeamKey::new("A", 2021)).await.unwrap().unwrap();
    assert_eq!(a.number_of_draws, 1);
    assert_eq!(a.number_of_wins, 0);
    assert_eq!(a.number_of_scored_goals, 2);
    assert_eq!(repo.counts().await, (0, 2, 1));
}

#[tokio::test]
async fn test_scheduled_match_then_result_on_same_key_is_duplicate() {
    let repo = InMemoryRepository::new();
    repo.insert_match(&Match::scheduled("A", "B", date("2021-01-01")))
        .await
        .unwrap();

    let err = record(&repo, &completed("A", "B", "2021-01-01", "1-0"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { .. }));
    assert!(repo.find_team(&TeamKey::new("A", 2021)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_results_are_all_applied() {
    let repo: Arc<dyn Store> = Arc::new(InMemoryRepository::new());

    let tasks = (1..=20).map(|day| {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move {
            let m = completed("A", "B", &format!("2021-03-{:02}", day), "1-0");
            let updates = team_updates(&m).unwrap();
            repo.record_match_result(&m, &updates).await
        })
    });
    for result in futures::future::join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let a = repo.find_team(&TeamKey::new("A", 2021)).await.unwrap().unwrap();
    assert_eq!(a.number_of_wins, 20);
    assert_eq!(a.matches_wins.len(), 20);

    let b = repo.find_team(&TeamKey::new("B", 2021)).await.unwrap().unwrap();
    assert_eq!(b.number_of_losses, 20);
    assert_eq!(b.number_of_received_goals, 20);
}
