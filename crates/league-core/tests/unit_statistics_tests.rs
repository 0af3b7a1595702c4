//! Unit tests for match result application
//!
//! Drives parsing, outcome interpretation and team updates together the way
//! recording a result does, without a repository.

use league_core::statistics::team_updates;
use league_core::*;
use std::collections::HashMap;

/// Apply completed matches to an in-memory team table
fn apply_all(matches: &[Match]) -> HashMap<TeamKey, Team> {
    let mut teams: HashMap<TeamKey, Team> = HashMap::new();
    for m in matches {
        for update in team_updates(m).expect("completed match") {
            teams
                .entry(update.team.clone())
                .or_insert_with(|| Team::from_key(&update.team))
                .apply_result(&update, m.id)
                .unwrap();
        }
    }
    teams
}

fn completed(home: &str, away: &str, date: &str, score: &str) -> Match {
    Match::completed(
        home,
        away,
        MatchDate::parse(date).unwrap(),
        Score::parse(score).unwrap(),
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_real_madrid_beats_barcelona() {
    let m = completed("Real Madrid", "Barcelona", "2020-03-20", "3-1");
    let result = m.result().unwrap();
    assert_eq!(result.score.to_string(), "3-1");
    assert!(!result.is_draw());
    assert_eq!(result.team_won(), Some("Real Madrid"));
    assert_eq!(result.team_lost(), Some("Barcelona"));

    let teams = apply_all(&[m.clone()]);

    let madrid = &teams[&TeamKey::new("Real Madrid", 2020)];
    assert_eq!(madrid.number_of_wins, 1);
    assert_eq!(madrid.number_of_scored_goals, 3);
    assert_eq!(madrid.number_of_received_goals, 1);
    assert_eq!(madrid.matches_wins, vec![m.id]);

    let barca = &teams[&TeamKey::new("Barcelona", 2020)];
    assert_eq!(barca.number_of_losses, 1);
    assert_eq!(barca.number_of_scored_goals, 1);
    assert_eq!(barca.number_of_received_goals, 3);
    assert_eq!(barca.matches_loss, vec![m.id]);
}

#[test]
fn test_two_all_draw() {
    let m = completed("A", "B", "2021-01-01", "2-2");
    let teams = apply_all(&[m]);

    for name in ["A", "B"] {
        let team = &teams[&TeamKey::new(name, 2021)];
        assert_eq!(team.number_of_draws, 1);
        assert_eq!(team.number_of_scored_goals, 2);
        assert_eq!(team.number_of_received_goals, 2);
        assert_eq!(team.number_of_wins + team.number_of_losses, 0);
    }
}

#[test]
fn test_counters_match_number_of_completed_matches() {
    let matches = vec![
        completed("A", "B", "2021-01-01", "1-0"),
        completed("B", "A", "2021-02-01", "0-0"),
        completed("C", "A", "2021-03-01", "4-2"),
        completed("A", "C", "2021-04-01", "3-3"),
        completed("A", "B", "2021-05-01", "0-1"),
    ];
    let teams = apply_all(&matches);

    let a = &teams[&TeamKey::new("A", 2021)];
    let listed = a.matches_wins.len() + a.matches_loss.len() + a.matches_draw.len();
    assert_eq!(a.matches_played(), 5);
    assert_eq!(listed, 5);
    assert_eq!((a.number_of_wins, a.number_of_losses, a.number_of_draws), (1, 2, 2));
    assert_eq!(a.number_of_scored_goals, 6);
    assert_eq!(a.number_of_received_goals, 8);
}

#[test]
fn test_season_follows_match_date() {
    let teams = apply_all(&[
        completed("A", "B", "2020-12-31", "1-0"),
        completed("A", "B", "2021-01-01", "1-0"),
    ]);

    assert_eq!(teams[&TeamKey::new("A", 2020)].number_of_wins, 1);
    assert_eq!(teams[&TeamKey::new("A", 2021)].number_of_wins, 1);
    assert_eq!(teams.len(), 4);
}

// =============================================================================
// Aggregates over applied results
// =============================================================================

#[test]
fn test_extremal_after_results() {
    let matches = vec![
        completed("A", "B", "2021-01-01", "3-0"),
        completed("C", "A", "2021-01-08", "5-0"),
    ];
    let table = apply_all(&matches);
    let teams: Vec<Team> = ["A", "B", "C"]
        .iter()
        .map(|n| table[&TeamKey::new(*n, 2021)].clone())
        .collect();

    let top = extremal_team(&teams, Metric::ScoredGoals, Direction::Max).unwrap();
    assert_eq!(top.name, "C");

    let fewest = extremal_team(&teams, Metric::ScoredGoals, Direction::Min).unwrap();
    assert_eq!(fewest.name, "B");

    // A and C both have one win; A comes first
    let most_wins = extremal_team(&teams, Metric::Wins, Direction::Max).unwrap();
    assert_eq!(most_wins.name, "A");

    let least_wins = extremal_team(&teams, Metric::Wins, Direction::Min).unwrap();
    assert_eq!(least_wins.name, "B");
}

#[test]
fn test_malformed_scores_rejected() {
    for input in ["abc", "1-", "-1-2", "01-1", "1 - x"] {
        assert!(
            matches!(Score::parse(input), Err(CoreError::InvalidScoreFormat(_))),
            "{}",
            input
        );
    }
    assert_eq!(Score::parse("2- 1").unwrap(), Score::new(2, 1));
}

// =============================================================================
// Counter bounds
// =============================================================================

#[test]
fn test_goal_tally_stops_at_max_count() {
    let first = completed("A", "B", "2021-01-01", &format!("{}-0", MAX_COUNT));
    let second = completed("A", "C", "2021-01-08", "5-0");

    let mut teams = apply_all(&[first]);
    let a = teams.get_mut(&TeamKey::new("A", 2021)).unwrap();
    let [update, _] = team_updates(&second).unwrap();

    let err = a.apply_result(&update, second.id).unwrap_err();
    assert!(matches!(
        err,
        CoreError::CounterOverflow { field: "number_of_scored_goals", .. }
    ));
    assert_eq!(a.number_of_scored_goals, MAX_COUNT);
    assert_eq!(a.number_of_wins, 1);
}

#[test]
fn test_score_above_max_count_is_rejected() {
    let input = format!("{}-0", MAX_COUNT as u64 + 1);
    assert_eq!(
        Score::parse(&input),
        Err(CoreError::InvalidScoreFormat(input.clone()))
    );
    assert!(Score::parse("4294967295-0").is_err());
}
