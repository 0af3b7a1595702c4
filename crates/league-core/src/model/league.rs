//! League definitions

use super::ids::{LeagueId, MatchId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural key of a league
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueKey {
    /// League name
    pub name: String,

    /// Season year
    pub season: i32,
}

impl LeagueKey {
    pub fn new(name: impl Into<String>, season: i32) -> Self {
        Self {
            name: name.into(),
            season,
        }
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.season)
    }
}

/// A named grouping of teams for a season
///
/// A league references teams and matches by id; it never owns them.
/// Both reference lists keep insertion order and hold no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,

    pub name: String,

    pub season: i32,

    /// Teams taking part, in the order they were linked
    #[serde(default)]
    pub teams: Vec<TeamId>,

    /// Matches linked to the league
    #[serde(default)]
    pub matches: Vec<MatchId>,
}

impl League {
    /// Create an empty league
    pub fn new(name: impl Into<String>, season: i32) -> Self {
        Self {
            id: LeagueId::new(),
            name: name.into(),
            season,
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Link the given teams, skipping repeats
    pub fn with_teams(mut self, teams: impl IntoIterator<Item = TeamId>) -> Self {
        for team in teams {
            self.add_team(team);
        }
        self
    }

    pub fn key(&self) -> LeagueKey {
        LeagueKey::new(self.name.clone(), self.season)
    }

    /// Link a team. Returns false if it was already linked.
    pub fn add_team(&mut self, team: TeamId) -> bool {
        if self.teams.contains(&team) {
            return false;
        }
        self.teams.push(team);
        true
    }

    /// Link a match. Returns false if it was already linked.
    pub fn add_match(&mut self, id: MatchId) -> bool {
        if self.matches.contains(&id) {
            return false;
        }
        self.matches.push(id);
        true
    }
}
