//! Final score of a match
//!
//! A score is written as two non-negative integers separated by a hyphen,
//! home side first (`"3-1"`). Whitespace anywhere in the input is ignored,
//! so `"2 - 1"` is accepted. Leading zeros are rejected except for the
//! literal `0`, and so is any side above [`MAX_COUNT`].

use super::MAX_COUNT;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Goals scored by the home and away sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Score {
    /// Goals scored by the home team
    pub home: u32,
    /// Goals scored by the away team
    pub away: u32,
}

impl Score {
    /// Create a score from goal counts
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Parse a score string such as `"3-1"`
    pub fn parse(input: &str) -> Result<Self> {
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = || CoreError::InvalidScoreFormat(input.to_string());

        let (home, away) = stripped.split_once('-').ok_or_else(invalid)?;
        let home = parse_goals(home).ok_or_else(invalid)?;
        let away = parse_goals(away).ok_or_else(invalid)?;

        Ok(Self { home, away })
    }

    /// True when both sides scored the same number of goals
    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }

    /// Compare home goals against away goals
    pub fn home_ordering(&self) -> Ordering {
        self.home.cmp(&self.away)
    }
}

/// `0` or a digit run without a leading zero, at most `MAX_COUNT`
fn parse_goals(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok().filter(|goals| *goals <= MAX_COUNT)
}

impl FromStr for Score {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Score {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Score> for String {
    fn from(score: Score) -> Self {
        score.to_string()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}
