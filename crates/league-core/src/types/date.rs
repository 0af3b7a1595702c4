//! Calendar date of a match in `YYYY-MM-DD` form

use crate::error::{CoreError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date a match is played on
///
/// The season a match counts towards is the year of its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatchDate(NaiveDate);

impl MatchDate {
    /// Parse a strict `YYYY-MM-DD` date
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidDateFormat(input.to_string());

        // chrono alone accepts single-digit months and days
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Season derived from the date (its year)
    pub fn season(&self) -> i32 {
        self.0.year()
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for MatchDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for MatchDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MatchDate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MatchDate> for String {
    fn from(date: MatchDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for MatchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
