use sqlx::types::chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid candidate")]
pub struct InvalidCandidate;

/// One of the two fixed voting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Tabs,
    Spaces,
}

impl Candidate {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Candidate::Tabs => "TABS",
            Candidate::Spaces => "SPACES",
        }
    }

    /// Parses the value of a `CHAR(6)` column, which comes back padded with
    /// trailing spaces.
    pub fn from_column(value: &str) -> Result<Self, InvalidCandidate> {
        value.trim_end().parse()
    }
}

impl FromStr for Candidate {
    type Err = InvalidCandidate;

    // Exact match only: wire values are never trimmed or case-folded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TABS" => Ok(Candidate::Tabs),
            "SPACES" => Ok(Candidate::Spaces),
            _ => Err(InvalidCandidate),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Vote {
    pub vote_id: i64,
    pub time_cast: DateTime<Utc>,
    /// Stored fixed-width; trim before presenting.
    pub candidate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_candidates_parse() {
        assert_eq!("TABS".parse::<Candidate>().unwrap(), Candidate::Tabs);
        assert_eq!("SPACES".parse::<Candidate>().unwrap(), Candidate::Spaces);
    }

    #[test]
    fn anything_else_is_rejected() {
        for input in ["", "BOGUS", "tabs", "Spaces", " TABS", "TABS  ", "TABSX"] {
            assert!(input.parse::<Candidate>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn column_values_are_unpadded() {
        assert_eq!(Candidate::from_column("TABS  ").unwrap(), Candidate::Tabs);
        assert_eq!(Candidate::from_column("SPACES").unwrap(), Candidate::Spaces);
        assert!(Candidate::from_column("BOGUS ").is_err());
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Candidate::Tabs.to_string(), "TABS");
        assert_eq!(Candidate::Spaces.as_str(), "SPACES");
    }
}
