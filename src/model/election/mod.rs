use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod registry;
mod results;
mod spec;

pub use registry::ElectionRegistry;
pub use results::{CandidateStanding, ElectionResults};
pub use spec::{ElectionSpec, MAX_CANDIDATES, MIN_CANDIDATES};

/// Our election codes are short strings like `PRES2024`.
pub type ElectionCode = String;
/// Our candidate ids (names) are strings.
pub type CandidateId = String;

/// States in the election lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionState {
    /// Candidate registration is open; the ballot is not final.
    Registration,
    /// Scheduled and visible to voters, not yet open for votes.
    Upcoming,
    /// Open for votes.
    Ongoing,
    /// Closed; tallies are final.
    Completed,
}

impl Display for ElectionState {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Registration => "registration",
                Self::Upcoming => "upcoming",
                Self::Ongoing => "ongoing",
                Self::Completed => "completed",
            }
        )
    }
}

/// A single ballot line: a candidate and their running tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotEntry {
    pub name: CandidateId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub votes: u32,
}

impl BallotEntry {
    /// A fresh ballot line with no votes.
    pub fn new(name: impl Into<CandidateId>) -> Self {
        Self {
            name: name.into(),
            party: None,
            experience: None,
            votes: 0,
        }
    }
}

/// An election and its ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub code: ElectionCode,
    pub title: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scheduled_for: NaiveDate,
    pub state: ElectionState,
    pub ballot: Vec<BallotEntry>,
}

impl Election {
    /// Total votes cast across the ballot.
    pub fn total_votes(&self) -> u32 {
        self.ballot.iter().map(|entry| entry.votes).sum()
    }

    /// Compute the current results view for this election.
    pub fn results(&self) -> ElectionResults {
        ElectionResults::for_election(self)
    }
}
