use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

use super::{BallotEntry, Election, ElectionState};

/// Ballot size limits enforced by the new-election form.
pub const MIN_CANDIDATES: usize = 2;
pub const MAX_CANDIDATES: usize = 10;

/// The admin "new election" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSpec {
    pub election_id: String,
    pub election_type: String,
    pub election_date: Option<NaiveDate>,
    pub candidates: Vec<String>,
}

impl ElectionSpec {
    /// Check the form, reporting all failures at once.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(FieldError::required(
            "electionId",
            &self.election_id,
            "Election ID is required",
        ));
        errors.extend(FieldError::required(
            "electionType",
            &self.election_type,
            "Election type is required",
        ));
        if self.election_date.is_none() {
            errors.push(FieldError::new("electionDate", "Election date is required"));
        }
        if self.candidates.len() < MIN_CANDIDATES {
            errors.push(FieldError::new(
                "candidates",
                format!("At least {MIN_CANDIDATES} candidates are required"),
            ));
        } else if self.candidates.len() > MAX_CANDIDATES {
            errors.push(FieldError::new(
                "candidates",
                format!("At most {MAX_CANDIDATES} candidates are allowed"),
            ));
        }
        for (index, name) in self.candidates.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(FieldError::new(
                    "candidates",
                    format!("Candidate {} name is required", index + 1),
                ));
            }
        }
        errors
    }

    /// Convert this spec into an upcoming election with an empty tally.
    ///
    /// The form collects no separate title; like the seeded elections, the
    /// title is the election type followed by the year.
    pub(crate) fn into_election(self) -> Election {
        // Validation has run by the time we get here, so the date is present.
        let scheduled_for = self.election_date.unwrap_or_default();
        Election {
            title: format!("{} {}", self.election_type, scheduled_for.year()),
            code: self.election_id,
            kind: self.election_type,
            description: None,
            scheduled_for,
            state: ElectionState::Upcoming,
            ballot: self.candidates.into_iter().map(BallotEntry::new).collect(),
        }
    }
}
