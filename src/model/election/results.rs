use serde::Serialize;

use super::{Election, ElectionCode, ElectionState};

/// One candidate's standing in the results view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStanding {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    pub votes: u32,
    /// Share of the total vote, rounded to one decimal as displayed.
    pub percentage: f64,
}

/// The computed results of a single election, ranked by vote count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionResults {
    pub code: ElectionCode,
    pub title: String,
    pub state: ElectionState,
    pub total_votes: u32,
    pub standings: Vec<CandidateStanding>,
}

impl ElectionResults {
    pub(crate) fn for_election(election: &Election) -> Self {
        let total_votes = election.total_votes();
        let mut standings: Vec<CandidateStanding> = election
            .ballot
            .iter()
            .map(|entry| CandidateStanding {
                name: entry.name.clone(),
                party: entry.party.clone(),
                votes: entry.votes,
                percentage: percentage(entry.votes, total_votes),
            })
            .collect();
        // Stable sort keeps ballot order between candidates on equal votes.
        standings.sort_by(|a, b| b.votes.cmp(&a.votes));
        Self {
            code: election.code.clone(),
            title: election.title.clone(),
            state: election.state,
            total_votes,
            standings,
        }
    }

    /// The leading candidate, if any votes have been cast at all.
    pub fn winner(&self) -> Option<&CandidateStanding> {
        self.standings.first().filter(|standing| standing.votes > 0)
    }
}

/// Percentage of `votes` out of `total`, rounded to one decimal.
fn percentage(votes: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(votes) * 1000.0 / f64::from(total)).round() / 10.0
}
