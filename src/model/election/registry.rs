use log::info;

use crate::error::{Error, Result, ValidationErrors};

use super::{Election, ElectionResults, ElectionSpec, ElectionState};

/// In-memory store of elections and their tallies, in creation order.
#[derive(Debug, Default)]
pub struct ElectionRegistry {
    elections: Vec<Election>,
}

impl ElectionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from existing elections (e.g. the demo seed
    /// dataset).
    pub fn from_elections(elections: Vec<Election>) -> Self {
        Self { elections }
    }

    /// Validate a new-election form and add the resulting election.
    pub fn create(&mut self, spec: ElectionSpec) -> Result<Election> {
        ValidationErrors::into_result(spec.validate())?;

        // Check code uniqueness.
        if self.get(&spec.election_id).is_some() {
            return Err(Error::BadRequest(format!(
                "Election code already in use: {}",
                spec.election_id
            )));
        }

        let election = spec.into_election();
        info!(
            "Election {} created with {} candidates",
            election.code,
            election.ballot.len()
        );
        self.elections.push(election.clone());
        Ok(election)
    }

    /// Look up an election by code.
    pub fn get(&self, code: &str) -> Option<&Election> {
        self.elections.iter().find(|election| election.code == code)
    }

    fn get_mut(&mut self, code: &str) -> Result<&mut Election> {
        self.elections
            .iter_mut()
            .find(|election| election.code == code)
            .ok_or_else(|| Error::not_found(format!("Election with code '{code}'")))
    }

    /// Every election, in creation order.
    pub fn all(&self) -> &[Election] {
        &self.elections
    }

    /// Elections currently in the given state.
    pub fn in_state(&self, state: ElectionState) -> impl Iterator<Item = &Election> {
        self.elections
            .iter()
            .filter(move |election| election.state == state)
    }

    /// Elections shown on the voter's "pending elections" screen:
    /// registration still open, or scheduled but not yet started.
    pub fn pending(&self) -> impl Iterator<Item = &Election> {
        self.elections.iter().filter(|election| {
            matches!(
                election.state,
                ElectionState::Registration | ElectionState::Upcoming
            )
        })
    }

    /// Open an election for voting.
    pub fn open(&mut self, code: &str) -> Result<&Election> {
        let election = self.get_mut(code)?;
        match election.state {
            ElectionState::Registration | ElectionState::Upcoming => {
                election.state = ElectionState::Ongoing;
                info!("Election {code} opened for voting");
                Ok(election)
            }
            state => Err(Error::BadRequest(format!(
                "Election '{code}' cannot open from the {state} state"
            ))),
        }
    }

    /// Close an ongoing election, freezing its tallies.
    pub fn close(&mut self, code: &str) -> Result<&Election> {
        let election = self.get_mut(code)?;
        match election.state {
            ElectionState::Ongoing => {
                election.state = ElectionState::Completed;
                info!("Election {code} closed");
                Ok(election)
            }
            state => Err(Error::BadRequest(format!(
                "Election '{code}' cannot close from the {state} state"
            ))),
        }
    }

    /// Record one vote for the named candidate and return their new tally.
    ///
    /// Only ongoing elections accept votes. No record of the voter is kept.
    pub fn cast_vote(&mut self, code: &str, candidate: &str) -> Result<u32> {
        let election = self.get_mut(code)?;
        if election.state != ElectionState::Ongoing {
            return Err(Error::BadRequest(format!(
                "Election '{code}' is not open for voting"
            )));
        }
        let entry = election
            .ballot
            .iter_mut()
            .find(|entry| entry.name == candidate)
            .ok_or_else(|| {
                Error::not_found(format!("Candidate '{candidate}' in election '{code}'"))
            })?;
        entry.votes += 1;
        info!("Vote recorded for {candidate} in {code}");
        Ok(entry.votes)
    }

    /// Results view for the given election.
    pub fn results(&self, code: &str) -> Result<ElectionResults> {
        self.get(code)
            .map(Election::results)
            .ok_or_else(|| Error::not_found(format!("Election with code '{code}'")))
    }

    /// Votes cast across all elections.
    pub fn total_votes(&self) -> u32 {
        self.elections.iter().map(Election::total_votes).sum()
    }
}
