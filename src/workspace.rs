use serde::Serialize;

use crate::config::Config;
use crate::model::auth::Session;
use crate::model::candidacy::CandidacyRegistry;
use crate::model::candidate::CandidateRoster;
use crate::model::election::{ElectionRegistry, ElectionState};
use crate::model::student::StudentDirectory;
use crate::seed;

/// Everything a running instance of the demo owns: the configuration, the
/// active session, and the registries behind each screen.
///
/// The UI layer holds one of these and passes it wherever state is needed;
/// there is no process-wide global.
#[derive(Debug)]
pub struct Workspace {
    pub config: Config,
    pub session: Session,
    pub candidacy: CandidacyRegistry,
    pub elections: ElectionRegistry,
    pub roster: CandidateRoster,
    pub students: StudentDirectory,
}

impl Workspace {
    /// An empty workspace: nobody signed in, no data.
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::new(),
            candidacy: CandidacyRegistry::new(&config),
            elections: ElectionRegistry::new(),
            roster: CandidateRoster::new(),
            students: StudentDirectory::new(),
            config,
        }
    }

    /// A workspace preloaded with the demo dataset.
    pub fn seeded(config: Config) -> Self {
        Self {
            session: Session::new(),
            candidacy: CandidacyRegistry::from_requests(seed::candidacy_requests(), &config),
            elections: ElectionRegistry::from_elections(seed::elections()),
            roster: CandidateRoster::new(),
            students: StudentDirectory::new(),
            config,
        }
    }

    /// Build from configuration: seeded with the demo dataset unless that
    /// is switched off.
    pub fn from_config(config: Config) -> Self {
        if config.seed_demo_data() {
            Self::seeded(config)
        } else {
            Self::new(config)
        }
    }

    /// The stat cards across the top of the admin dashboard.
    pub fn admin_summary(&self) -> AdminSummary {
        AdminSummary {
            total_candidates: self.roster.len(),
            active_elections: self.elections.in_state(ElectionState::Ongoing).count(),
            total_votes: self.elections.total_votes(),
            pending_elections: self.elections.pending().count(),
        }
    }

    /// The stat cards across the top of the voter dashboard.
    pub fn voter_summary(&self) -> VoterSummary {
        VoterSummary {
            available_elections: self.elections.in_state(ElectionState::Ongoing).count(),
            pending_elections: self.elections.pending().count(),
        }
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_candidates: usize,
    pub active_elections: usize,
    pub total_votes: u32,
    pub pending_elections: usize,
}

/// Headline numbers for the voter dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterSummary {
    pub available_elections: usize,
    pub pending_elections: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;
    use crate::model::auth::{Access, Credentials, Page};
    use crate::model::candidacy::{CandidacySpec, RequestStatus};

    #[test]
    fn full_candidacy_round_trip() {
        let mut workspace = Workspace::seeded(Config::default());

        // A voter signs in and applies.
        workspace
            .session
            .log_in(&Credentials::example_voter())
            .unwrap();
        assert_eq!(
            Page::RequestCandidacy.authorize(&workspace.session),
            Access::Allow
        );
        let id = workspace
            .candidacy
            .submit(CandidacySpec::example())
            .unwrap()
            .id;
        // After the three seeded requests.
        assert_eq!(id, 4);

        // The voter cannot reach the review screen.
        assert_eq!(
            Page::CandidateRequests.authorize(&workspace.session),
            Access::RedirectToLogin
        );

        // An admin takes over and approves.
        workspace.session.log_out();
        workspace
            .session
            .log_in(&Credentials::example_admin())
            .unwrap();
        assert_eq!(
            Page::CandidateRequests.authorize(&workspace.session),
            Access::Allow
        );
        let request = workspace.candidacy.approve(id).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
    }

    #[test]
    fn summaries_reflect_the_seed_dataset() {
        let workspace = Workspace::seeded(Config::default());

        let summary = workspace.admin_summary();
        assert_eq!(summary.total_votes, 1247 + 892 + 756);
        assert_eq!(summary.active_elections, 1);
        assert_eq!(summary.pending_elections, 2);
        assert_eq!(summary.total_candidates, 0);

        let summary = workspace.voter_summary();
        assert_eq!(summary.available_elections, 1);
        assert_eq!(summary.pending_elections, 2);
    }

    #[test]
    fn voting_in_the_ongoing_election() {
        let mut workspace = Workspace::seeded(Config::default());

        workspace.elections.cast_vote("GOV2024", "Ann Parker").unwrap();
        assert_eq!(
            workspace.elections.get("GOV2024").unwrap().total_votes(),
            757
        );

        // Completed elections no longer accept votes.
        let error = workspace
            .elections
            .cast_vote("PRES2024", "John Smith")
            .unwrap_err();
        assert!(matches!(error, Error::BadRequest(_)));
    }

    #[test]
    fn from_config_respects_the_seed_switch() {
        let workspace = Workspace::from_config(Config::default());
        assert_eq!(workspace.candidacy.all().len(), 3);
        assert_eq!(workspace.elections.all().len(), 5);

        let workspace = Workspace::from_config(Config::example_unseeded());
        assert!(workspace.candidacy.all().is_empty());
        assert!(workspace.elections.all().is_empty());
    }
}
