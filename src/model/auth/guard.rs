use super::session::Session;
use super::user::{Identity, Role};

/// The outcome of an access check: either the view renders, or the user is
/// bounced to the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectToLogin,
}

/// Decide whether `identity` may enter a view guarded by `required`.
///
/// No identity always redirects. A required role must match exactly: there
/// is no hierarchy, so an admin cannot enter voter-only views or vice
/// versa. A guard with no required role admits any authenticated identity.
pub fn authorize(identity: Option<&Identity>, required: Option<Role>) -> Access {
    match (identity, required) {
        (None, _) => Access::RedirectToLogin,
        (Some(identity), Some(role)) if !identity.permits(role) => Access::RedirectToLogin,
        _ => Access::Allow,
    }
}

/// Access policy of a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Anyone, signed in or not.
    Public,
    /// Any authenticated identity, regardless of role.
    Authenticated,
    /// Only identities with this exact role.
    Require(Role),
}

/// Every screen of the demo, mirroring the UI route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    AdminDashboard,
    AddCandidate,
    CandidateRequests,
    NewElection,
    VoterDashboard,
    CastVote,
    PendingElections,
    RequestCandidacy,
    Results,
}

impl Page {
    /// All pages, in route-table order.
    pub const ALL: [Page; 10] = [
        Page::Login,
        Page::AdminDashboard,
        Page::AddCandidate,
        Page::CandidateRequests,
        Page::NewElection,
        Page::VoterDashboard,
        Page::CastVote,
        Page::PendingElections,
        Page::RequestCandidacy,
        Page::Results,
    ];

    /// The path this page is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AdminDashboard => "/admin",
            Self::AddCandidate => "/admin/add-candidate",
            Self::CandidateRequests => "/admin/candidate-requests",
            Self::NewElection => "/admin/new-election",
            Self::VoterDashboard => "/voter",
            Self::CastVote => "/voter/cast-vote",
            Self::PendingElections => "/voter/pending-elections",
            Self::RequestCandidacy => "/voter/request-candidacy",
            Self::Results => "/results",
        }
    }

    /// Who may enter this page. Admin and voter areas are disjoint; the
    /// results page is shared by both roles.
    pub fn policy(self) -> Policy {
        match self {
            Self::Login => Policy::Public,
            Self::AdminDashboard
            | Self::AddCandidate
            | Self::CandidateRequests
            | Self::NewElection => Policy::Require(Role::Admin),
            Self::VoterDashboard
            | Self::CastVote
            | Self::PendingElections
            | Self::RequestCandidacy => Policy::Require(Role::Voter),
            Self::Results => Policy::Authenticated,
        }
    }

    /// Check this page's policy against the given session.
    pub fn authorize(self, session: &Session) -> Access {
        match self.policy() {
            Policy::Public => Access::Allow,
            Policy::Authenticated => authorize(session.current(), None),
            Policy::Require(role) => authorize(session.current(), Some(role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::auth::Credentials;

    #[test]
    fn no_identity_always_redirects() {
        assert_eq!(authorize(None, None), Access::RedirectToLogin);
        assert_eq!(authorize(None, Some(Role::Admin)), Access::RedirectToLogin);
        assert_eq!(authorize(None, Some(Role::Voter)), Access::RedirectToLogin);
    }

    #[test]
    fn required_role_must_match_exactly() {
        let voter = Identity::example_voter();
        let admin = Identity::example_admin();

        assert_eq!(
            authorize(Some(&voter), Some(Role::Admin)),
            Access::RedirectToLogin
        );
        assert_eq!(authorize(Some(&voter), Some(Role::Voter)), Access::Allow);
        assert_eq!(
            authorize(Some(&admin), Some(Role::Voter)),
            Access::RedirectToLogin
        );
        assert_eq!(authorize(Some(&admin), Some(Role::Admin)), Access::Allow);
    }

    #[test]
    fn bare_guard_admits_both_roles() {
        assert_eq!(authorize(Some(&Identity::example_voter()), None), Access::Allow);
        assert_eq!(authorize(Some(&Identity::example_admin()), None), Access::Allow);
    }

    #[test]
    fn page_policies_match_the_route_table() {
        for page in Page::ALL {
            let expected = match page.path() {
                "/login" => Policy::Public,
                path if path.starts_with("/admin") => Policy::Require(Role::Admin),
                path if path.starts_with("/voter") => Policy::Require(Role::Voter),
                _ => Policy::Authenticated,
            };
            assert_eq!(page.policy(), expected, "wrong policy for {}", page.path());
        }
    }

    #[test]
    fn signed_out_session_only_reaches_login() {
        let session = Session::new();
        for page in Page::ALL {
            let expected = if page == Page::Login {
                Access::Allow
            } else {
                Access::RedirectToLogin
            };
            assert_eq!(page.authorize(&session), expected, "at {}", page.path());
        }
    }

    #[test]
    fn voter_session_reaches_voter_pages_and_results() {
        let mut session = Session::new();
        session.log_in(&Credentials::example_voter()).unwrap();

        assert_eq!(Page::VoterDashboard.authorize(&session), Access::Allow);
        assert_eq!(Page::Results.authorize(&session), Access::Allow);
        assert_eq!(Page::Login.authorize(&session), Access::Allow);
        assert_eq!(
            Page::AdminDashboard.authorize(&session),
            Access::RedirectToLogin
        );
    }

    #[test]
    fn admin_session_reaches_admin_pages_and_results() {
        let mut session = Session::new();
        session.log_in(&Credentials::example_admin()).unwrap();

        assert_eq!(Page::CandidateRequests.authorize(&session), Access::Allow);
        assert_eq!(Page::Results.authorize(&session), Access::Allow);
        assert_eq!(Page::CastVote.authorize(&session), Access::RedirectToLogin);
    }
}
