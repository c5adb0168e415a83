use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod registry;
mod spec;

pub use registry::{CandidacyRegistry, RequestCounts};
pub use spec::CandidacySpec;

/// Our candidacy request ids are integers, unique and strictly increasing
/// in submission order.
pub type RequestId = u32;

/// States in the candidacy request lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted, awaiting an admin decision.
    Pending,
    /// Accepted by an admin.
    Approved,
    /// Declined by an admin.
    Rejected,
}

impl Display for RequestStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Pending => "pending",
                Self::Approved => "approved",
                Self::Rejected => "rejected",
            }
        )
    }
}

/// A candidacy application, as reviewed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidacyRequest {
    pub id: RequestId,
    pub full_name: String,
    pub student_id: String,
    pub email: String,
    pub phone: String,
    pub election_type: String,
    pub party: String,
    pub experience: String,
    pub manifesto: String,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
}
