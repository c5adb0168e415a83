use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result, ValidationErrors};

/// A candidate profile, as registered from the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub address: String,
    pub mobile: String,
}

impl CandidateProfile {
    /// Check every required field, reporting all failures at once.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(FieldError::required(
            "name",
            &self.name,
            "Candidate name is required",
        ));
        errors.extend(FieldError::required(
            "address",
            &self.address,
            "Address is required",
        ));
        errors.extend(FieldError::required(
            "mobile",
            &self.mobile,
            "Mobile number is required",
        ));
        errors
    }
}

/// Roster of candidate profiles, in registration order.
#[derive(Debug, Default)]
pub struct CandidateRoster {
    profiles: Vec<CandidateProfile>,
}

impl CandidateRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a new profile.
    pub fn add(&mut self, profile: CandidateProfile) -> Result<()> {
        ValidationErrors::into_result(profile.validate())?;
        info!("Candidate {} registered", profile.name);
        self.profiles.push(profile);
        Ok(())
    }

    /// Every registered profile, in registration order.
    pub fn all(&self) -> &[CandidateProfile] {
        &self.profiles
    }

    /// Number of registered profiles, for the dashboard stats.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl CandidateProfile {
        pub fn example() -> Self {
            Self {
                name: "Ray Fong".to_string(),
                address: "12 College Walk, Halls Block B".to_string(),
                mobile: "+1-555-0177".to_string(),
            }
        }
    }
}
