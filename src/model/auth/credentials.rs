use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::user::{Identity, Role};

/// The fixed demo credentials. There is no credential store and the rule is
/// not user-editable.
pub const ADMIN_ID: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const VOTER_ID_PREFIX: &str = "voter";
pub const VOTER_PASSWORD: &str = "voter123";

/// Raw login credentials, received from a user. These are checked against
/// the fixed rule and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }

    /// Apply the credential rule, producing the identity it grants.
    ///
    /// The admin id must match exactly; any id with the voter prefix signs
    /// in with the shared voter password. Everything else is rejected.
    pub fn authenticate(&self) -> Result<Identity> {
        if self.id == ADMIN_ID && self.password == ADMIN_PASSWORD {
            Ok(Identity {
                id: ADMIN_ID.to_string(),
                role: Role::Admin,
                display_name: "Administrator".to_string(),
            })
        } else if self.id.starts_with(VOTER_ID_PREFIX) && self.password == VOTER_PASSWORD {
            Ok(Identity {
                id: self.id.clone(),
                role: Role::Voter,
                display_name: format!("Voter {}", self.id),
            })
        } else {
            warn!("Rejected sign-in attempt for id {:?}", self.id);
            Err(Error::Unauthorized(
                "No user found with the provided id and password combination.".to_string(),
            ))
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Credentials {
        pub fn example_admin() -> Self {
            Self::new("admin", "admin123")
        }

        pub fn example_voter() -> Self {
            Self::new("voter7", "voter123")
        }

        pub fn example_invalid() -> Self {
            Self::new("admin", "hunter2")
        }
    }
}
