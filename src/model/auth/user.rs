use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Different privilege levels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Role {
    Voter = 0,
    Admin = 1,
}

impl Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Voter => "voter",
                Self::Admin => "admin",
            }
        )
    }
}

/// An authenticated user of the demo, as held by the session.
///
/// The role is decided once, when the credential rule runs; nothing ever
/// re-derives it from the id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub role: Role,
    pub display_name: String,
}

impl Identity {
    /// Does this identity carry the given role?
    pub fn permits(&self, target: Role) -> bool {
        self.role == target
    }
}
