use log::info;

use crate::error::Result;

use super::credentials::Credentials;
use super::user::Identity;

/// Holds the at-most-one authenticated identity of a running instance.
///
/// The session is a plain value owned by the embedding context; it is not a
/// global, and it is not durable across restarts.
#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// A fresh session with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the credential rule and, on success, install the new identity,
    /// replacing any previous one. On failure the previous identity (if
    /// any) is left untouched.
    pub fn log_in(&mut self, credentials: &Credentials) -> Result<Identity> {
        let identity = credentials.authenticate()?;
        info!("{} signed in as {}", identity.id, identity.role);
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// The identity currently signed in, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Sign out. Does nothing if nobody is signed in.
    pub fn log_out(&mut self) {
        if let Some(identity) = self.identity.take() {
            info!("{} signed out", identity.id);
        }
    }
}
