use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Application configuration, derived from `CampusVote.toml` and
/// `CAMPUS_VOTE_*` environment variables. The embedding layer loads this
/// once and hands it to [`crate::Workspace`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    allow_reprocessing: bool,
    seed_demo_data: bool,
}

impl Config {
    /// Whether an approve/reject decision may overwrite a request that was
    /// already decided. On by default: the original UI let admins flip
    /// decisions freely, and the review screen relies on last-write-wins.
    pub fn allow_reprocessing(&self) -> bool {
        self.allow_reprocessing
    }

    /// Whether a workspace built from this config starts with the demo
    /// dataset.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }

    /// Load the configuration, layering the config file and the environment
    /// over the defaults.
    pub fn load() -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("CampusVote.toml"))
            .merge(Env::prefixed("CAMPUS_VOTE_"))
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_reprocessing: true,
            seed_demo_data: true,
        }
    }
}
