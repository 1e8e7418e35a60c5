//! Configuration loading and management

mod internal;
mod io;
mod settings;

pub use internal::INTERNAL_DEFAULTS_TOML;
pub use settings::Settings;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{CategoryMeta, Challenge, LadderError, RankLadder, RankTier, UserProfile};

/// Main configuration structure
///
/// Seed data and the rank ladder are configuration, loaded once per session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Scoring settings
    #[serde(default)]
    pub settings: Settings,

    /// Rank ladder, ascending by `min_days`
    #[serde(default)]
    pub rank: Vec<RankTier>,

    /// Category display metadata, keyed by category name
    #[serde(default)]
    pub category: BTreeMap<String, CategoryMeta>,

    /// The session's user profile
    #[serde(default)]
    pub profile: Option<UserProfile>,

    /// Pre-seeded challenges
    #[serde(default)]
    pub challenge: Option<Vec<Challenge>>,
}

impl Config {
    /// Create a config from the embedded built-in defaults
    pub fn with_defaults() -> Result<Self> {
        let defaults =
            internal::internal_defaults().context("Failed to parse built-in default config")?;
        Ok(defaults.clone())
    }

    /// Parse a config from TOML text and fill missing sections from the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).context("Failed to parse config")?;
        let defaults =
            internal::internal_defaults().context("Failed to parse built-in default config")?;
        if config.merge_defaults(defaults) {
            tracing::debug!("Filled missing config sections from built-in defaults");
        }
        Ok(config)
    }

    /// Build the validated rank ladder
    pub fn ladder(&self) -> Result<RankLadder, LadderError> {
        RankLadder::new(self.rank.clone())
    }

    pub fn seed_profile(&self) -> UserProfile {
        self.profile.clone().unwrap_or_default()
    }

    pub fn seed_challenges(&self) -> Vec<Challenge> {
        self.challenge.clone().unwrap_or_default()
    }
}
