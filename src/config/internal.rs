//! Built-in defaults embedded at compile-time
//!
//! The rank ladder, categories, seed profile and seed challenges ship in
//! `assets/defaults.toml`. User configs only need to override what they change.

use once_cell::sync::OnceCell;

use super::Config;

/// Embedded defaults TOML content (compile-time)
pub const INTERNAL_DEFAULTS_TOML: &str = include_str!("../../assets/defaults.toml");

static INTERNAL_DEFAULTS: OnceCell<Config> = OnceCell::new();

/// Parse the embedded defaults once and hand out the cached copy
pub(super) fn internal_defaults() -> Result<&'static Config, toml::de::Error> {
    INTERNAL_DEFAULTS.get_or_try_init(|| toml::from_str(INTERNAL_DEFAULTS_TOML))
}

impl Config {
    /// Fill sections missing from a user config with the built-in ones.
    ///
    /// Returns true if anything was filled in.
    pub(super) fn merge_defaults(&mut self, defaults: &Config) -> bool {
        let mut changed = false;

        if self.rank.is_empty() {
            self.rank = defaults.rank.clone();
            changed = true;
        }

        if self.category.is_empty() {
            self.category = defaults.category.clone();
            changed = true;
        }

        if self.profile.is_none() {
            self.profile = defaults.profile.clone();
            changed = true;
        }

        // An explicit empty challenge list is kept as-is
        if self.challenge.is_none() {
            self.challenge = defaults.challenge.clone();
            changed = true;
        }

        changed
    }
}
