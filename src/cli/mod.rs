//! CLI command implementations

pub mod init;
pub mod ladder;
pub mod list;
pub mod session;

use anyhow::{Context, Result};
use std::path::Path;

use challenger::config::Config;
use challenger::engine::ProgressEngine;

/// Load the config and build an engine from it
pub fn load_engine(config_path: Option<&Path>) -> Result<ProgressEngine> {
    let config = Config::load(config_path)?;
    ProgressEngine::from_config(&config).context("Invalid config")
}
