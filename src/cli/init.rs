//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use challenger::config::Config;

/// Write the default config to `path`, or ~/.challenger/config.toml
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::global_config_path(),
    };

    if !Config::write_default_file(&config_path, force)? {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    info!("Wrote default config to {}", config_path.display());
    println!("Created {}", config_path.display());
    Ok(())
}
