//! List command implementation

use anyhow::{Context, Result};
use std::path::Path;

use challenger::session::format;
use challenger::Challenge;

use super::load_engine;

/// Filters for `list`
#[derive(Debug, Default)]
pub struct ListFilter {
    pub joined: bool,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Show challenges from the seed data
pub fn list_command(config_path: Option<&Path>, filter: &ListFilter, json: bool) -> Result<()> {
    let engine = load_engine(config_path)?;

    let query = filter.search.as_deref().unwrap_or("");
    let challenges: Vec<&Challenge> = engine
        .search(query, filter.category.as_deref())
        .into_iter()
        .filter(|c| !filter.joined || c.is_joined)
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&challenges)
            .context("Failed to serialize challenges")?;
        println!("{}", out);
        return Ok(());
    }

    if challenges.is_empty() {
        println!("No challenges found.");
        return Ok(());
    }

    println!("Challenges ({}):\n", challenges.len());
    let days = engine.settings().challenge_days;
    for challenge in challenges {
        println!("  {}", format::challenge_line(challenge, days));
        if let Some(meta) = engine.category(&challenge.category) {
            println!("    icon: {}", meta.icon);
        }
    }

    Ok(())
}
