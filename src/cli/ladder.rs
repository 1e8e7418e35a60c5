//! Ladder and rank command implementations

use anyhow::Result;
use std::path::Path;

use challenger::session::format;

use super::load_engine;

/// Print every rank tier
pub fn ladder_command(config_path: Option<&Path>) -> Result<()> {
    let engine = load_engine(config_path)?;
    for tier in engine.ladder().tiers() {
        println!("{}", format::tier_line(tier));
    }
    Ok(())
}

/// Print the tier a day count resolves to, and the next one
pub fn rank_command(config_path: Option<&Path>, days: u32) -> Result<()> {
    let engine = load_engine(config_path)?;
    println!("{}", format::tier_line(engine.rank_for_days(days)));

    match engine.next_tier(days) {
        Some((next, missing)) => println!("{} more days to {} {}", missing, next.emoji, next.name),
        None => println!("Top of the ladder"),
    }
    Ok(())
}
