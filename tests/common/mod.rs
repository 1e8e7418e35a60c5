//! Shared fixtures for progression tests

#![allow(dead_code)]

use challenger::config::Settings;
use challenger::engine::ProgressEngine;
use challenger::{ChallengeId, Difficulty, NewChallenge, RankLadder, RankTier};

/// Three-tier ladder: 🌱 at 0, 🔥 at 3, 🥉 at 7
pub fn small_ladder() -> RankLadder {
    RankLadder::new(vec![
        RankTier::new("Sprout", "🌱", 0, "#22C55E"),
        RankTier::new("Passion", "🔥", 3, "#F97316"),
        RankTier::new("Bronze", "🥉", 7, "#D97706"),
    ])
    .expect("valid ladder")
}

/// Nine tiers at 0/3/7/14/21/28/30/50/100
pub fn full_ladder() -> RankLadder {
    let tiers = [
        ("Sprout", "🌱", 0),
        ("Passion", "🔥", 3),
        ("Bronze", "🥉", 7),
        ("Silver", "🥈", 14),
        ("Gold", "🥇", 21),
        ("Diamond", "💎", 28),
        ("Master", "👑", 30),
        ("Legend", "⚡", 50),
        ("Immortal", "🌟", 100),
    ];
    RankLadder::new(
        tiers
            .iter()
            .map(|(name, emoji, days)| RankTier::new(*name, *emoji, *days, "#000000"))
            .collect(),
    )
    .expect("valid ladder")
}

pub fn engine() -> ProgressEngine {
    ProgressEngine::new(small_ladder(), Settings::default())
}

pub fn new_input(title: &str) -> NewChallenge {
    NewChallenge::new(title, "Health", format!("{title} every day"), Difficulty::Medium)
}

/// Check in `times` times, clearing the day flag before each one
pub fn check_in_days(engine: &mut ProgressEngine, id: ChallengeId, times: u32) {
    for _ in 0..times {
        engine.clear_day_flags();
        assert!(engine.check_in(id).is_applied(), "check-in should apply");
    }
}
