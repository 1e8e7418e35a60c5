//! Plain-text rendering of engine state

use crate::engine::DashboardSummary;
use crate::{Challenge, RankTier, UserProfile};

/// One-line summary of a challenge
pub fn challenge_line(challenge: &Challenge, challenge_days: u32) -> String {
    let joined = if challenge.is_joined { "joined" } else { "open" };
    let mut line = format!(
        "#{} [{}] {} ({}, {}) day {}/{} ({:.0}%) streak {} score {}",
        challenge.id,
        joined,
        challenge.title,
        challenge.category,
        challenge.difficulty,
        challenge.progress,
        challenge_days,
        challenge.progress_percent(challenge_days),
        challenge.streak,
        challenge.total_score,
    );
    if !challenge.badges.is_empty() {
        line.push(' ');
        line.push_str(&challenge.badges.concat());
    }
    line
}

/// Multi-line detail view of a challenge
pub fn challenge_details(challenge: &Challenge, challenge_days: u32) -> Vec<String> {
    let mut lines = vec![challenge_line(challenge, challenge_days)];
    lines.push(format!("    {}", challenge.description));
    lines.push(format!(
        "    {} participants, {} days left, {}% completion",
        challenge.participants, challenge.days_left, challenge.completion_rate
    ));
    if !challenge.tags.is_empty() {
        lines.push(format!("    tags: {}", challenge.tags.join(", ")));
    }
    lines
}

pub fn tier_line(tier: &RankTier) -> String {
    format!(
        "{} {:<10} from day {:>3}  {}",
        tier.emoji, tier.name, tier.min_days, tier.color
    )
}

pub fn profile_lines(profile: &UserProfile, tier: &RankTier) -> Vec<String> {
    vec![
        format!("{} <{}>", profile.name, profile.email),
        format!(
            "    score {}  challenges {}  streak {}  rank #{}",
            profile.total_score, profile.total_challenges, profile.streak, profile.rank
        ),
        format!(
            "    level {}  tier {} {}  badges {}",
            profile.level,
            tier.emoji,
            tier.name,
            profile.badges.concat()
        ),
    ]
}

pub fn dashboard_line(summary: &DashboardSummary) -> String {
    format!(
        "{} joined, total score {}, combined streak {}",
        summary.joined_count, summary.total_score, summary.total_streak
    )
}
