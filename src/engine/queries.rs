//! Read-side queries over engine state

use super::manager::ProgressEngine;
use crate::{Challenge, RankTier};

/// Totals across joined challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub joined_count: usize,
    pub total_score: u32,
    pub total_streak: u32,
}

impl ProgressEngine {
    pub fn joined(&self) -> Vec<&Challenge> {
        self.challenges.iter().filter(|c| c.is_joined).collect()
    }

    pub fn dashboard(&self) -> DashboardSummary {
        self.challenges
            .iter()
            .filter(|c| c.is_joined)
            .fold(DashboardSummary::default(), |mut acc, c| {
                acc.joined_count += 1;
                acc.total_score = acc.total_score.saturating_add(c.total_score);
                acc.total_streak = acc.total_streak.saturating_add(c.streak);
                acc
            })
    }

    /// Case-insensitive match on title or description, optionally within one category
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|c| c.matches_query(query))
            .filter(|c| category.is_none_or(|cat| c.category == cat))
            .collect()
    }

    pub fn trending(&self) -> Vec<&Challenge> {
        self.challenges.iter().filter(|c| c.trending).collect()
    }

    /// Most participants first
    pub fn popular(&self) -> Vec<&Challenge> {
        let mut sorted: Vec<&Challenge> = self.challenges.iter().collect();
        sorted.sort_by(|a, b| b.participants.cmp(&a.participants));
        sorted
    }

    /// Progress of a challenge as a percentage of the configured length
    pub fn progress_percent(&self, challenge: &Challenge) -> f32 {
        challenge.progress_percent(self.settings.challenge_days)
    }

    /// Tier shown on the profile, derived from the number of challenges taken
    pub fn profile_tier(&self) -> &RankTier {
        self.ladder
            .for_days(self.profile.total_challenges.saturating_mul(10))
    }

    /// The tier after `days` and how many days are still missing
    pub fn next_tier(&self, days: u32) -> Option<(&RankTier, u32)> {
        self.ladder.next_after(days)
    }
}
