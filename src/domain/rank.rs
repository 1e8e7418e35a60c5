//! Rank ladder
//!
//! Ordered thresholds mapping cumulative check-in days to a named badge tier.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rank tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    pub name: String,
    pub emoji: String,
    pub min_days: u32,
    pub color: String,
}

impl RankTier {
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        min_days: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            min_days,
            color: color.into(),
        }
    }
}

/// Reasons a ladder is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("rank ladder has no tiers")]
    Empty,

    #[error("first rank tier '{name}' must start at 0 days, not {min_days}")]
    FirstTierNotZero { name: String, min_days: u32 },

    #[error("rank tier '{name}' ({min_days} days) must be above the previous tier ({previous} days)")]
    NotAscending {
        name: String,
        min_days: u32,
        previous: u32,
    },
}

/// Validated rank ladder (sorted strictly ascending, first tier at 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankLadder {
    tiers: Vec<RankTier>,
}

impl RankLadder {
    pub fn new(tiers: Vec<RankTier>) -> Result<Self, LadderError> {
        let first = tiers.first().ok_or(LadderError::Empty)?;
        if first.min_days != 0 {
            return Err(LadderError::FirstTierNotZero {
                name: first.name.clone(),
                min_days: first.min_days,
            });
        }

        for pair in tiers.windows(2) {
            if pair[1].min_days <= pair[0].min_days {
                return Err(LadderError::NotAscending {
                    name: pair[1].name.clone(),
                    min_days: pair[1].min_days,
                    previous: pair[0].min_days,
                });
            }
        }

        Ok(Self { tiers })
    }

    /// Tier with the greatest threshold not exceeding `days`
    pub fn for_days(&self, days: u32) -> &RankTier {
        self.tiers
            .iter()
            .rev()
            .find(|t| days >= t.min_days)
            .unwrap_or(self.lowest())
    }

    /// The tier after the one `days` resolves to, with the days still missing
    pub fn next_after(&self, days: u32) -> Option<(&RankTier, u32)> {
        if days >= self.highest().min_days {
            return None;
        }
        self.tiers
            .iter()
            .find(|t| t.min_days > days)
            .map(|t| (t, t.min_days - days))
    }

    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    pub fn lowest(&self) -> &RankTier {
        &self.tiers[0]
    }

    pub fn highest(&self) -> &RankTier {
        &self.tiers[self.tiers.len() - 1]
    }
}
