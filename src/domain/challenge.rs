use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a challenge
pub type ChallengeId = u64;

/// How demanding a challenge is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable habit goal with a 30-day framing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub category: String,
    pub description: String,

    /// Number of people who joined
    pub participants: u32,

    /// Display only, never decremented
    pub days_left: u32,

    /// Successful check-ins so far
    #[serde(default)]
    pub progress: u32,

    #[serde(default)]
    pub is_joined: bool,

    /// Points per check-in. `None` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_score: Option<u32>,

    #[serde(default)]
    pub total_score: u32,

    #[serde(default)]
    pub streak: u32,

    /// Unlocked rank emojis in unlock order
    #[serde(default)]
    pub badges: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Informational percentage, not derived here
    #[serde(default)]
    pub completion_rate: u32,

    #[serde(default)]
    pub trending: bool,
}

impl Challenge {
    /// Points awarded per check-in, using `fallback` when none is set
    pub fn effective_daily_score(&self, fallback: u32) -> u32 {
        self.daily_score.unwrap_or(fallback)
    }

    pub fn has_badge(&self, emoji: &str) -> bool {
        self.badges.iter().any(|b| b == emoji)
    }

    /// Append a badge unless already present. Returns true if it was added.
    pub(crate) fn push_badge(&mut self, emoji: &str) -> bool {
        if self.has_badge(emoji) {
            return false;
        }
        self.badges.push(emoji.to_string());
        true
    }

    /// Progress as a percentage of `challenge_days` (not clamped)
    pub fn progress_percent(&self, challenge_days: u32) -> f32 {
        if challenge_days == 0 {
            return 0.0;
        }
        (self.progress as f32 / challenge_days as f32) * 100.0
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Input for creating a challenge
///
/// Title and description are expected to be validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewChallenge {
    pub title: String,
    pub category: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewChallenge {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: description.into(),
            difficulty,
            tags: Vec::new(),
        }
    }

    /// Add a tag, ignoring empty and duplicate ones
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Tags with duplicates removed, first occurrence wins
    pub(crate) fn unique_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}
