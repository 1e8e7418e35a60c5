//! Settings configuration types

use serde::{Deserialize, Serialize};

/// Scoring settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Points per check-in for challenges that carry no daily score of their own
    #[serde(default = "default_daily_score")]
    pub daily_score: u32,

    /// Points credited to the profile on every check-in.
    /// Independent of the challenge's own daily score.
    #[serde(default = "default_profile_points")]
    pub profile_points_per_check_in: u32,

    /// Length of a challenge in days (used for new challenges and progress display)
    #[serde(default = "default_challenge_days")]
    pub challenge_days: u32,
}

fn default_daily_score() -> u32 {
    50
}

fn default_profile_points() -> u32 {
    50
}

fn default_challenge_days() -> u32 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_score: default_daily_score(),
            profile_points_per_check_in: default_profile_points(),
            challenge_days: default_challenge_days(),
        }
    }
}
