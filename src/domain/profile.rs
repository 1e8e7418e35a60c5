use serde::{Deserialize, Serialize};

/// The user's profile
///
/// `level` and `rank` are display labels supplied by the caller and never
/// recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub total_score: u32,
    #[serde(default)]
    pub total_challenges: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub rank: u32,
}

impl UserProfile {
    /// Add points to the profile score and return the new total
    pub fn credit(&mut self, points: u32) -> u32 {
        self.total_score = self.total_score.saturating_add(points);
        self.total_score
    }
}
