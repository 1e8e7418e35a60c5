//! Core domain types for Challenger

mod category;
mod challenge;
mod profile;
mod rank;

pub use category::CategoryMeta;
pub use challenge::{Challenge, ChallengeId, Difficulty, NewChallenge};
pub use profile::UserProfile;
pub use rank::{LadderError, RankLadder, RankTier};
