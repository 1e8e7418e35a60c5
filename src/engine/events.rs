//! Events produced by progression operations

use std::fmt;

use crate::{ChallengeId, RankTier};

/// Something that happened to a challenge or the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    ChallengeCreated {
        id: ChallengeId,
    },
    Joined {
        id: ChallengeId,
        participants: u32,
    },
    CheckedIn {
        id: ChallengeId,
        progress: u32,
        streak: u32,
        total_score: u32,
    },
    BadgeUnlocked {
        id: ChallengeId,
        tier: RankTier,
    },
    ProfileScored {
        amount: u32,
        total: u32,
    },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChallengeCreated { id } => write!(f, "Created challenge #{id}"),
            Self::Joined { id, participants } => {
                write!(f, "Joined #{id} ({participants} participants)")
            }
            Self::CheckedIn {
                id,
                progress,
                streak,
                total_score,
            } => write!(
                f,
                "Checked in #{id}: day {progress}, streak {streak}, score {total_score}"
            ),
            Self::BadgeUnlocked { id, tier } => {
                write!(f, "New badge on #{id}: {} {}", tier.emoji, tier.name)
            }
            Self::ProfileScored { amount, total } => {
                write!(f, "Profile +{amount} points (total {total})")
            }
        }
    }
}

/// Result of a check-in attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The check-in was applied; events in the order they happened
    Applied(Vec<ProgressEvent>),
    /// Already checked in today, nothing changed
    AlreadyCheckedIn,
    /// No challenge with that id, nothing changed
    NotFound,
}

impl CheckInOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn events(&self) -> &[ProgressEvent] {
        match self {
            Self::Applied(events) => events.as_slice(),
            _ => &[],
        }
    }

    /// Tiers whose badge was unlocked by this check-in
    pub fn unlocked_badges(&self) -> Vec<&RankTier> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::BadgeUnlocked { tier, .. } => Some(tier),
                _ => None,
            })
            .collect()
    }
}
