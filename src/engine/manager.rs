//! Progression engine - core challenge logic
//!
//! Owns the challenge collection, the user profile and the day flags.
//! All mutation goes through `&mut self`; there is exactly one writer.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::{debug, info};

use super::day::DayFlags;
use super::events::{CheckInOutcome, ProgressEvent};
use crate::config::{Config, Settings};
use crate::{
    CategoryMeta, Challenge, ChallengeId, LadderError, NewChallenge, RankLadder, RankTier,
    UserProfile,
};

/// Origin label for challenges created through `create_challenge`
pub const CREATED_BY_USER: &str = "user";

/// Reasons an engine cannot be built from its seed data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Ladder(#[from] LadderError),

    #[error("challenge id {0} is used by more than one seeded challenge")]
    DuplicateChallengeId(ChallengeId),
}

/// Main engine for challenge progression
#[derive(Debug, Clone)]
pub struct ProgressEngine {
    pub(super) challenges: Vec<Challenge>,
    pub(super) profile: UserProfile,
    pub(super) ladder: RankLadder,
    pub(super) categories: BTreeMap<String, CategoryMeta>,
    pub(super) settings: Settings,
    day: DayFlags,
    next_id: ChallengeId,
    /// Events not yet taken by the caller, oldest first
    journal: Vec<ProgressEvent>,
}

impl ProgressEngine {
    /// Create an empty engine with the given ladder and settings
    pub fn new(ladder: RankLadder, settings: Settings) -> Self {
        Self {
            challenges: Vec::new(),
            profile: UserProfile::default(),
            ladder,
            categories: BTreeMap::new(),
            settings,
            day: DayFlags::default(),
            next_id: 1,
            journal: Vec::new(),
        }
    }

    /// Build an engine from the ladder, settings and seed data in `config`
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let engine = Self::new(config.ladder()?, config.settings.clone())
            .with_challenges(config.seed_challenges())?
            .with_profile(config.seed_profile())
            .with_categories(config.category.clone());
        Ok(engine)
    }

    /// Seed the collection. Every id must be unique.
    pub fn with_challenges(mut self, challenges: Vec<Challenge>) -> Result<Self, SetupError> {
        let mut seen = HashSet::with_capacity(challenges.len());
        if let Some(dup) = challenges.iter().find(|c| !seen.insert(c.id)) {
            return Err(SetupError::DuplicateChallengeId(dup.id));
        }

        if let Some(max_id) = challenges.iter().map(|c| c.id).max() {
            self.next_id = self.next_id.max(max_id.saturating_add(1));
        }
        self.challenges = challenges;
        Ok(self)
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_categories(mut self, categories: BTreeMap<String, CategoryMeta>) -> Self {
        self.categories = categories;
        self
    }

    // ========================================
    // ACCESSORS
    // ========================================

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn get(&self, id: ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn ladder(&self) -> &RankLadder {
        &self.ladder
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn category(&self, name: &str) -> Option<&CategoryMeta> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> &BTreeMap<String, CategoryMeta> {
        &self.categories
    }

    /// Take every event recorded since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<ProgressEvent> {
        std::mem::take(&mut self.journal)
    }

    // ========================================
    // CHALLENGE OPERATIONS
    // ========================================

    /// Create a challenge the user owns and has joined.
    ///
    /// Input is assumed validated by the caller. Duplicate tags are dropped.
    pub fn create_challenge(&mut self, input: NewChallenge) -> &Challenge {
        let id = self.next_id;
        self.next_id += 1;

        let tags = input.unique_tags();
        let challenge = Challenge {
            id,
            title: input.title,
            category: input.category,
            description: input.description,
            participants: 1,
            days_left: self.settings.challenge_days,
            progress: 0,
            is_joined: true,
            daily_score: Some(self.settings.daily_score),
            total_score: 0,
            streak: 0,
            badges: Vec::new(),
            created_by: Some(CREATED_BY_USER.to_string()),
            difficulty: input.difficulty,
            tags,
            completion_rate: 0,
            trending: false,
        };

        info!("Created challenge #{}: {}", id, challenge.title);
        self.challenges.push(challenge);
        self.journal.push(ProgressEvent::ChallengeCreated { id });
        &self.challenges[self.challenges.len() - 1]
    }

    /// Join a challenge, resetting its score and streak.
    ///
    /// Re-joining applies the same reset. Unknown ids are a silent no-op.
    pub fn join_challenge(&mut self, id: ChallengeId) -> Option<&Challenge> {
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id == id) else {
            debug!("Join ignored, no challenge #{}", id);
            return None;
        };

        challenge.is_joined = true;
        challenge.participants = challenge.participants.saturating_add(1);
        challenge.total_score = 0;
        challenge.streak = 0;

        debug!(
            "Joined challenge #{} ({} participants)",
            id, challenge.participants
        );
        self.journal.push(ProgressEvent::Joined {
            id,
            participants: challenge.participants,
        });
        Some(&*challenge)
    }

    /// Record today's check-in for a challenge.
    ///
    /// Guarded by the day flag: a second call on the same day changes
    /// nothing. Unknown ids change nothing either, including the profile.
    pub fn check_in(&mut self, id: ChallengeId) -> CheckInOutcome {
        if self.day.is_set(id) {
            debug!("Check-in ignored, #{} already checked in today", id);
            return CheckInOutcome::AlreadyCheckedIn;
        }

        let fallback_score = self.settings.daily_score;
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id == id) else {
            debug!("Check-in ignored, no challenge #{}", id);
            return CheckInOutcome::NotFound;
        };

        challenge.progress = challenge.progress.saturating_add(1);
        challenge.streak = challenge.streak.saturating_add(1);
        challenge.total_score = challenge
            .total_score
            .saturating_add(challenge.effective_daily_score(fallback_score));

        let mut events = vec![ProgressEvent::CheckedIn {
            id,
            progress: challenge.progress,
            streak: challenge.streak,
            total_score: challenge.total_score,
        }];

        let tier = self.ladder.for_days(challenge.progress);
        if challenge.push_badge(&tier.emoji) {
            info!("New badge on #{}: {} {}", id, tier.emoji, tier.name);
            events.push(ProgressEvent::BadgeUnlocked {
                id,
                tier: tier.clone(),
            });
        }

        self.day.set(id);

        // Fixed profile credit, independent of the challenge's daily score
        let amount = self.settings.profile_points_per_check_in;
        let total = self.profile.credit(amount);
        events.push(ProgressEvent::ProfileScored { amount, total });

        self.journal.extend(events.iter().cloned());
        CheckInOutcome::Applied(events)
    }

    /// Resolve a day count to its rank tier
    pub fn rank_for_days(&self, total_days: u32) -> &RankTier {
        self.ladder.for_days(total_days)
    }

    // ========================================
    // DAY FLAGS
    // ========================================

    pub fn is_checked_in(&self, id: ChallengeId) -> bool {
        self.day.is_set(id)
    }

    /// Clear all day flags (explicit reset)
    pub fn clear_day_flags(&mut self) {
        debug!("Clearing {} day flags", self.day.len());
        self.day.clear();
    }

    /// Announce the current day; flags clear when the day changes.
    /// Returns true if a rollover happened.
    pub fn start_day(&mut self, date: chrono::NaiveDate) -> bool {
        let previous = self.day.current_day();
        let rolled_over = self.day.start_day(date);
        match previous {
            Some(prev) if rolled_over => {
                info!("New day {} (was {}), check-ins reset", date, prev)
            }
            None => debug!("First day {}", date),
            _ => {}
        }
        rolled_over
    }
}
