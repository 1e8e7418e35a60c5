//! Per-day check-in flags
//!
//! Tracks which challenges were checked into during the current day. The
//! engine never reads the clock; callers announce the day via `start_day`.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use crate::ChallengeId;

#[derive(Debug, Clone, Default)]
pub struct DayFlags {
    day: Option<NaiveDate>,
    checked: HashSet<ChallengeId>,
}

impl DayFlags {
    pub fn is_set(&self, id: ChallengeId) -> bool {
        self.checked.contains(&id)
    }

    pub(crate) fn set(&mut self, id: ChallengeId) {
        self.checked.insert(id);
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Record the current day. Flags are cleared when the day changes.
    ///
    /// The first recorded day keeps any flags already set. Returns true if
    /// the flags were cleared.
    pub fn start_day(&mut self, date: NaiveDate) -> bool {
        let rolled_over = matches!(self.day, Some(prev) if prev != date);
        if rolled_over {
            self.checked.clear();
        }
        self.day = Some(date);
        rolled_over
    }

    pub fn current_day(&self) -> Option<NaiveDate> {
        self.day
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
