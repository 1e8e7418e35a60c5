//! Challenge progression: join, check-in, streaks, scores and rank badges
//!
//! The engine is a synchronous, single-writer state machine per challenge:
//!
//! ```text
//! Unjoined ──join──▶ Joined ──check_in──▶ Joined + checked in today
//!                      ▲  │                          │
//!                      └──┘ join (resets)            │ new day / reset
//!                      ▲                             │
//!                      └─────────────────────────────┘
//! ```

mod day;
mod events;
mod manager;
mod queries;

pub use day::{today, DayFlags};
pub use events::{CheckInOutcome, ProgressEvent};
pub use manager::{ProgressEngine, SetupError, CREATED_BY_USER};
pub use queries::DashboardSummary;
