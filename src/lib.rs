//! Challenger - daily habit challenges
//!
//! Users join challenges, check in once a day, and build up streaks, scores
//! and rank badges. This crate holds the progression engine and a
//! line-oriented session that drives it.
//!
//! ## Layout
//!
//! 1. **Domain**: challenges, the user profile, the rank ladder and category
//!    metadata.
//!
//! 2. **Engine**: create / join / check-in / rank lookup, the per-day
//!    check-in flags, and read-side queries.
//!
//! 3. **Config**: rank ladder, categories, scoring settings and seed data,
//!    loaded once per session from TOML.

pub mod config;
pub mod domain;
pub mod engine;
pub mod session;

pub use domain::*;
