//! Tests for the daily check-in

use challenger::config::Settings;
use challenger::engine::{CheckInOutcome, ProgressEngine, ProgressEvent};
use challenger::UserProfile;

use crate::common::{check_in_days, engine, new_input, small_ladder};

#[test]
fn test_second_check_in_same_day_is_noop() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Read")).id;

    assert!(engine.check_in(id).is_applied());
    let challenge_after_first = engine.get(id).unwrap().clone();
    let profile_after_first = engine.profile().clone();

    assert_eq!(engine.check_in(id), CheckInOutcome::AlreadyCheckedIn);
    assert_eq!(engine.get(id).unwrap(), &challenge_after_first);
    assert_eq!(engine.profile(), &profile_after_first);
    assert!(engine.is_checked_in(id));
}

#[test]
fn test_n_check_ins_accumulate() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Read")).id;

    check_in_days(&mut engine, id, 5);

    let challenge = engine.get(id).unwrap();
    assert_eq!(challenge.progress, 5);
    assert_eq!(challenge.streak, 5);
    assert_eq!(challenge.total_score, 5 * 50);
}

#[test]
fn test_check_in_uses_challenge_daily_score() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Read")).id;

    // Seed a challenge with its own score through a fresh engine
    let mut seeded = engine.get(id).unwrap().clone();
    seeded.daily_score = Some(75);
    let mut engine = ProgressEngine::new(small_ladder(), Settings::default())
        .with_challenges(vec![seeded])
        .unwrap();

    check_in_days(&mut engine, id, 2);
    assert_eq!(engine.get(id).unwrap().total_score, 150);
}

#[test]
fn test_profile_credit_is_fixed_regardless_of_daily_score() {
    // The profile gets a flat 50 even when the challenge is worth 75
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Read")).id;
    let mut seeded = engine.get(id).unwrap().clone();
    seeded.daily_score = Some(75);

    let profile = UserProfile {
        total_score: 1000,
        ..UserProfile::default()
    };
    let mut engine = ProgressEngine::new(small_ladder(), Settings::default())
        .with_challenges(vec![seeded])
        .unwrap()
        .with_profile(profile);

    let outcome = engine.check_in(id);
    assert_eq!(engine.profile().total_score, 1050);
    assert_eq!(engine.get(id).unwrap().total_score, 75);
    assert!(outcome.events().contains(&ProgressEvent::ProfileScored {
        amount: 50,
        total: 1050
    }));
}

#[test]
fn test_check_in_unknown_id_changes_nothing() {
    let mut engine = engine();
    engine.create_challenge(new_input("Read"));
    let before = engine.challenges().to_vec();
    let profile_before = engine.profile().clone();

    assert_eq!(engine.check_in(404), CheckInOutcome::NotFound);
    assert_eq!(engine.challenges(), before.as_slice());
    assert_eq!(engine.profile(), &profile_before);
    assert!(!engine.is_checked_in(404));
}

#[test]
fn test_streak_has_no_gap_detection() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Read")).id;
    let day = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    engine.start_day(day);
    engine.check_in(id);
    // Skip three days entirely
    engine.start_day(day + chrono::Days::new(4));
    engine.check_in(id);

    assert_eq!(engine.get(id).unwrap().streak, 2);
}

#[test]
fn test_flags_are_per_challenge() {
    let mut engine = engine();
    let a = engine.create_challenge(new_input("a")).id;
    let b = engine.create_challenge(new_input("b")).id;

    assert!(engine.check_in(a).is_applied());
    assert!(engine.check_in(b).is_applied());
    assert!(!engine.check_in(a).is_applied());
}

#[test]
fn test_check_in_does_not_require_joined() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("a")).id;
    let mut open = engine.get(id).unwrap().clone();
    open.is_joined = false;
    let mut engine = ProgressEngine::new(small_ladder(), Settings::default())
        .with_challenges(vec![open])
        .unwrap();

    assert!(engine.check_in(id).is_applied());
    assert_eq!(engine.get(id).unwrap().progress, 1);
}
