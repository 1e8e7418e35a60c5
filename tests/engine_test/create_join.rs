//! Tests for challenge creation and joining

use challenger::engine::ProgressEvent;
use challenger::Difficulty;

use crate::common::{check_in_days, engine, new_input};

#[test]
fn test_create_sets_initial_state() {
    let mut engine = engine();
    let input = new_input("Drink water").with_tag("health").with_tag("water");
    let challenge = engine.create_challenge(input).clone();

    assert_eq!(challenge.progress, 0);
    assert!(challenge.is_joined);
    assert_eq!(challenge.total_score, 0);
    assert_eq!(challenge.streak, 0);
    assert!(challenge.badges.is_empty());
    assert_eq!(challenge.participants, 1);
    assert_eq!(challenge.days_left, 30);
    assert_eq!(challenge.daily_score, Some(50));
    assert_eq!(challenge.difficulty, Difficulty::Medium);
    assert_eq!(challenge.tags, vec!["health", "water"]);
    assert_eq!(challenge.category, "Health");
    assert_eq!(engine.challenges().len(), 1);
}

#[test]
fn test_create_allocates_unique_ids() {
    let mut engine = engine();
    let a = engine.create_challenge(new_input("a")).id;
    let b = engine.create_challenge(new_input("b")).id;
    let c = engine.create_challenge(new_input("c")).id;
    assert!(a < b && b < c);
}

#[test]
fn test_create_drops_duplicate_tags() {
    let mut engine = engine();
    let mut input = new_input("Stretch");
    input.tags = vec!["body".into(), "morning".into(), "body".into()];
    let challenge = engine.create_challenge(input);
    assert_eq!(challenge.tags, vec!["body", "morning"]);
}

#[test]
fn test_create_does_not_validate() {
    // Validation belongs to the caller
    let mut engine = engine();
    let mut input = new_input("");
    input.description.clear();
    let challenge = engine.create_challenge(input);
    assert!(challenge.title.is_empty());
}

#[test]
fn test_double_join_counts_twice_and_resets() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Walk")).id;
    check_in_days(&mut engine, id, 4);

    let first = engine.join_challenge(id).unwrap().clone();
    assert_eq!(first.participants, 2);
    assert_eq!(first.total_score, 0);
    assert_eq!(first.streak, 0);

    let second = engine.join_challenge(id).unwrap().clone();
    assert_eq!(second.participants, 3);
    assert_eq!(second.total_score, 0);
    assert_eq!(second.streak, 0);
    assert!(second.is_joined);
}

#[test]
fn test_join_keeps_progress_and_badges() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Walk")).id;
    check_in_days(&mut engine, id, 3);

    let joined = engine.join_challenge(id).unwrap();
    assert_eq!(joined.progress, 3);
    assert_eq!(joined.badges, vec!["🌱", "🔥"]);
}

#[test]
fn test_join_unknown_id_is_noop() {
    let mut engine = engine();
    engine.create_challenge(new_input("Walk"));
    let before = engine.challenges().to_vec();

    assert!(engine.join_challenge(999).is_none());
    assert_eq!(engine.challenges(), before.as_slice());
}

#[test]
fn test_create_then_join_reports_events() {
    let mut engine = engine();
    let id = engine.create_challenge(new_input("Journal")).id;
    engine.join_challenge(id);

    assert_eq!(
        engine.take_events(),
        vec![
            ProgressEvent::ChallengeCreated { id },
            ProgressEvent::Joined {
                id,
                participants: 2
            },
        ]
    );
    assert!(engine.take_events().is_empty());
}
