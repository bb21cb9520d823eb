//! Integration tests for moves, the tap shortcut, debouncing and player lifecycle.

use badminton_board::{
    add_player, find_available_court, move_player_to_zone, remove_players, reset, tap_player,
    tap_target, BoardError, Debouncer, MoveOutcome, Roster, ZoneId, FIXED_MEMBERS,
};
use std::time::{Duration, Instant};

fn names(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

fn roster_with_full_courts() -> Roster {
    Roster::from_zone_lists(vec![
        (ZoneId::Court1, names("A", 4)),
        (ZoneId::Court2, names("B", 4)),
        (ZoneId::Court3, names("C", 4)),
    ])
}

#[test]
fn move_between_zones() {
    let mut roster = Roster::default();
    let outcome = move_player_to_zone(&mut roster, FIXED_MEMBERS[0], ZoneId::Rest, ZoneId::Wait2);
    assert_eq!(
        outcome,
        Ok(MoveOutcome::Moved {
            player: FIXED_MEMBERS[0].to_string(),
            from: ZoneId::Rest,
            to: ZoneId::Wait2,
        })
    );
    assert_eq!(roster.get(FIXED_MEMBERS[0]), Ok(ZoneId::Wait2));
}

#[test]
fn move_into_full_zone_fails_without_change() {
    let mut roster = roster_with_full_courts();
    let before = roster.clone();
    let result = move_player_to_zone(&mut roster, FIXED_MEMBERS[0], ZoneId::Rest, ZoneId::Court2);
    assert_eq!(result, Err(BoardError::ZoneFull { zone: ZoneId::Court2 }));
    assert_eq!(roster, before);
}

#[test]
fn move_with_stale_origin_is_refused() {
    let mut roster = Roster::default();
    roster.set(FIXED_MEMBERS[4], ZoneId::Court1);
    let before = roster.clone();
    let result = move_player_to_zone(&mut roster, FIXED_MEMBERS[4], ZoneId::Rest, ZoneId::Wait1);
    assert!(matches!(
        result,
        Err(BoardError::StaleMoveIgnored {
            expected: ZoneId::Rest,
            actual: ZoneId::Court1,
            ..
        })
    ));
    assert_eq!(roster, before);
}

#[test]
fn move_to_same_zone_is_unchanged() {
    let mut roster = roster_with_full_courts();
    // Court1 is full, but staying put is not a capacity violation.
    let result = move_player_to_zone(&mut roster, "A0", ZoneId::Court1, ZoneId::Court1);
    assert_eq!(result, Ok(MoveOutcome::Unchanged));
}

#[test]
fn move_unknown_player_fails() {
    let mut roster = Roster::default();
    let result = move_player_to_zone(&mut roster, "Nobody", ZoneId::Rest, ZoneId::Court1);
    assert_eq!(result, Err(BoardError::UnknownPlayer("Nobody".to_string())));
}

#[test]
fn tap_resting_player_takes_first_open_court() {
    let mut roster = Roster::from_zone_lists(vec![(ZoneId::Court1, names("A", 4))]);
    assert_eq!(find_available_court(&roster), Some(ZoneId::Court2));
    let outcome = tap_player(&mut roster, FIXED_MEMBERS[0]).unwrap();
    assert!(outcome.is_moved());
    assert_eq!(roster.get(FIXED_MEMBERS[0]), Ok(ZoneId::Court2));
}

#[test]
fn tap_court_player_returns_to_rest() {
    let mut roster = roster_with_full_courts();
    assert_eq!(tap_target(&roster, "C2"), Ok(Some(ZoneId::Rest)));
    tap_player(&mut roster, "C2").unwrap();
    assert_eq!(roster.get("C2"), Ok(ZoneId::Rest));
    assert_eq!(roster.count(ZoneId::Court3), 3);
}

#[test]
fn tap_waiting_player_does_nothing() {
    let mut roster = Roster::from_zone_lists(vec![(ZoneId::Wait3, vec!["W".to_string()])]);
    let before = roster.clone();
    assert_eq!(tap_player(&mut roster, "W"), Ok(MoveOutcome::Unchanged));
    assert_eq!(roster, before);
}

#[test]
fn tap_with_all_courts_full_fails_and_changes_nothing() {
    let mut roster = roster_with_full_courts();
    let before = roster.clone();
    assert_eq!(
        tap_player(&mut roster, FIXED_MEMBERS[0]),
        Err(BoardError::NoCourtAvailable)
    );
    assert_eq!(roster, before);
    assert!(BoardError::NoCourtAvailable.is_capacity());
}

#[test]
fn debouncer_skips_repeats_inside_window() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let start = Instant::now();
    assert!(debouncer.admit("SHIU", start));
    assert!(!debouncer.admit("SHIU", start + Duration::from_millis(120)));
    // A different player is not affected.
    assert!(debouncer.admit("Pota", start + Duration::from_millis(150)));
    assert!(debouncer.admit("SHIU", start + Duration::from_millis(301)));
}

#[test]
fn debouncer_forget_admits_next_activation() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let start = Instant::now();
    assert!(debouncer.admit("A", start));
    debouncer.forget("A");
    assert!(debouncer.admit("A", start + Duration::from_millis(50)));
    assert!(!debouncer.admit("A", start + Duration::from_millis(100)));
}

#[test]
fn debouncer_window_is_clamped() {
    assert_eq!(
        Debouncer::new(Duration::from_millis(10)).window(),
        Duration::from_millis(300)
    );
    assert_eq!(
        Debouncer::new(Duration::from_secs(2)).window(),
        Duration::from_millis(500)
    );
}

#[test]
fn add_player_trims_and_rests() {
    let mut roster = Roster::default();
    assert_eq!(add_player(&mut roster, "  Guest "), Ok("Guest".to_string()));
    assert_eq!(roster.get("Guest"), Ok(ZoneId::Rest));
}

#[test]
fn add_player_rejects_empty_and_duplicate_names() {
    let mut roster = Roster::default();
    assert_eq!(add_player(&mut roster, "   "), Err(BoardError::EmptyPlayerName));
    assert_eq!(
        add_player(&mut roster, "shiu"),
        Err(BoardError::DuplicatePlayerName("SHIU".to_string()))
    );
    add_player(&mut roster, "Guest").unwrap();
    assert_eq!(
        add_player(&mut roster, "GUEST"),
        Err(BoardError::DuplicatePlayerName("Guest".to_string()))
    );
}

#[test]
fn remove_players_reports_what_was_removed() {
    let mut roster = Roster::from_zone_lists(vec![(ZoneId::Court1, names("G", 2))]);
    let removed = remove_players(&mut roster, &["G0", "Nobody", "G1"]);
    assert_eq!(removed, vec!["G0".to_string(), "G1".to_string()]);
    assert_eq!(roster.count(ZoneId::Court1), 0);
}

#[test]
fn reset_restores_default_board() {
    let mut roster = roster_with_full_courts();
    roster.set(FIXED_MEMBERS[0], ZoneId::Wait1);
    reset(&mut roster);
    assert_eq!(roster, Roster::default());
}
