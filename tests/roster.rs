//! Integration tests for the zone registry and roster state.

use badminton_board::{BoardError, Roster, ZoneId, ZoneLoad, FIXED_MEMBERS};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn zone_ids_parse_and_display() {
    for zone in ZoneId::ALL {
        assert_eq!(zone.as_str().parse::<ZoneId>(), Ok(zone));
        assert_eq!(zone.to_string(), zone.as_str());
    }
    assert!("court4".parse::<ZoneId>().is_err());
    assert!("".parse::<ZoneId>().is_err());
}

#[test]
fn zone_capacities_and_ranks() {
    assert_eq!(ZoneId::Rest.capacity(), None);
    for zone in ZoneId::COURTS.into_iter().chain(ZoneId::WAITS) {
        assert_eq!(zone.capacity(), Some(4));
    }
    assert_eq!(ZoneId::Wait1.wait_rank(), Some(0));
    assert_eq!(ZoneId::Wait3.wait_rank(), Some(2));
    assert_eq!(ZoneId::Court1.wait_rank(), None);
    assert!(ZoneId::Court2.is_court());
    assert!(!ZoneId::Wait2.is_court());
}

#[test]
fn zone_load_thresholds() {
    assert_eq!(ZoneId::Court1.load(2), ZoneLoad::Open);
    assert_eq!(ZoneId::Court1.load(3), ZoneLoad::NearlyFull);
    assert_eq!(ZoneId::Court1.load(4), ZoneLoad::Full);
    assert_eq!(ZoneId::Rest.load(40), ZoneLoad::Open);
}

#[test]
fn zone_serializes_as_document_id() {
    assert_eq!(serde_json::to_string(&ZoneId::Court3).unwrap(), "\"court3\"");
    assert_eq!(
        serde_json::from_str::<ZoneId>("\"wait2\"").unwrap(),
        ZoneId::Wait2
    );
}

#[test]
fn default_roster_has_every_member_resting() {
    let roster = Roster::default();
    assert_eq!(roster.len(), FIXED_MEMBERS.len());
    for name in FIXED_MEMBERS {
        assert_eq!(roster.get(name), Ok(ZoneId::Rest));
    }
}

#[test]
fn get_unknown_ad_hoc_player_fails() {
    let roster = Roster::default();
    assert_eq!(
        roster.get("Stranger"),
        Err(BoardError::UnknownPlayer("Stranger".to_string()))
    );
}

#[test]
fn placements_fill_in_missing_members() {
    let roster = Roster::from_placements(vec![("Guest", ZoneId::Court2)]);
    assert_eq!(roster.get("Guest"), Ok(ZoneId::Court2));
    assert_eq!(roster.len(), FIXED_MEMBERS.len() + 1);
    assert_eq!(roster.count(ZoneId::Rest), FIXED_MEMBERS.len());
}

#[test]
fn set_appends_to_back_of_zone() {
    let mut roster = Roster::default();
    roster.set(FIXED_MEMBERS[3], ZoneId::Wait1);
    roster.set(FIXED_MEMBERS[0], ZoneId::Wait1);
    roster.set("Guest", ZoneId::Wait1);
    assert_eq!(
        roster.occupants(ZoneId::Wait1),
        vec![FIXED_MEMBERS[3], FIXED_MEMBERS[0], "Guest"]
    );

    // Re-setting the same zone keeps the place in line.
    roster.set(FIXED_MEMBERS[3], ZoneId::Wait1);
    assert_eq!(roster.occupants(ZoneId::Wait1)[0], FIXED_MEMBERS[3]);
}

#[test]
fn remove_deletes_ad_hoc_player() {
    let mut roster = Roster::default();
    roster.set("Guest", ZoneId::Court1);
    assert!(roster.remove("Guest"));
    assert!(!roster.contains("Guest"));
    assert!(!roster.remove("Guest"));
}

#[test]
fn removed_member_returns_to_rest() {
    let mut roster = Roster::default();
    roster.set(FIXED_MEMBERS[1], ZoneId::Court1);
    assert!(roster.remove(FIXED_MEMBERS[1]));
    assert_eq!(roster.get(FIXED_MEMBERS[1]), Ok(ZoneId::Rest));
    assert_eq!(roster.count(ZoneId::Court1), 0);
}

#[test]
fn snapshot_lists_members_first_then_ad_hoc() {
    let roster = Roster::from_placements(vec![
        ("Guest B", ZoneId::Wait1),
        (FIXED_MEMBERS[5], ZoneId::Court1),
        ("Guest A", ZoneId::Rest),
    ]);
    let snapshot = roster.snapshot();
    let order: Vec<&str> = snapshot.iter().map(|s| s.name.as_str()).collect();

    let mut expected: Vec<&str> = FIXED_MEMBERS.to_vec();
    expected.extend(["Guest B", "Guest A"]);
    assert_eq!(order, expected);

    assert!(snapshot[..FIXED_MEMBERS.len()].iter().all(|s| s.is_fixed));
    assert!(snapshot[FIXED_MEMBERS.len()..].iter().all(|s| !s.is_fixed));
    assert_eq!(snapshot[5].zone, ZoneId::Court1);
}

#[test]
fn every_member_appears_once_in_snapshot() {
    let mut roster = Roster::from_zone_lists(vec![(ZoneId::Court1, names(&["X", "Y"]))]);
    roster.remove(FIXED_MEMBERS[0]);
    roster.remove(FIXED_MEMBERS[9]);
    let snapshot = roster.snapshot();
    for name in FIXED_MEMBERS {
        assert_eq!(snapshot.iter().filter(|s| s.name == name).count(), 1);
    }
}

#[test]
fn serializes_as_name_to_zone_map() {
    let roster = Roster::from_placements(vec![("Guest", ZoneId::Wait2)]);
    let value = serde_json::to_value(&roster).unwrap();
    assert_eq!(value["Guest"], "wait2");
    assert_eq!(value[FIXED_MEMBERS[0]], "rest");
}

#[test]
fn json_round_trip_keeps_queue_order() {
    let roster = Roster::from_zone_lists(vec![
        (ZoneId::Wait1, names(&["D", "A", "C"])),
        (ZoneId::Court2, names(&["B", FIXED_MEMBERS[2]])),
    ]);
    let text = serde_json::to_string(&roster).unwrap();
    let back: Roster = serde_json::from_str(&text).unwrap();
    assert_eq!(back, roster);
    assert_eq!(back.occupants(ZoneId::Wait1), vec!["D", "A", "C"]);
    assert_eq!(back.snapshot(), roster.snapshot());
}

#[test]
fn unknown_zone_in_document_falls_back_to_rest() {
    let roster: Roster = serde_json::from_str(r#"{"Guest":"court9"}"#).unwrap();
    assert_eq!(roster.get("Guest"), Ok(ZoneId::Rest));
}

#[test]
fn zone_summaries_count_occupants() {
    let roster = Roster::from_zone_lists(vec![(ZoneId::Court1, names(&["A", "B", "C"]))]);
    let summaries = roster.zone_summaries();
    assert_eq!(summaries.len(), ZoneId::ALL.len());
    let court1 = summaries.iter().find(|s| s.zone == ZoneId::Court1).unwrap();
    assert_eq!(court1.count, 3);
    assert_eq!(court1.capacity, Some(4));
    assert_eq!(court1.load, ZoneLoad::NearlyFull);
    let rest = summaries.iter().find(|s| s.zone == ZoneId::Rest).unwrap();
    assert_eq!(rest.count, FIXED_MEMBERS.len());
    assert_eq!(rest.capacity, None);
}
