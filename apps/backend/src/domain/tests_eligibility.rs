use std::collections::BTreeSet;

use crate::domain::eligibility::{
    evaluate, match_kind, MatchKind, RosterCandidate, RosterDecision,
};

fn candidate(player_id: i64, registered: bool) -> RosterCandidate {
    RosterCandidate {
        player_id,
        club_id: 1,
        is_captain: false,
        registered,
    }
}

#[test]
fn no_competition_is_friendly() {
    assert_eq!(match_kind(None), MatchKind::Friendly);
}

#[test]
fn unofficial_competition_is_friendly() {
    assert_eq!(match_kind(Some(false)), MatchKind::Friendly);
}

#[test]
fn official_competition_is_official() {
    assert_eq!(match_kind(Some(true)), MatchKind::Official);
}

#[test]
fn friendly_allows_unregistered_players() {
    let batch = vec![candidate(1, false), candidate(2, false)];
    assert_eq!(
        evaluate(MatchKind::Friendly, &batch),
        RosterDecision::Allowed
    );
}

#[test]
fn official_allows_fully_registered_batch() {
    let batch = vec![candidate(1, true), candidate(2, true), candidate(3, true)];
    assert_eq!(
        evaluate(MatchKind::Official, &batch),
        RosterDecision::Allowed
    );
}

#[test]
fn official_rejects_mixed_batch_listing_only_offenders() {
    let batch = vec![candidate(1, true), candidate(2, false)];

    match evaluate(MatchKind::Official, &batch) {
        RosterDecision::Rejected { ineligible } => {
            assert_eq!(ineligible.len(), 1);
            assert_eq!(ineligible[0].player_id, 2);
            assert!(ineligible[0].reason.to_lowercase().contains("not registered"));
        }
        RosterDecision::Allowed => panic!("Expected rejection for mixed batch"),
    }
}

#[test]
fn official_rejects_every_offender_not_just_the_first() {
    let batch = vec![
        candidate(10, false),
        candidate(11, true),
        candidate(12, false),
        candidate(13, false),
    ];

    match evaluate(MatchKind::Official, &batch) {
        RosterDecision::Rejected { ineligible } => {
            let ids: BTreeSet<i64> = ineligible.iter().map(|p| p.player_id).collect();
            assert_eq!(ids, BTreeSet::from([10, 12, 13]));
        }
        RosterDecision::Allowed => panic!("Expected rejection"),
    }
}

#[test]
fn two_unregistered_players_produce_two_records() {
    let batch = vec![candidate(3, false), candidate(4, false)];

    match evaluate(MatchKind::Official, &batch) {
        RosterDecision::Rejected { ineligible } => assert_eq!(ineligible.len(), 2),
        RosterDecision::Allowed => panic!("Expected rejection"),
    }
}

#[test]
fn duplicate_player_ids_are_each_evaluated() {
    // Dedup policy belongs to persistence; the gate just checks flags.
    let batch = vec![candidate(5, false), candidate(5, false)];

    match evaluate(MatchKind::Official, &batch) {
        RosterDecision::Rejected { ineligible } => assert_eq!(ineligible.len(), 2),
        RosterDecision::Allowed => panic!("Expected rejection"),
    }
}

#[test]
fn only_current_flag_matters() {
    // A player whose registration flip-flopped is judged on the flag alone.
    let batch = vec![candidate(6, true)];
    assert_eq!(
        evaluate(MatchKind::Official, &batch),
        RosterDecision::Allowed
    );
}
