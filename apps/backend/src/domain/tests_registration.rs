use time::macros::datetime;

use crate::domain::registration::RegistrationStatus;

#[test]
fn first_mapping_flips_flag_and_stamps_verified_at() {
    let t = datetime!(2025-03-01 10:00 UTC);
    let status = RegistrationStatus::default().on_mapping_created(t);

    assert!(status.registered);
    assert_eq!(status.verified_at, Some(t));
}

#[test]
fn second_mapping_does_not_refresh_verified_at() {
    let first = datetime!(2025-03-01 10:00 UTC);
    let later = datetime!(2025-04-15 09:30 UTC);

    let status = RegistrationStatus::default()
        .on_mapping_created(first)
        .on_mapping_created(later);

    assert!(status.registered);
    assert_eq!(status.verified_at, Some(first));
}

#[test]
fn removing_last_mapping_clears_flag_and_timestamp() {
    let t = datetime!(2025-03-01 10:00 UTC);
    let status = RegistrationStatus::default()
        .on_mapping_created(t)
        .on_mapping_removed(0);

    assert!(!status.registered);
    assert_eq!(status.verified_at, None);
}

#[test]
fn removing_one_of_two_mappings_keeps_flag() {
    let t = datetime!(2025-03-01 10:00 UTC);
    let status = RegistrationStatus::default()
        .on_mapping_created(t)
        .on_mapping_removed(1);

    assert!(status.registered);
    assert_eq!(status.verified_at, Some(t));
}

#[test]
fn flip_flop_round_trip() {
    let first = datetime!(2025-03-01 10:00 UTC);
    let second = datetime!(2025-06-20 14:00 UTC);

    let status = RegistrationStatus::default()
        .on_mapping_created(first)
        .on_mapping_removed(0)
        .on_mapping_created(second);

    assert!(status.registered);
    // After a full remove/re-add cycle the timestamp reflects the new flip.
    assert_eq!(status.verified_at, Some(second));
}

#[test]
fn removal_on_unregistered_player_is_a_no_op() {
    let status = RegistrationStatus::default().on_mapping_removed(0);
    assert!(!status.registered);
    assert_eq!(status.verified_at, None);
}
