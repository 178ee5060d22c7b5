//! Tests for roster parsing, validation and lookup.

use chrono::{TimeZone, Utc};
use slot_engine::roster::Roster;
use slot_engine::SlotError;

const SAMPLE: &str = r#"{
  "photographers": [
    {
      "id": "1",
      "name": "Otto Crawford",
      "availabilities": [
        { "starts": "2020-11-25T08:00:00.000Z", "ends": "2020-11-25T16:00:00.000Z" }
      ],
      "bookings": [
        { "id": "1", "starts": "2020-11-25T08:30:00.000Z", "ends": "2020-11-25T09:30:00.000Z" }
      ]
    },
    {
      "id": "2",
      "name": "Jens Mills",
      "availabilities": [
        { "starts": "2020-11-25T08:00:00.000Z", "ends": "2020-11-25T09:00:00.000Z" },
        { "starts": "2020-11-25T13:00:00.000Z", "ends": "2020-11-25T16:00:00.000Z" }
      ],
      "bookings": [
        { "id": "2", "starts": "2020-11-25T15:00:00.000Z", "ends": "2020-11-25T16:00:00.000Z" }
      ]
    }
  ]
}"#;

#[test]
fn parses_photographers_document() {
    let roster = Roster::from_json(SAMPLE).unwrap();

    assert_eq!(roster.len(), 2);
    let otto = &roster.resources[0];
    assert_eq!(otto.resource.id, "1");
    assert_eq!(otto.resource.name, "Otto Crawford");
    assert_eq!(otto.availabilities.len(), 1);
    assert_eq!(
        otto.availabilities[0].start,
        Utc.with_ymd_and_hms(2020, 11, 25, 8, 0, 0).unwrap()
    );
    assert_eq!(otto.bookings[0].id, "1");
    assert_eq!(
        otto.bookings[0].interval.end,
        Utc.with_ymd_and_hms(2020, 11, 25, 9, 30, 0).unwrap()
    );

    assert_eq!(roster.resources[1].availabilities.len(), 2);
    assert!(roster.validate().is_ok());
}

#[test]
fn resources_key_and_offsets_are_accepted() {
    let json = r#"{"resources":[{"id":"x","name":"X","availabilities":[
        {"starts":"2020-11-25T09:00:00+01:00","ends":"2020-11-25T10:00:00+01:00"}]}]}"#;

    let roster = Roster::from_json(json).unwrap();

    let schedule = &roster.resources[0];
    assert!(schedule.bookings.is_empty(), "bookings default to empty");
    assert_eq!(
        schedule.availabilities[0].start,
        Utc.with_ymd_and_hms(2020, 11, 25, 8, 0, 0).unwrap()
    );
}

#[test]
fn malformed_json_is_invalid_roster() {
    let err = Roster::from_json("{\"photographers\": [").unwrap_err();
    assert!(matches!(err, SlotError::InvalidRoster(_)));

    let err = Roster::from_json(r#"{"photographers":[{"id":"1","name":"A","availabilities":[{"starts":"not a date","ends":"x"}]}]}"#)
        .unwrap_err();
    assert!(matches!(err, SlotError::InvalidRoster(_)));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let json = r#"{"photographers":[{"id":"1","name":"A"},{"id":"1","name":"B"}]}"#;

    let roster = Roster::from_json(json).unwrap();

    assert_eq!(roster.validate(), Err(SlotError::DuplicateResource("1".to_string())));
}

#[test]
fn validate_rejects_inverted_booking() {
    let json = r#"{"photographers":[{"id":"1","name":"A","bookings":[
        {"id":"b","starts":"2020-11-25T10:00:00Z","ends":"2020-11-25T09:00:00Z"}]}]}"#;

    let roster = Roster::from_json(json).unwrap();

    assert!(matches!(roster.validate(), Err(SlotError::InvalidInterval { .. })));
}

#[test]
fn resource_lookup_by_id() {
    let roster = Roster::from_json(SAMPLE).unwrap();

    assert_eq!(roster.resource("2").map(|r| r.name.as_str()), Some("Jens Mills"));
    assert!(roster.resource("3").is_none());
}
