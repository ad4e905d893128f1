use crate::{CoreError, Record, RecordFields, RecordId};

use serde_json::json;

#[test]
fn test_record_to_payload_includes_id_and_fields() {
    let record = Record::new(RecordId::from("1"), RecordFields::new("John").with_age(25));

    let payload = record.to_payload();

    assert_eq!(payload, json!({"id": "1", "name": "John", "age": 25}));
}

#[test]
fn test_record_to_payload_matches_serialized_record() {
    let bare = Record::new(RecordId::from("4"), RecordFields::new("Bare"));
    let full = Record::new(
        RecordId::from("5"),
        RecordFields::new("Full").with_age(40).with_email("full@example.com"),
    );

    for record in [bare, full] {
        assert_eq!(record.to_payload(), serde_json::to_value(&record).unwrap());
    }
}

#[test]
fn test_record_from_payload_with_numeric_id() {
    let record = Record::from_payload(json!({
        "id": 2,
        "name": "Jane",
        "age": 30
    }))
    .unwrap();

    assert_eq!(record.id, RecordId::from("2"));
    assert_eq!(record.name(), "Jane");
    assert_eq!(record.fields.age, Some(30));
    assert_eq!(record.fields.email, None);
}

#[test]
fn test_record_from_payload_ignores_unknown_fields() {
    let record = Record::from_payload(json!({
        "id": "7",
        "name": "Leanne",
        "email": "leanne@example.com",
        "username": "Bret",
        "phone": "1-770-736-8031"
    }))
    .unwrap();

    assert_eq!(record.fields.email.as_deref(), Some("leanne@example.com"));
}

#[test]
fn test_record_from_payload_missing_id_is_payload_error() {
    let result = Record::from_payload(json!({"name": "John"}));
    assert!(matches!(result, Err(CoreError::Payload { .. })));
}

#[test]
fn test_record_from_payload_missing_name_is_payload_error() {
    let result = Record::from_payload(json!({"id": "1", "age": 25}));
    assert!(matches!(result, Err(CoreError::Payload { .. })));
}
