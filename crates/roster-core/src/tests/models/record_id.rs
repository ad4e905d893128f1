use crate::RecordId;

use serde_json::json;

#[test]
fn test_record_id_from_string_payload() {
    let id: RecordId = serde_json::from_value(json!("-NxA1b2")).unwrap();
    assert_eq!(id.as_str(), "-NxA1b2");
}

#[test]
fn test_record_id_from_integer_payload() {
    let id: RecordId = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(id, RecordId::from("42"));
}

#[test]
fn test_record_id_from_negative_integer_payload() {
    let id: RecordId = serde_json::from_value(json!(-7)).unwrap();
    assert_eq!(id.as_str(), "-7");
}

#[test]
fn test_record_id_always_encodes_as_string() {
    let id: RecordId = serde_json::from_value(json!(3)).unwrap();
    assert_eq!(serde_json::to_value(&id).unwrap(), json!("3"));
}

#[test]
fn test_record_id_rejects_non_scalar_payload() {
    let result = serde_json::from_value::<RecordId>(json!({"id": 1}));
    assert!(result.is_err());
}

#[test]
fn test_record_id_display() {
    assert_eq!(RecordId::new("abc").to_string(), "abc");
}
