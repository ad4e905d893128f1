use crate::{CoreError, MAX_NAME_LENGTH, RecordFields};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serde_json::json;

#[test]
fn given_absent_optional_fields_when_serialized_then_omitted() {
    let fields = RecordFields::new("John");

    let payload = serde_json::to_value(&fields).unwrap();

    assert_eq!(payload, json!({"name": "John"}));
}

#[test]
fn given_all_fields_when_serialized_then_present() {
    let fields = RecordFields::new("Jane")
        .with_age(30)
        .with_email("jane@example.com");

    let payload = serde_json::to_value(&fields).unwrap();

    assert_eq!(
        payload,
        json!({"name": "Jane", "age": 30, "email": "jane@example.com"})
    );
}

#[test]
fn given_valid_fields_when_validate_then_ok() {
    let fields = RecordFields::new("Jane").with_email("jane@example.com");
    assert_that!(fields.validate(), ok(anything()));
}

#[test]
fn given_blank_name_when_validate_then_error() {
    let result = RecordFields::new("   ").validate();

    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_name_over_limit_when_validate_then_error_mentions_limit() {
    let fields = RecordFields::new("x".repeat(MAX_NAME_LENGTH + 1));

    let result = fields.validate();

    assert_that!(result, err(anything()));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring(MAX_NAME_LENGTH.to_string()));
}

#[test]
fn given_name_at_limit_when_validate_then_ok() {
    let fields = RecordFields::new("x".repeat(MAX_NAME_LENGTH));
    assert_that!(fields.validate(), ok(anything()));
}

#[test]
fn given_malformed_email_when_validate_then_error() {
    for email in ["", "plain", "@example.com", "john@", "a@b@c"] {
        let fields = RecordFields::new("John").with_email(email);
        assert!(fields.validate().is_err(), "accepted {email:?}");
    }
}
