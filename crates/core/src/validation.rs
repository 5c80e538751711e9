//! Pure validation rules for dog payloads.
//!
//! Create payloads are checked field-by-field with every error collected
//! before answering. Update payloads only get their keys whitelist-checked;
//! values are deliberately left untyped at this stage and surface as store
//! errors instead.

use serde_json::{Map, Value};

/// Keys accepted on a create payload.
pub const CREATE_KEYS: &[&str] = &["name", "description", "age", "breed"];

/// Keys accepted on an update payload.
pub const UPDATE_KEYS: &[&str] = &["name", "description", "breed", "age"];

/// Validate a create payload, collecting every error rather than stopping
/// at the first.
///
/// Message order: required-field checks (name, description, age), then one
/// message per unknown key in body key order.
pub fn validate_create(body: &Map<String, Value>) -> Vec<String> {
    let mut errors = Vec::new();

    if !body.get("name").is_some_and(Value::is_string) {
        errors.push("name should be a string".to_string());
    }
    if !body.get("description").is_some_and(Value::is_string) {
        errors.push("description should be a string".to_string());
    }
    if !body.get("age").is_some_and(Value::is_number) {
        errors.push("age should be a number".to_string());
    }

    errors.extend(invalid_keys(body, CREATE_KEYS));
    errors
}

/// One `'<key>' is not a valid key` message per body key outside `allowed`,
/// in body key order.
pub fn invalid_keys(body: &Map<String, Value>, allowed: &[&str]) -> Vec<String> {
    body.keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| format!("'{key}' is not a valid key"))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test payload must be an object")
    }

    #[test]
    fn valid_create_payload_passes() {
        let body = object(json!({
            "name": "Rex",
            "description": "loyal",
            "age": 3,
        }));
        assert!(validate_create(&body).is_empty());
    }

    #[test]
    fn breed_is_accepted_without_type_check() {
        let body = object(json!({
            "name": "Rex",
            "description": "loyal",
            "age": 3,
            "breed": 42,
        }));
        assert!(validate_create(&body).is_empty());
    }

    #[test]
    fn missing_and_mistyped_fields_collect_all_errors() {
        let body = object(json!({ "name": 123 }));
        assert_eq!(
            validate_create(&body),
            vec![
                "name should be a string",
                "description should be a string",
                "age should be a number",
            ]
        );
    }

    #[test]
    fn null_fields_fail_the_presence_check() {
        let body = object(json!({
            "name": null,
            "description": "x",
            "age": 1,
        }));
        assert_eq!(validate_create(&body), vec!["name should be a string"]);
    }

    #[test]
    fn unknown_keys_are_reported_after_field_errors() {
        let body = object(json!({
            "extra": "y",
            "name": "Rex",
            "description": "x",
            "age": 1,
        }));
        assert_eq!(validate_create(&body), vec!["'extra' is not a valid key"]);
    }

    #[test]
    fn unknown_keys_keep_body_order() {
        let body = object(json!({
            "zeta": 1,
            "alpha": 2,
        }));
        assert_eq!(
            invalid_keys(&body, UPDATE_KEYS),
            vec!["'zeta' is not a valid key", "'alpha' is not a valid key"]
        );
    }

    #[test]
    fn empty_body_fails_every_required_check() {
        let body = Map::new();
        assert_eq!(validate_create(&body).len(), 3);
    }
}
