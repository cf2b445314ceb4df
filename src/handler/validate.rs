//! Submission validation
//!
//! Required-field presence checks on the decoded POST payload, in fixed
//! order: name, then email, then text, stopping at the first miss.

use serde_json::Value;

use crate::error::{ErrorKind, RequiredField, ServiceError};
use crate::store::Entry;

const REQUIRED_FIELDS: [RequiredField; 3] = [
    RequiredField::Name,
    RequiredField::Email,
    RequiredField::Text,
];

/// Check the decoded payload and return the entry object to store.
///
/// A required field counts as missing when it is absent, null, not a string,
/// or a string containing only whitespace. Extra fields pass through.
pub fn validate_submission(payload: Option<&Value>) -> Result<Entry, ServiceError> {
    let Some(Value::Object(entry)) = payload else {
        return Err(ErrorKind::EmptyPayload.into());
    };
    for field in REQUIRED_FIELDS {
        let present = entry
            .get(field.key())
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !present {
            return Err(ErrorKind::MissingField(field).into());
        }
    }
    Ok(entry.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_payload() {
        let err = validate_submission(None).unwrap_err();
        assert_eq!(err.kind().name(), "EmptyPayloadError");
    }

    #[test]
    fn test_null_payload() {
        let err = validate_submission(Some(&Value::Null)).unwrap_err();
        assert_eq!(err.kind().name(), "EmptyPayloadError");
    }

    #[test]
    fn test_non_object_payload() {
        let err = validate_submission(Some(&json!(["not", "an", "object"]))).unwrap_err();
        assert_eq!(err.kind().name(), "EmptyPayloadError");
    }

    #[test]
    fn test_valid_submission_keeps_extra_fields() {
        let payload = json!({
            "name": "alice",
            "email": "a@example.com",
            "text": "hello",
            "mood": "cheerful"
        });
        let entry = validate_submission(Some(&payload)).unwrap();
        assert_eq!(entry["mood"], "cheerful");
    }

    #[test]
    fn test_missing_name_reported_first() {
        let payload = json!({ "email": "a@example.com" });
        let err = validate_submission(Some(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");
    }

    #[test]
    fn test_email_precedes_text() {
        // Both email and text missing: email must be reported, never text.
        let payload = json!({ "name": "alice" });
        let err = validate_submission(Some(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Email is required.");
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let payload = json!({ "name": "alice", "email": "   ", "text": "hi" });
        let err = validate_submission(Some(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Email is required.");
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let payload = json!({ "name": "alice", "email": "a@example.com", "text": null });
        let err = validate_submission(Some(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Text is required.");
    }

    #[test]
    fn test_non_string_field_counts_as_missing() {
        let payload = json!({ "name": 42, "email": "a@example.com", "text": "hi" });
        let err = validate_submission(Some(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");
    }
}
