//! Response-decoding policy for Halo API payloads.
//!
//! Every response body in the client goes through these two functions so
//! the envelope and fallback rules live in exactly one place:
//!
//! - success bodies: unwrap a one-level `data` envelope when present,
//!   otherwise pass the JSON through; an empty or unparseable body on a
//!   2xx decodes to `Value::Null` (absence of content is not an error);
//! - failure bodies: surface the backend's `message` field when one can
//!   be extracted.

use serde_json::Value;

/// Decode the body of a successful (2xx) response.
pub fn decode_success_body(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut map)) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        Ok(other) => other,
        Err(_) => Value::Null,
    }
}

/// Pull the `message` field out of a JSON error body, if there is one.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_unwraps_data_envelope() {
        let body = r#"{"data": {"visits": 42}}"#;
        assert_eq!(decode_success_body(body), json!({"visits": 42}));
    }

    #[test]
    fn test_decode_unwraps_data_array() {
        let body = r#"{"data": [1, 2, 3]}"#;
        assert_eq!(decode_success_body(body), json!([1, 2, 3]));
    }

    #[test]
    fn test_decode_unwraps_explicit_null_data() {
        let body = r#"{"data": null}"#;
        assert_eq!(decode_success_body(body), Value::Null);
    }

    #[test]
    fn test_decode_passes_through_plain_object() {
        let body = r#"{"visits": 42, "signups": 7}"#;
        assert_eq!(
            decode_success_body(body),
            json!({"visits": 42, "signups": 7})
        );
    }

    #[test]
    fn test_decode_passes_through_top_level_array() {
        let body = r#"[{"id": 1}]"#;
        assert_eq!(decode_success_body(body), json!([{"id": 1}]));
    }

    #[test]
    fn test_decode_empty_body_is_null() {
        assert_eq!(decode_success_body(""), Value::Null);
    }

    #[test]
    fn test_decode_non_json_body_is_null() {
        assert_eq!(decode_success_body("<html>maintenance</html>"), Value::Null);
    }

    #[test]
    fn test_extract_message_present() {
        let body = r#"{"message": "Unauthenticated.", "status": "error"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("Unauthenticated."));
    }

    #[test]
    fn test_extract_message_absent() {
        assert!(extract_message(r#"{"status": "error"}"#).is_none());
    }

    #[test]
    fn test_extract_message_non_json() {
        assert!(extract_message("502 Bad Gateway").is_none());
    }

    #[test]
    fn test_extract_message_non_string_message() {
        assert!(extract_message(r#"{"message": {"nested": true}}"#).is_none());
    }
}
