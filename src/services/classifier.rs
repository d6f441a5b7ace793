//! Provider failure classification
//!
//! Decides whether a non-success provider reply means quota exhaustion.

use crate::models::gemini::GeminiErrorResponse;
use serde_json::Value;

/// Status Gemini reports for exhausted quota
pub const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Outcome of classifying a non-success reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    QuotaExceeded,
    Provider { status: u16 },
}

/// Classify a failed reply from its status and best-effort JSON body.
///
/// Quota when the status is 429, the body's `error.status` is
/// `RESOURCE_EXHAUSTED`, or `error.message` contains "quota"
/// (case-sensitive).
pub fn classify_failure(status: u16, body: Option<&Value>) -> FailureClass {
    if status == 429 {
        return FailureClass::QuotaExceeded;
    }

    let error = body.and_then(|b| b.get("error"));
    let error_status = error.and_then(|e| e.get("status")).and_then(Value::as_str);
    let error_message = error.and_then(|e| e.get("message")).and_then(Value::as_str);

    if error_status == Some(RESOURCE_EXHAUSTED)
        || error_message.is_some_and(|m| m.contains("quota"))
    {
        FailureClass::QuotaExceeded
    } else {
        FailureClass::Provider { status }
    }
}

/// Parse a raw error body; anything that is not JSON yields `None`
pub fn parse_error_body(raw: &str) -> Option<Value> {
    serde_json::from_str(raw).ok()
}

/// Provider error message, if the body follows the Gemini envelope
pub fn error_message(body: Option<&Value>) -> Option<String> {
    let envelope: GeminiErrorResponse = serde_json::from_value(body?.clone()).ok()?;
    envelope.error?.message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_429_is_quota() {
        assert_eq!(classify_failure(429, None), FailureClass::QuotaExceeded);
        assert_eq!(
            classify_failure(429, Some(&json!({"unexpected": true}))),
            FailureClass::QuotaExceeded
        );
    }

    #[test]
    fn test_resource_exhausted_status_is_quota() {
        let body = json!({"error": {"code": 403, "status": "RESOURCE_EXHAUSTED", "message": "limit"}});
        assert_eq!(classify_failure(403, Some(&body)), FailureClass::QuotaExceeded);
    }

    #[test]
    fn test_quota_substring_is_case_sensitive() {
        let lower = json!({"error": {"message": "You exceeded your current quota"}});
        assert_eq!(classify_failure(400, Some(&lower)), FailureClass::QuotaExceeded);

        let upper = json!({"error": {"message": "Quota exceeded"}});
        assert_eq!(
            classify_failure(400, Some(&upper)),
            FailureClass::Provider { status: 400 }
        );
    }

    #[test]
    fn test_other_failures_are_provider_errors() {
        assert_eq!(classify_failure(500, None), FailureClass::Provider { status: 500 });

        let body = json!({"error": {"code": 400, "status": "INVALID_ARGUMENT", "message": "bad key"}});
        assert_eq!(
            classify_failure(400, Some(&body)),
            FailureClass::Provider { status: 400 }
        );

        // Loosely typed bodies never break classification
        for body in [json!("text"), json!([1, 2]), json!({"error": "flat"}), json!({"error": {"message": 7}})] {
            assert_eq!(
                classify_failure(502, Some(&body)),
                FailureClass::Provider { status: 502 }
            );
        }
    }

    #[test]
    fn test_parse_error_body() {
        assert!(parse_error_body("<html>Bad Gateway</html>").is_none());
        assert!(parse_error_body("").is_none());

        let body = parse_error_body(r#"{"error":{"message":"boom"}}"#);
        assert_eq!(error_message(body.as_ref()).as_deref(), Some("boom"));
        assert_eq!(error_message(None), None);
    }
}
