/// Error types for the Overhang client
use crate::session_form::SessionFormError;
use overhang_utils::error::DateError;
use serde_json::Value;
use thiserror::Error;

/// Main error type for Overhang client operations.
///
/// Every variant is recoverable: views render it inline and the user retries
/// by hand. Nothing is retried automatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverhangError {
    /// Connection failure before any HTTP status was received
    #[error("Network error: {0}")]
    Network(String),

    /// The per-request timeout elapsed
    #[error("Request timed out")]
    Timeout,

    /// Missing, invalid or expired bearer token (401/403)
    #[error("Not authorized: {}", detail_or(.0, "authorization failed"))]
    Unauthorized(Option<String>),

    /// The backend rejected a submission (400/422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown location slug or session id (404)
    #[error("Not found: {}", detail_or(.0, "resource not found"))]
    NotFound(Option<String>),

    /// Any other non-success status
    #[error("HTTP {status}: {}", detail_or(.detail, "request failed"))]
    Status { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Client-side form validation, raised before any network call
    #[error(transparent)]
    Form(#[from] SessionFormError),

    /// A date could not be parsed
    #[error(transparent)]
    Date(#[from] DateError),
}

fn detail_or<'a>(detail: &'a Option<String>, fallback: &'a str) -> &'a str {
    detail.as_deref().unwrap_or(fallback)
}

impl OverhangError {
    /// Build the error for a non-success status and its (possibly empty) body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(flatten_detail));
        match status {
            401 | 403 => OverhangError::Unauthorized(detail),
            404 => OverhangError::NotFound(detail),
            400 | 422 => {
                OverhangError::Validation(detail.unwrap_or_else(|| "Validation error".to_string()))
            }
            _ => OverhangError::Status { status, detail },
        }
    }

    /// Backend-provided detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            OverhangError::Unauthorized(d) | OverhangError::NotFound(d) => d.as_deref(),
            OverhangError::Status { detail, .. } => detail.as_deref(),
            OverhangError::Validation(d) => Some(d),
            _ => None,
        }
    }

    /// Inline message for a view: the backend detail or client-side form
    /// message when present, otherwise the view's own fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            OverhangError::Form(e) => e.to_string(),
            other => other
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, OverhangError::Unauthorized(_))
    }
}

/// Flatten a FastAPI-style `detail`: a string is used as is, a list of
/// field errors becomes their messages joined with ", ".
pub fn flatten_detail(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .or_else(|| item.get("message"))
                        .and_then(Value::as_str)
                        .unwrap_or("Validation error")
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Type alias for Results using OverhangError
pub type Result<T> = std::result::Result<T, OverhangError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_string_detail() {
        assert_eq!(
            flatten_detail(&json!("Incorrect username or password")),
            Some("Incorrect username or password".to_string())
        );
    }

    #[test]
    fn test_flatten_list_detail() {
        let detail = json!([
            {"loc": ["body", "grades"], "msg": "List should have at least 1 item"},
            {"message": "Grade must be one of: VB, V0"},
            {"type": "missing"}
        ]);
        assert_eq!(
            flatten_detail(&detail).unwrap(),
            "List should have at least 1 item, Grade must be one of: VB, V0, Validation error"
        );
    }

    #[test]
    fn test_status_mapping() {
        let err = OverhangError::from_status(401, r#"{"detail": "Could not validate credentials"}"#);
        assert_eq!(
            err,
            OverhangError::Unauthorized(Some("Could not validate credentials".to_string()))
        );
        assert!(err.is_unauthorized());

        let err = OverhangError::from_status(404, "not json");
        assert_eq!(err, OverhangError::NotFound(None));
        assert_eq!(err.user_message("Failed to load location data"), "Failed to load location data");

        let err = OverhangError::from_status(422, r#"{"detail": [{"msg": "bad date"}]}"#);
        assert_eq!(err.user_message("Failed to create session"), "bad date");

        let err = OverhangError::from_status(500, "");
        assert_eq!(err, OverhangError::Status { status: 500, detail: None });
    }

    #[test]
    fn test_form_error_message_wins_over_fallback() {
        let err: OverhangError = SessionFormError::NoLocation.into();
        assert_eq!(err.user_message("Failed to create session"), "Please select a location");
    }
}
