//! API client errors and backend error-message extraction.

use thiserror::Error;

/// Errors raised by calls to the storefront backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure before a response was obtained.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the credential.
    #[error("not authenticated")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend {
        /// HTTP status code of the response.
        status: u16,
        /// The most specific message the backend provided.
        message: String,
    },

    /// A success response body could not be decoded.
    #[error("unexpected response body")]
    Decode(#[source] serde_json::Error),
}

/// Fallback shown when the backend gives nothing usable.
pub(crate) const GENERIC_FAILURE: &str = "Yêu cầu không thành công, vui lòng thử lại";

/// Extract the most specific error text from a backend response body.
///
/// Checked in priority order: a string `message` field, then a string
/// `title` field, then the raw body, then a generic fallback.
#[must_use]
pub fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "title"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                if !text.trim().is_empty() {
                    return text.to_owned();
                }
            }
        }
    }

    if body.trim().is_empty() {
        GENERIC_FAILURE.to_owned()
    } else {
        body.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins_over_title() {
        let body = r#"{"message":"Sản phẩm đã hết hàng","title":"Bad Request"}"#;

        assert_eq!(extract_error_message(body), "Sản phẩm đã hết hàng");
    }

    #[test]
    fn title_used_when_message_absent() {
        let body = r#"{"title":"Bad Request","status":400}"#;

        assert_eq!(extract_error_message(body), "Bad Request");
    }

    #[test]
    fn raw_body_used_when_not_structured() {
        assert_eq!(extract_error_message("plain failure"), "plain failure");
    }

    #[test]
    fn generic_fallback_on_empty_body() {
        assert_eq!(extract_error_message("   "), GENERIC_FAILURE);
    }

    #[test]
    fn blank_message_falls_through_to_title() {
        let body = r#"{"message":"  ","title":"Bad Request"}"#;

        assert_eq!(extract_error_message(body), "Bad Request");
    }
}
