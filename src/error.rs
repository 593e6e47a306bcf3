//! Failures at the backend boundary.
//!
//! `Display` of every variant is the text shown to the user.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// Collection fetch answered with a non-2xx status
    #[error("Failed to fetch products: {0}")]
    FetchStatus(String),

    /// Collection body was not a product array
    #[error("Failed to decode products: {0}")]
    Decode(String),

    /// Review rejected with a server-provided message
    #[error("{0}")]
    Rejected(String),

    /// Review rejected without a usable message
    #[error("Failed to submit review: {0}")]
    SubmitStatus(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Status text as reported, or the numeric code when the transport omits it (HTTP/2).
fn status_label(status: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        status.to_string()
    } else {
        status_text.to_string()
    }
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn fetch_status(status: u16, status_text: &str) -> Self {
        ApiError::FetchStatus(status_label(status, status_text))
    }

    /// Maps a failed review POST to an error, preferring `{"message": ...}` from the body.
    pub fn submit_status(status: u16, status_text: &str, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { message: Some(message) }) if !message.is_empty() => {
                ApiError::Rejected(message)
            }
            _ => ApiError::SubmitStatus(status_label(status, status_text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_used_verbatim() {
        let err = ApiError::submit_status(
            500,
            "Internal Server Error",
            r#"{"message":"Server error occurred"}"#,
        );
        assert_eq!(err.to_string(), "Server error occurred");
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = ApiError::submit_status(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(err.to_string(), "Failed to submit review: Internal Server Error");

        let err = ApiError::submit_status(400, "Bad Request", r#"{"message":""}"#);
        assert_eq!(err.to_string(), "Failed to submit review: Bad Request");
    }

    #[test]
    fn empty_status_text_uses_code() {
        assert_eq!(
            ApiError::fetch_status(503, "").to_string(),
            "Failed to fetch products: 503"
        );
    }

    #[test]
    fn network_error_keeps_transport_text() {
        assert_eq!(ApiError::network("Network error").to_string(), "Network error");
    }
}
