//! API error types for the Fortnite REST API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Maximum number of body bytes kept in a [`ApiError::Deserialize`] excerpt.
const BODY_EXCERPT_LEN: usize = 256;

/// API-specific error type for the Fortnite REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure from reqwest (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid request parameters (400)
    #[error("Bad request: {0}")]
    BadRequest(ErrorResponse),

    /// Missing or invalid API key (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    /// Key lacks access to the resource (403)
    #[error("Permission denied: {0}")]
    Forbidden(ErrorResponse),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(ErrorResponse),

    /// Too many requests (429)
    #[error("Rate limited: {0}")]
    RateLimited(ErrorResponse),

    /// Server-side error (5xx)
    #[error("Server error {0}: {1}")]
    ServerError(u16, ErrorResponse),

    /// Any other non-2xx status
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, ErrorResponse),

    /// Body was not valid JSON, or did not match the expected schema
    #[error("Deserialization error: {source} (body: {body_excerpt})")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        body_excerpt: String,
    },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Endpoint requires an API key and none was configured
    #[error("Endpoint '{0}' requires an API key")]
    MissingApiKey(&'static str),

    /// Beta endpoint called without enabling beta access on the builder
    #[error("Endpoint '{0}' is a beta endpoint and beta access is not enabled")]
    BetaAccessNotEnabled(&'static str),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The HTTP exchange itself failed.
    Transport,
    /// The server answered with a non-2xx status.
    Status,
    /// The response body could not be decoded.
    Deserialize,
    /// Rejected before any request was sent.
    Local,
}

impl ApiError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) => ErrorKind::Transport,
            Self::BadRequest(_)
            | Self::Unauthorized(_)
            | Self::Forbidden(_)
            | Self::NotFound(_)
            | Self::RateLimited(_)
            | Self::ServerError(..)
            | Self::UnexpectedStatus(..) => ErrorKind::Status,
            Self::Deserialize { .. } => ErrorKind::Deserialize,
            Self::InvalidParameter(_) | Self::MissingApiKey(_) | Self::BetaAccessNotEnabled(_) => {
                ErrorKind::Local
            }
        }
    }

    /// HTTP status code, for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RateLimited(_) => Some(429),
            Self::ServerError(code, _) | Self::UnexpectedStatus(code, _) => Some(*code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Map a non-2xx status and its decoded body to an error.
    pub(crate) fn from_status(status: StatusCode, response: ErrorResponse) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest(response),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(response),
            StatusCode::FORBIDDEN => Self::Forbidden(response),
            StatusCode::NOT_FOUND => Self::NotFound(response),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(response),
            _ if status.is_server_error() => Self::ServerError(status.as_u16(), response),
            _ => Self::UnexpectedStatus(status.as_u16(), response),
        }
    }

    pub(crate) fn deserialize(source: serde_json::Error, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let body_excerpt = match text.char_indices().nth(BODY_EXCERPT_LEN) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.into_owned(),
        };
        Self::Deserialize {
            source,
            body_excerpt,
        }
    }
}

/// Error body returned by the API, e.g. `{"status": 404, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ErrorResponse {
    /// Status echoed in the body
    #[serde(default)]
    pub status: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub error: Option<String>,
    /// Message field some endpoints send instead of `error`
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Wrap a raw, non-JSON body.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            status: None,
            error: (!text.is_empty()).then_some(text),
            message: None,
        }
    }

    /// Get the error message, preferring `error` over `message`.
    pub fn get_message(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Unknown error")
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        let body = ErrorResponse::from_text("nope");
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, body.clone()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, body.clone()),
            ApiError::RateLimited(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, body.clone()),
            ApiError::ServerError(502, _)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, body),
            ApiError::UnexpectedStatus(418, _)
        ));
    }

    #[test]
    fn test_kind_and_status() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, ErrorResponse::from_text(""));
        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.status(), Some(401));

        let err = ApiError::MissingApiKey("stats_br");
        assert_eq!(err.kind(), ErrorKind::Local);
        assert_eq!(err.status(), None);

        let err = ApiError::BetaAccessNotEnabled("material_instances");
        assert_eq!(err.kind(), ErrorKind::Local);
        assert!(err.to_string().contains("material_instances"));
    }

    #[test]
    fn test_error_response_message() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"status": 404, "error": "the requested cosmetic was not found"}"#)
                .unwrap();
        assert_eq!(parsed.status, Some(404));
        assert_eq!(parsed.get_message(), "the requested cosmetic was not found");

        assert_eq!(ErrorResponse::from_text("").get_message(), "Unknown error");
    }

    #[test]
    fn test_error_response_with_error_and_message() {
        let parsed: ErrorResponse = serde_json::from_str(
            r#"{"status": 400, "error": "invalid language", "message": "see docs"}"#,
        )
        .unwrap();
        assert_eq!(parsed.error.as_deref(), Some("invalid language"));
        assert_eq!(parsed.message.as_deref(), Some("see docs"));
        assert_eq!(parsed.get_message(), "invalid language");

        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"status": 400, "message": "see docs"}"#).unwrap();
        assert_eq!(parsed.get_message(), "see docs");
    }

    #[test]
    fn test_deserialize_excerpt_truncated() {
        let body = "x".repeat(1000);
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        match ApiError::deserialize(source, body.as_bytes()) {
            ApiError::Deserialize { body_excerpt, .. } => {
                assert_eq!(body_excerpt.len(), BODY_EXCERPT_LEN + 3);
                assert!(body_excerpt.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
