//! Gateway error taxonomy.
//!
//! Every failure crossing the gateway boundary is an [`ApiError`]; raw
//! transport errors never escape.

use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// No token, or the backend rejected the token (401).
    Unauthenticated,
    /// Authenticated but lacking permission, server-confirmed (403).
    Forbidden,
    /// Resource does not exist (404).
    NotFound,
    /// Any other 4xx (bad input, field-level messages).
    Validation,
    /// 5xx from the backend.
    ServerError,
    /// Transport failure; no response was received.
    Network,
}

impl ApiErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::Unauthenticated => "unauthenticated",
            ApiErrorKind::Forbidden => "forbidden",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::Validation => "validation",
            ApiErrorKind::ServerError => "server error",
            ApiErrorKind::Network => "network",
        }
    }
}

impl core::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized backend/transport failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// Human-readable message, taken from the backend's `message` field
    /// when present, else a generic description.
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthenticated, message)
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.kind == ApiErrorKind::Unauthenticated
    }

    /// Classify a non-success HTTP status. `message` is the backend's
    /// `message` body field, when it sent one.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let kind = match status {
            StatusCode::UNAUTHORIZED => ApiErrorKind::Unauthenticated,
            StatusCode::FORBIDDEN => ApiErrorKind::Forbidden,
            StatusCode::NOT_FOUND => ApiErrorKind::NotFound,
            s if s.is_client_error() => ApiErrorKind::Validation,
            s if s.is_server_error() => ApiErrorKind::ServerError,
            // Non-success, non-4xx/5xx (e.g. an unexpected 3xx).
            _ => ApiErrorKind::ServerError,
        };
        let message =
            message.unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
        Self { kind, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            // A response arrived but its body was not what we expected.
            Self::new(ApiErrorKind::ServerError, format!("invalid response body: {err}"))
        } else {
            Self::new(ApiErrorKind::Network, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_status_carries_the_backend_message() {
        let err = ApiError::from_status(StatusCode::FORBIDDEN, Some("forbidden".to_string()));
        assert_eq!(err.kind, ApiErrorKind::Forbidden);
        assert_eq!(err.message, "forbidden");
    }

    #[test]
    fn status_without_message_falls_back_to_a_generic_description() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, None);
        assert_eq!(err.kind, ApiErrorKind::ServerError);
        assert_eq!(err.message, "request failed with status 502");
    }

    #[test]
    fn status_classification() {
        let cases = [
            (StatusCode::UNAUTHORIZED, ApiErrorKind::Unauthenticated),
            (StatusCode::FORBIDDEN, ApiErrorKind::Forbidden),
            (StatusCode::NOT_FOUND, ApiErrorKind::NotFound),
            (StatusCode::BAD_REQUEST, ApiErrorKind::Validation),
            (StatusCode::UNPROCESSABLE_ENTITY, ApiErrorKind::Validation),
            (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorKind::ServerError),
        ];
        for (status, kind) in cases {
            assert_eq!(ApiError::from_status(status, None).kind, kind);
        }
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = ApiError::new(ApiErrorKind::Validation, "name is required");
        assert_eq!(err.to_string(), "validation: name is required");
    }
}
