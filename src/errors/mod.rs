//! Error types for the Gitee client.

use crate::pagination::ResponseMeta;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for Gitee operations.
pub type GiteeResult<T> = Result<T, GiteeError>;

/// Error kinds for categorizing Gitee errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiteeErrorKind {
    // Configuration errors
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid configuration.
    InvalidConfiguration,

    // Request construction errors
    /// Invalid parameter (path, query string or body could not be encoded).
    InvalidParameter,
    /// A required path parameter was empty.
    MissingParameter,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,
    /// Any other transport failure.
    Network,

    // API errors
    /// Bad request (400).
    BadRequest,
    /// Missing or bad credentials (401).
    Unauthorized,
    /// Access forbidden (403).
    Forbidden,
    /// Resource not found (404).
    NotFound,
    /// Resource conflict (409).
    Conflict,
    /// Unprocessable entity (422).
    UnprocessableEntity,
    /// Too many requests (429).
    RateLimited,
    /// Server-side failure (5xx).
    ServerError,
    /// Any other non-2xx status.
    Unknown,

    // Response errors
    /// Failed to deserialize a successful response.
    DeserializationError,
}

/// Broad error category, one per failure stage of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The client could not be configured.
    Configuration,
    /// The request could not be built; nothing was sent.
    Request,
    /// The request was sent but the transport failed.
    Network,
    /// The server answered with a non-2xx status.
    Api,
    /// The server answered 2xx with a body that could not be decoded.
    Decode,
}

impl GiteeErrorKind {
    /// Returns the category this kind belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBaseUrl | Self::InvalidConfiguration => ErrorCategory::Configuration,
            Self::InvalidParameter | Self::MissingParameter => ErrorCategory::Request,
            Self::ConnectionFailed | Self::Timeout | Self::Network => ErrorCategory::Network,
            Self::DeserializationError => ErrorCategory::Decode,
            Self::BadRequest
            | Self::Unauthorized
            | Self::Forbidden
            | Self::NotFound
            | Self::Conflict
            | Self::UnprocessableEntity
            | Self::RateLimited
            | Self::ServerError
            | Self::Unknown => ErrorCategory::Api,
        }
    }

    /// Maps an HTTP status code to an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for GiteeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::InvalidParameter => write!(f, "invalid_parameter"),
            Self::MissingParameter => write!(f, "missing_parameter"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::Network => write!(f, "network"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::UnprocessableEntity => write!(f, "unprocessable_entity"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError => write!(f, "server_error"),
            Self::Unknown => write!(f, "unknown"),
            Self::DeserializationError => write!(f, "deserialization_error"),
        }
    }
}

/// Error payload returned by the Gitee API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field-level validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    /// Link to the API documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

/// A single field-level validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Resource the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Offending field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Gitee API error with detailed information.
#[derive(Error, Debug)]
pub struct GiteeError {
    /// Error kind.
    kind: GiteeErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Decoded error payload.
    body: Option<ApiErrorBody>,
    /// Response metadata received before the failure.
    response: Option<ResponseMeta>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for GiteeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl GiteeError {
    /// Creates a new Gitee error.
    pub fn new(kind: GiteeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            body: None,
            response: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the decoded error payload.
    pub fn with_body(mut self, body: ApiErrorBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches the response metadata.
    pub fn with_response(mut self, response: ResponseMeta) -> Self {
        self.response = Some(response);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> GiteeErrorKind {
        self.kind
    }

    /// Gets the error category.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the decoded error payload.
    pub fn body(&self) -> Option<&ApiErrorBody> {
        self.body.as_ref()
    }

    /// Gets the response metadata, if a response was received.
    pub fn response(&self) -> Option<&ResponseMeta> {
        self.response.as_ref()
    }

    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    /// Creates an error from a non-2xx status and the raw response body.
    pub fn from_response(status: u16, raw_body: &[u8], response: ResponseMeta) -> Self {
        let kind = GiteeErrorKind::from_status(status);
        let body = serde_json::from_slice::<ApiErrorBody>(raw_body).ok();

        let message = body
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| format!("HTTP {} error", status));

        let mut error = Self::new(kind, message)
            .with_status(status)
            .with_response(response);
        if let Some(body) = body {
            error = error.with_body(body);
        }
        error
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GiteeErrorKind::InvalidConfiguration, message)
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(GiteeErrorKind::InvalidParameter, message)
    }

    /// Creates a missing parameter error for the named path parameter.
    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            GiteeErrorKind::MissingParameter,
            format!("`{}` must not be empty", name),
        )
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(GiteeErrorKind::DeserializationError, message)
    }
}

/// Maps a reqwest transport failure to a network error.
impl From<reqwest::Error> for GiteeError {
    fn from(e: reqwest::Error) -> Self {
        // The URL may carry the access token.
        let e = e.without_url();
        let kind = if e.is_timeout() {
            GiteeErrorKind::Timeout
        } else if e.is_connect() {
            GiteeErrorKind::ConnectionFailed
        } else if e.is_builder() {
            GiteeErrorKind::InvalidParameter
        } else {
            GiteeErrorKind::Network
        };
        let message = format!("Request failed: {}", e);
        Self::new(kind, message).with_cause(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    fn meta(status: u16) -> ResponseMeta {
        let url = url::Url::parse("https://gitee.com/api/v5/user").unwrap();
        ResponseMeta::new(status, HeaderMap::new(), &url)
    }

    #[test]
    fn test_error_display() {
        let error = GiteeError::new(GiteeErrorKind::NotFound, "Not Found Project").with_status(404);

        let display = format!("{}", error);
        assert!(display.contains("not_found"));
        assert!(display.contains("Not Found Project"));
        assert!(display.contains("404"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            GiteeErrorKind::MissingParameter.category(),
            ErrorCategory::Request
        );
        assert_eq!(GiteeErrorKind::Timeout.category(), ErrorCategory::Network);
        assert_eq!(GiteeErrorKind::Conflict.category(), ErrorCategory::Api);
        assert_eq!(
            GiteeErrorKind::DeserializationError.category(),
            ErrorCategory::Decode
        );
        assert_eq!(
            GiteeErrorKind::InvalidBaseUrl.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_from_response_with_json_body() {
        let raw = br#"{"message":"Not Found Project"}"#;
        let error = GiteeError::from_response(404, raw, meta(404));

        assert_eq!(error.kind(), GiteeErrorKind::NotFound);
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.message(), "Not Found Project");
        assert_eq!(
            error.body().and_then(|b| b.message.as_deref()),
            Some("Not Found Project")
        );
        assert_eq!(error.response().map(|r| r.status), Some(404));
    }

    #[test]
    fn test_from_response_with_html_body() {
        let error = GiteeError::from_response(502, b"<html>bad gateway</html>", meta(502));

        assert_eq!(error.kind(), GiteeErrorKind::ServerError);
        assert!(error.body().is_none());
        assert_eq!(error.message(), "HTTP 502 error");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(GiteeErrorKind::from_status(401), GiteeErrorKind::Unauthorized);
        assert_eq!(GiteeErrorKind::from_status(422), GiteeErrorKind::UnprocessableEntity);
        assert_eq!(GiteeErrorKind::from_status(503), GiteeErrorKind::ServerError);
        assert_eq!(GiteeErrorKind::from_status(418), GiteeErrorKind::Unknown);
    }
}
