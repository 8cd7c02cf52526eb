//! Error types for Fortnite-API operations.
//!
//! [`Error`] is the single root of the taxonomy: every failure the clients can
//! surface is one of its variants, so `match` on it (or the `is_*` helpers) is
//! how callers branch on failure kind instead of parsing status codes.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Details of a non-success HTTP response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HttpErrorDetail {
    /// HTTP status code returned by the service.
    pub status: u16,
    /// Error message extracted from the response body, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Raw JSON body of the response, if it was JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl HttpErrorDetail {
    /// Create a detail from a status code and optional message.
    #[must_use]
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self {
            status,
            message,
            data: None,
        }
    }

    /// Attach the raw response body.
    #[must_use]
    pub fn with_data(mut self, data: Option<serde_json::Value>) -> Self {
        self.data = data;
        self
    }
}

impl fmt::Display for HttpErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} ({})", message, self.status),
            None => write!(f, "status {}", self.status),
        }
    }
}

/// Main error type for Fortnite-API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested resource does not exist (404).
    #[error("Not found: {0}")]
    NotFound(HttpErrorDetail),

    /// The caller may not access the resource (403).
    #[error("Forbidden: {0}")]
    Forbidden(HttpErrorDetail),

    /// The API key is missing or invalid for a key-gated endpoint (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(HttpErrorDetail),

    /// The caller exceeded the service's request quota (429).
    #[error("Rate limited: {0}")]
    RateLimited(HttpErrorDetail),

    /// The service is down or answered with an unexpected 5xx.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(HttpErrorDetail),

    /// Any other non-success status.
    #[error("HTTP error: {0}")]
    HttpError(HttpErrorDetail),

    /// A key-gated endpoint was called without an API key configured.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// A beta endpoint was called on a client without beta access enabled.
    #[error("Beta access not enabled: {0}")]
    BetaAccessNotEnabled(String),

    /// An unexpected failure occurred while processing a beta endpoint.
    #[error("Unknown error while accessing a beta endpoint: {original}")]
    BetaUnknown {
        /// The originating error.
        #[source]
        original: Box<Error>,
    },

    /// The payload could not be turned into the expected object.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection-level failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for Fortnite-API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::RateLimited(_) => "RATE_LIMITED",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::MissingApiKey(_) => "MISSING_API_KEY",
            Self::BetaAccessNotEnabled(_) => "BETA_ACCESS_NOT_ENABLED",
            Self::BetaUnknown { .. } => "BETA_UNKNOWN",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// HTTP status code behind this error, when it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(detail)
            | Self::Forbidden(detail)
            | Self::Unauthorized(detail)
            | Self::RateLimited(detail)
            | Self::ServiceUnavailable(detail)
            | Self::HttpError(detail) => Some(detail.status),
            Self::BetaUnknown { original } => original.status(),
            _ => None,
        }
    }

    /// True for the Unauthorized class: a 401 from the service, or a key-gated
    /// call rejected locally because no API key was configured.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::MissingApiKey(_))
    }

    /// True if the resource does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True if the caller was rate limited.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Wrap this error as the cause of a beta endpoint failure.
    ///
    /// Errors that already describe a remote or local condition precisely
    /// (status-mapped errors, missing beta access) pass through unchanged.
    #[must_use]
    pub fn into_beta(self) -> Self {
        match self {
            Self::MalformedResponse(_) | Self::Timeout(_) | Self::Transport(_) => Self::BetaUnknown {
                original: Box::new(self),
            },
            other => other,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
