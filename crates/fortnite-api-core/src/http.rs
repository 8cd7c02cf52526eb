//! Request description and response classification shared by both clients.
//!
//! Nothing here performs I/O. An [`Endpoint`] says what to request and how to
//! turn the answer into a model; a [`ResponseClassifier`] decides, for each
//! [`RawResponse`], whether the call succeeded, should be retried after a
//! delay, or failed. The asynchronous and the blocking client only differ in
//! how they send requests and how they sleep between attempts.

use crate::client::RetryPolicy;
use crate::error::{Error, HttpErrorDetail, Result};
use crate::flags::ResponseFlags;
use crate::query::QueryParams;
use crate::time::parse_time;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Header carrying the instant a rate limit window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "X-Ratelimit-Reset";

/// Message used when an error response carries none.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error message not provided!";

/// Local requirements checked before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone may call the endpoint.
    Public,
    /// The client must be configured with an API key.
    ApiKey,
    /// The client must have beta access enabled.
    Beta,
}

/// Builds a model from an unwrapped payload.
pub type Constructor<T> = fn(Value, ResponseFlags) -> Result<T>;

/// One logical fetch: route, query and the constructor for its payload.
pub struct Endpoint<T> {
    path: String,
    query: QueryParams,
    access: Access,
    constructor: Constructor<T>,
}

impl<T> Endpoint<T> {
    /// Public endpoint at `path`.
    pub fn new(path: impl Into<String>, constructor: Constructor<T>) -> Self {
        Self {
            path: path.into(),
            query: QueryParams::new(),
            access: Access::Public,
            constructor,
        }
    }

    /// Replace the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Set the local access requirement.
    #[must_use]
    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Route path, relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters.
    #[must_use]
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Access requirement.
    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Fail locally if the client cannot call this endpoint.
    ///
    /// # Errors
    ///
    /// [`Error::MissingApiKey`] for key-gated endpoints without a key and
    /// [`Error::BetaAccessNotEnabled`] for beta endpoints without beta access.
    pub fn check_access(&self, has_api_key: bool, beta: bool) -> Result<()> {
        match self.access {
            Access::ApiKey if !has_api_key => Err(Error::MissingApiKey(format!(
                "{} requires an API key",
                self.path
            ))),
            Access::Beta if !beta => Err(Error::BetaAccessNotEnabled(format!(
                "{} is a beta endpoint; enable beta access on the client to call it",
                self.path
            ))),
            _ => Ok(()),
        }
    }

    /// Apply the beta wrapping policy to a failure of this endpoint.
    #[must_use]
    pub fn map_error(&self, err: Error) -> Error {
        if self.access == Access::Beta {
            err.into_beta()
        } else {
            err
        }
    }

    /// Decode a successful body and construct the model.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] if the body is not JSON or the payload
    /// does not fit the model; wrapped per [`map_error`](Self::map_error).
    pub fn construct(&self, body: &[u8], flags: ResponseFlags) -> Result<T> {
        decode_json(body)
            .and_then(|payload| (self.constructor)(payload, flags))
            .map_err(|e| self.map_error(e))
    }
}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// Percent-encode a caller-supplied value so it stays one path segment.
#[must_use]
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Parse a JSON body and unwrap its `data` envelope.
///
/// # Errors
///
/// [`Error::MalformedResponse`] if the body is not JSON.
pub fn decode_json(body: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(unwrap_envelope(value))
}

/// Return the `data` member of a `{"status": .., "data": ..}` envelope, or the
/// body itself when it is not enveloped.
#[must_use]
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Error message of an error body, looked up in the body and its `data`.
#[must_use]
pub fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("data").and_then(|data| data.get("error")))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Map a non-success status to the error taxonomy.
#[must_use]
pub fn error_for_status(status: u16, body: Option<Value>) -> Error {
    let message = body
        .as_ref()
        .and_then(error_message)
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    let detail = HttpErrorDetail::new(status, Some(message)).with_data(body);

    match status {
        401 => Error::Unauthorized(detail),
        403 => Error::Forbidden(detail),
        404 => Error::NotFound(detail),
        429 => Error::RateLimited(detail),
        500..=599 => Error::ServiceUnavailable(detail),
        _ => Error::HttpError(detail),
    }
}

/// The parts of an HTTP response the classifier looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Status code.
    pub status: u16,
    /// Value of the rate limit reset header, if present.
    pub rate_limit_reset: Option<String>,
    /// Full response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            rate_limit_reset: None,
            body: body.into(),
        }
    }

    /// Attach a rate limit reset header value.
    #[must_use]
    pub fn with_rate_limit_reset(mut self, reset: impl Into<String>) -> Self {
        self.rate_limit_reset = Some(reset.into());
        self
    }

    fn json_body(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Why a request is being retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryReason {
    /// Waiting for a rate limit window to reset.
    RateLimited,
    /// Transient server error with this status.
    ServerError(u16),
}

/// Outcome of one attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    /// Success; carries the body.
    Done(Vec<u8>),
    /// Sleep for `delay`, then send the request again.
    Retry {
        /// How long to wait.
        delay: Duration,
        /// Why.
        reason: RetryReason,
    },
    /// Give up with this error.
    Fail(Error),
}

/// Decides what to do with each response, per [`RetryPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseClassifier {
    policy: RetryPolicy,
}

impl ResponseClassifier {
    /// Classifier using `policy`.
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// The retry policy in use.
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Classify the response to attempt number `attempt` (starting at 1).
    #[must_use]
    pub fn classify(&self, attempt: u32, response: RawResponse, now: DateTime<Utc>) -> Disposition {
        let status = response.status;
        if (200..300).contains(&status) {
            return Disposition::Done(response.body);
        }

        let exhausted = attempt >= self.policy.max_attempts();
        match status {
            429 => {
                let Some(reset) = response.rate_limit_reset.as_deref() else {
                    return Disposition::Fail(error_for_status(status, response.json_body()));
                };
                let reset = match parse_time(reset) {
                    Ok(reset) => reset,
                    Err(e) => {
                        warn!(reset, error = %e, "Unreadable rate limit reset header");
                        return Disposition::Fail(error_for_status(status, response.json_body()));
                    }
                };
                if exhausted {
                    warn!(attempt, "Still rate limited after final attempt");
                    return Disposition::Fail(error_for_status(status, response.json_body()));
                }

                let wait = (reset - now).to_std().unwrap_or(Duration::ZERO);
                Disposition::Retry {
                    delay: self.policy.rate_limit_wait(wait),
                    reason: RetryReason::RateLimited,
                }
            }
            500 | 502 | 504 => {
                if exhausted {
                    warn!(attempt, status, "Server error persisted after final attempt");
                    let detail = HttpErrorDetail::new(status, Some("Service unavailable".to_string()))
                        .with_data(response.json_body());
                    return Disposition::Fail(Error::ServiceUnavailable(detail));
                }
                Disposition::Retry {
                    delay: self.policy.delay_for_attempt(attempt),
                    reason: RetryReason::ServerError(status),
                }
            }
            _ => Disposition::Fail(error_for_status(status, response.json_body())),
        }
    }
}
