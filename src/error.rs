//! Error types for the Stockfighter client.

use thiserror::Error;

/// Top-level error returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure or unparseable body at the network boundary
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response status other than 200
    #[error("Unexpected status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Failure reported by the service in the `error` field
    #[error("Remote error: {0}")]
    Remote(String),

    /// A field was present but had the wrong JSON shape
    #[error("Deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Timestamp shorter than the fixed layout or with non-numeric components
    #[error("\"{0}\" does not look like a datetime string")]
    MalformedTimestamp(String),

    /// Timestamp whose year/month/day is not a calendar date
    #[error("Invalid date in timestamp \"{0}\"")]
    InvalidDate(String),

    /// Unrecognized wire string for an enumerated field
    #[error("Unknown value \"{value}\" for field `{field}`")]
    UnknownEnumValue { field: &'static str, value: String },

    /// Required field absent from the response
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    /// Venue heartbeat echoed a different venue
    #[error("Venue mismatch: requested {requested}, server answered for {actual}")]
    VenueMismatch { requested: String, actual: String },

    /// Level number without an entry in the level table
    #[error("Unknown level {0}")]
    UnknownLevel(u32),

    /// Authenticated endpoint called without an API key
    #[error("Authentication required: no API key configured")]
    AuthenticationRequired,

    /// Invalid client or configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// True when the service itself rejected the request via the `error` field.
    pub fn is_remote(&self) -> bool {
        matches!(self, ApiError::Remote(_))
    }

    /// HTTP status of a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised by a [`Transport`](crate::http::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP/network error from reqwest
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Connection-level failure from a non-reqwest transport
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Response body is not JSON
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
