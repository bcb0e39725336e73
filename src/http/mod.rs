//! HTTP layer: the transport capability the client calls through.
//!
//! The client never talks to the network directly. It builds an
//! [`HttpRequest`], hands it to a [`Transport`], and validates the
//! [`RawResponse`] with [`response::parse_body`]. [`ReqwestTransport`] is the
//! default; tests substitute a stub.

#[cfg(feature = "http")]
pub mod client;
pub mod response;

#[cfg(feature = "http")]
pub use client::ReqwestTransport;

use crate::error::TransportError;
use std::future::Future;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single request to send.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Fully-qualified URL
    pub uri: String,
    /// JSON body, `None` for bodiless requests
    pub body: Option<serde_json::Value>,
    /// Credential for the auth header, `None` for public endpoints
    pub api_key: Option<String>,
}

impl HttpRequest {
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            uri: uri.into(),
            body: None,
            api_key: None,
        }
    }

    pub fn post(uri: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(uri)
        }
    }

    pub fn delete(uri: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            ..Self::get(uri)
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a credential. An empty key is treated as no key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Status and body text of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One network round trip per call, no retries.
///
/// Implementations must attach `request.api_key`, when present, as the
/// [`AUTH_HEADER`](crate::network::AUTH_HEADER) header.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
