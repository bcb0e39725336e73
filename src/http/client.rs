//! Default transport: `ReqwestTransport`.

use crate::error::{ApiError, ApiResult, TransportError};
use crate::http::{HttpRequest, Method, RawResponse, Transport};
use crate::network::AUTH_HEADER;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout and extra default headers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] for a header that is not valid
    /// HTTP, or [`ApiError::Transport`] if the client cannot be initialized.
    pub fn new(timeout: Duration, extra_headers: &[(String, String)]) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in extra_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.client.request(method, &request.uri);
        if let Some(key) = &request.api_key {
            req = req.header(AUTH_HEADER, key);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        tracing::debug!(status, bytes = body.len(), uri = %request.uri, "Received response");

        Ok(RawResponse { status, body })
    }
}
