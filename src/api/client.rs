//! `StockfighterClient` and its builder, plus the market and trading endpoints.

use crate::domain::order::{wire::OrderStatusResponse, OrderStatus, PlaceOrderRequest};
use crate::domain::orderbook::{wire::OrderbookResponse, OrderBook};
use crate::domain::quote::{wire::QuoteResponse, Quote};
use crate::domain::required;
use crate::domain::stock::wire::{StocksResponse, VenueHeartbeatResponse};
use crate::domain::stock::Stock;
use crate::error::{ApiError, ApiResult};
use crate::http::{response, HttpRequest, Transport};
use crate::network::{DEFAULT_API_URL, DEFAULT_GM_URL, DEFAULT_TIMEOUT_SECS};
use crate::shared::{Direction, OrderType};

#[cfg(feature = "http")]
use crate::http::ReqwestTransport;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Builder for configuring [`StockfighterClient`].
#[derive(Debug, Clone)]
pub struct StockfighterClientBuilder {
    api_url: String,
    gm_url: String,
    api_key: Option<String>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl Default for StockfighterClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StockfighterClientBuilder {
    /// Create a builder pointing at the public service, with no API key.
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            gm_url: DEFAULT_GM_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Set the market API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the game-master base URL.
    pub fn gm_url(mut self, url: impl Into<String>) -> Self {
        self.gm_url = url.into();
        self
    }

    /// Set the API key sent with authenticated requests. An empty key is
    /// treated as no key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build a client on the default reqwest transport.
    #[cfg(feature = "http")]
    pub fn build(self) -> ApiResult<StockfighterClient<ReqwestTransport>> {
        let transport = ReqwestTransport::new(self.timeout, &self.default_headers)?;
        self.build_with_transport(transport)
    }

    /// Build a client on any transport. Timeout and headers are left to the
    /// transport.
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> ApiResult<StockfighterClient<T>> {
        Ok(StockfighterClient {
            transport,
            api_url: normalize_base_url(&self.api_url, "api_url")?,
            gm_url: normalize_base_url(&self.gm_url, "gm_url")?,
            api_key: self.api_key,
        })
    }
}

fn normalize_base_url(url: &str, name: &str) -> ApiResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let scheme_ok = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !scheme_ok || !has_host {
        return Err(ApiError::InvalidParameter(format!(
            "{} must be an absolute http(s) URL, got '{}'",
            name, url
        )));
    }
    Ok(trimmed.to_string())
}

/// Stockfighter REST API client.
///
/// Every method performs one round trip through `T` and either returns a
/// decoded record or fails. The client holds no mutable state and can be
/// shared freely.
#[derive(Debug, Clone)]
pub struct StockfighterClient<T> {
    transport: T,
    pub(crate) api_url: String,
    pub(crate) gm_url: String,
    api_key: Option<String>,
}

#[cfg(feature = "http")]
impl StockfighterClient<ReqwestTransport> {
    /// Create an unauthenticated client against the public service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        StockfighterClientBuilder::new().build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> StockfighterClientBuilder {
        StockfighterClientBuilder::new()
    }
}

impl<T: Transport> StockfighterClient<T> {
    /// Get the market API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the game-master base URL.
    pub fn gm_url(&self) -> &str {
        &self.gm_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Internal request helpers
    // =========================================================================

    /// Attach the API key, failing before any I/O when none is configured.
    pub(crate) fn authenticated(&self, request: HttpRequest) -> ApiResult<HttpRequest> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::AuthenticationRequired)?;
        Ok(request.with_api_key(key))
    }

    /// Send one request and return the validated JSON body.
    pub(crate) async fn round_trip(&self, request: HttpRequest) -> ApiResult<Value> {
        tracing::debug!(
            method = %request.method,
            uri = %request.uri,
            authenticated = request.is_authenticated(),
            "Sending request"
        );
        let raw = self.transport.send(request).await?;
        response::parse_body(raw.status, &raw.body)
    }

    /// Round trip, then decode through wire type `W` into domain type `D`.
    pub(crate) async fn fetch<W, D>(&self, request: HttpRequest) -> ApiResult<D>
    where
        W: DeserializeOwned,
        D: TryFrom<W, Error = ApiError>,
    {
        let json = self.round_trip(request).await?;
        let wire: W = serde_json::from_value(json)?;
        D::try_from(wire)
    }

    fn stock_url(&self, venue: &str, symbol: &str) -> String {
        format!(
            "{}/venues/{}/stocks/{}",
            self.api_url,
            urlencoding::encode(venue),
            urlencoding::encode(symbol)
        )
    }

    // =========================================================================
    // Health endpoints
    // =========================================================================

    /// Check API health.
    ///
    /// Returns `true` whenever the service answers with a valid response; any
    /// failure is returned as an error instead.
    pub async fn heartbeat(&self) -> ApiResult<bool> {
        let url = format!("{}/heartbeat", self.api_url);
        self.round_trip(HttpRequest::get(url)).await?;
        Ok(true)
    }

    /// Check that a venue is up.
    ///
    /// Fails with [`ApiError::VenueMismatch`] if the service answers for a
    /// different venue than the one asked about.
    pub async fn venue_heartbeat(&self, venue: &str) -> ApiResult<bool> {
        let url = format!("{}/venues/{}/heartbeat", self.api_url, urlencoding::encode(venue));
        let json = self.round_trip(HttpRequest::get(url)).await?;
        let wire: VenueHeartbeatResponse = serde_json::from_value(json)?;
        let actual = required(wire.venue, "venue")?;
        if actual != venue {
            return Err(ApiError::VenueMismatch {
                requested: venue.to_string(),
                actual,
            });
        }
        Ok(true)
    }

    // =========================================================================
    // Market data endpoints
    // =========================================================================

    /// List the stocks traded on a venue.
    pub async fn list_stocks(&self, venue: &str) -> ApiResult<Vec<Stock>> {
        let url = format!("{}/venues/{}/stocks", self.api_url, urlencoding::encode(venue));
        self.fetch::<StocksResponse, _>(HttpRequest::get(url)).await
    }

    /// Get the order book for a stock.
    ///
    /// Bids and asks are returned in server order, in separate sequences.
    pub async fn get_orderbook(&self, venue: &str, symbol: &str) -> ApiResult<OrderBook> {
        let url = self.stock_url(venue, symbol);
        self.fetch::<OrderbookResponse, _>(HttpRequest::get(url)).await
    }

    /// Get the latest quote for a stock.
    pub async fn get_quote(&self, venue: &str, symbol: &str) -> ApiResult<Quote> {
        let url = format!("{}/quote", self.stock_url(venue, symbol));
        self.fetch::<QuoteResponse, _>(HttpRequest::get(url)).await
    }

    // =========================================================================
    // Order endpoints (authenticated)
    // =========================================================================

    /// Submit an order request.
    pub async fn submit_order(&self, request: &PlaceOrderRequest) -> ApiResult<OrderStatus> {
        let url = format!("{}/orders", self.stock_url(&request.venue, &request.stock));
        let body = serde_json::to_value(request)?;
        let http_request = self.authenticated(HttpRequest::post(url).with_body(body))?;
        self.fetch::<OrderStatusResponse, _>(http_request).await
    }

    /// Place an order.
    ///
    /// Convenience method that assembles a [`PlaceOrderRequest`] and submits it.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let status = client
    ///     .place_order(
    ///         "EXB123456",
    ///         "TESTEX",
    ///         "FOOBAR",
    ///         5100,
    ///         100,
    ///         Direction::Buy,
    ///         OrderType::Limit,
    ///     )
    ///     .await?;
    /// println!("order {} open: {}", status.id, status.open);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub async fn place_order(
        &self,
        account: &str,
        venue: &str,
        symbol: &str,
        price: u64,
        quantity: u64,
        direction: Direction,
        order_type: OrderType,
    ) -> ApiResult<OrderStatus> {
        let request = PlaceOrderRequest {
            account: account.to_string(),
            venue: venue.to_string(),
            stock: symbol.to_string(),
            price,
            qty: quantity,
            direction,
            order_type,
        };
        self.submit_order(&request).await
    }

    /// Cancel an order.
    ///
    /// The returned status normally has `open == false`; this is not checked.
    pub async fn cancel_order(
        &self,
        venue: &str,
        symbol: &str,
        order_id: u64,
    ) -> ApiResult<OrderStatus> {
        let url = format!("{}/orders/{}", self.stock_url(venue, symbol), order_id);
        let request = self.authenticated(HttpRequest::delete(url))?;
        self.fetch::<OrderStatusResponse, _>(request).await
    }

    /// Get the current status of an order.
    pub async fn get_order_status(
        &self,
        venue: &str,
        symbol: &str,
        order_id: u64,
    ) -> ApiResult<OrderStatus> {
        let url = format!("{}/orders/{}", self.stock_url(venue, symbol), order_id);
        let request = self.authenticated(HttpRequest::get(url))?;
        self.fetch::<OrderStatusResponse, _>(request).await
    }
}
