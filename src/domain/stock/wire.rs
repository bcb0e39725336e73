//! Wire types for venue and stock listing responses.

use serde::{Deserialize, Serialize};

/// Response for GET /venues/{venue}/heartbeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueHeartbeatResponse {
    pub venue: Option<String>,
}

/// Response for GET /venues/{venue}/stocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StocksResponse {
    pub symbols: Option<Vec<StockResponse>>,
}

/// A single entry of the stock listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockResponse {
    pub symbol: Option<String>,
    pub name: Option<String>,
}
