//! Wire types for quote responses.

use serde::{Deserialize, Serialize};

/// Response for GET /venues/{venue}/stocks/{symbol}/quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub symbol: Option<String>,
    pub venue: Option<String>,
    pub bid: Option<u64>,
    pub ask: Option<u64>,
    pub bid_size: Option<u64>,
    pub ask_size: Option<u64>,
    pub bid_depth: Option<u64>,
    pub ask_depth: Option<u64>,
    pub last: Option<u64>,
    pub last_size: Option<u64>,
    pub last_trade: Option<String>,
    pub quote_time: Option<String>,
}
