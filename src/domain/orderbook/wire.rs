//! Wire types for orderbook responses.

use crate::shared::serde_util;
use serde::{Deserialize, Serialize};

/// Response for GET /venues/{venue}/stocks/{symbol}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderbookResponse {
    pub venue: Option<String>,
    pub symbol: Option<String>,
    /// `null` when the side is empty
    #[serde(default, deserialize_with = "serde_util::null_as_empty::deserialize")]
    pub bids: Option<Vec<BookEntryResponse>>,
    /// `null` when the side is empty
    #[serde(default, deserialize_with = "serde_util::null_as_empty::deserialize")]
    pub asks: Option<Vec<BookEntryResponse>>,
    pub ts: Option<String>,
}

/// A single resting order as sent by the venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntryResponse {
    pub price: Option<u64>,
    pub qty: Option<u64>,
    pub is_buy: Option<bool>,
}
