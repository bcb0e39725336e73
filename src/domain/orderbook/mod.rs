//! Orderbook domain: resting bids and asks for one symbol.

mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One resting order in the book.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderBookEntry {
    /// Price in cents
    pub price: u64,
    pub quantity: u64,
    pub is_buy: bool,
}

/// Snapshot of a symbol's order book.
///
/// `bids` and `asks` keep the order the venue sent them in; nothing is
/// re-sorted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub venue: String,
    pub symbol: String,
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
    pub timestamp: DateTime<Utc>,
}

impl OrderBook {
    /// True when neither side has resting orders.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
