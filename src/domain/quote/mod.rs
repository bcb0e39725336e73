//! Quote domain: top-of-book summary for one symbol.

mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest quote for a symbol.
///
/// `bid`, `ask` and `last` are 0 when the venue omits them, which it does
/// whenever that side (or the trade tape) is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub venue: String,
    /// Best bid price
    pub bid: u64,
    /// Best ask price
    pub ask: u64,
    /// Aggregate size at the best bid
    pub bid_size: u64,
    /// Aggregate size at the best ask
    pub ask_size: u64,
    /// Aggregate size of all bids
    pub bid_depth: u64,
    /// Aggregate size of all asks
    pub ask_depth: u64,
    /// Price of the last trade
    pub last: u64,
    /// Quantity of the last trade
    pub last_size: u64,
    pub last_trade: DateTime<Utc>,
    pub quote_time: DateTime<Utc>,
}
