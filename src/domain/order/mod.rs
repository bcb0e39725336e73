//! Order domain: order entry and order status.

mod convert;
pub mod wire;

pub use wire::PlaceOrderRequest;

use crate::shared::{Direction, OrderType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Fill ────────────────────────────────────────────────────────────────────

/// One execution against an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fill {
    pub price: u64,
    pub quantity: u64,
    pub timestamp: DateTime<Utc>,
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// State of an order as reported by the venue.
///
/// Returned by order placement, cancellation and status lookups. `fills`
/// keeps the server's order and `total_filled` is taken as sent, not summed
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatus {
    pub symbol: String,
    pub venue: String,
    pub direction: Direction,
    pub original_quantity: u64,
    /// Quantity still outstanding
    pub quantity: u64,
    /// Limit price in cents
    pub price: u64,
    pub order_type: OrderType,
    pub id: u64,
    pub account: String,
    /// When the order was placed
    pub timestamp: DateTime<Utc>,
    pub fills: Vec<Fill>,
    pub total_filled: u64,
    pub open: bool,
}

impl OrderStatus {
    /// Quantity still working on the book, zero once the order is closed.
    pub fn working_quantity(&self) -> u64 {
        if self.open {
            self.quantity
        } else {
            0
        }
    }
}
