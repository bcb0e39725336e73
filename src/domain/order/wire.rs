//! Wire types for order requests and order status responses.

use crate::shared::{serde_util, Direction, OrderType};
use serde::{Deserialize, Serialize};

/// Request body for POST /venues/{venue}/stocks/{symbol}/orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    pub account: String,
    pub venue: String,
    pub stock: String,
    pub price: u64,
    pub qty: u64,
    pub direction: Direction,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}

/// Response for order placement, cancellation and status lookups.
///
/// Enum fields stay strings here so an unknown value can be reported with
/// its field name during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusResponse {
    pub symbol: Option<String>,
    pub venue: Option<String>,
    pub direction: Option<String>,
    pub original_qty: Option<u64>,
    pub qty: Option<u64>,
    pub price: Option<u64>,
    pub order_type: Option<String>,
    pub id: Option<u64>,
    pub account: Option<String>,
    pub ts: Option<String>,
    #[serde(default, deserialize_with = "serde_util::null_as_empty::deserialize")]
    pub fills: Option<Vec<FillResponse>>,
    pub total_filled: Option<u64>,
    pub open: Option<bool>,
}

/// A single fill within an order status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillResponse {
    pub price: Option<u64>,
    pub qty: Option<u64>,
    pub ts: Option<String>,
}
