//! Conversion: OrderbookResponse → OrderBook (TryFrom + validation).

use super::wire;
use super::{OrderBook, OrderBookEntry};
use crate::domain::required;
use crate::error::{ApiError, ApiResult};
use crate::shared::parse_timestamp;

impl TryFrom<wire::BookEntryResponse> for OrderBookEntry {
    type Error = ApiError;

    fn try_from(source: wire::BookEntryResponse) -> ApiResult<Self> {
        Ok(OrderBookEntry {
            price: required(source.price, "price")?,
            quantity: required(source.qty, "qty")?,
            is_buy: required(source.is_buy, "isBuy")?,
        })
    }
}

impl TryFrom<wire::OrderbookResponse> for OrderBook {
    type Error = ApiError;

    fn try_from(source: wire::OrderbookResponse) -> ApiResult<Self> {
        let bids = entries(required(source.bids, "bids")?)?;
        let asks = entries(required(source.asks, "asks")?)?;

        Ok(OrderBook {
            venue: required(source.venue, "venue")?,
            symbol: required(source.symbol, "symbol")?,
            bids,
            asks,
            timestamp: parse_timestamp(&required(source.ts, "ts")?)?,
        })
    }
}

fn entries(side: Vec<wire::BookEntryResponse>) -> ApiResult<Vec<OrderBookEntry>> {
    side.into_iter().map(OrderBookEntry::try_from).collect()
}
