//! Conversions: OrderStatusResponse → OrderStatus.

use super::wire;
use super::{Fill, OrderStatus};
use crate::domain::required;
use crate::error::{ApiError, ApiResult};
use crate::shared::parse_timestamp;

impl TryFrom<wire::FillResponse> for Fill {
    type Error = ApiError;

    fn try_from(source: wire::FillResponse) -> ApiResult<Self> {
        Ok(Fill {
            price: required(source.price, "price")?,
            quantity: required(source.qty, "qty")?,
            timestamp: parse_timestamp(&required(source.ts, "ts")?)?,
        })
    }
}

impl TryFrom<wire::OrderStatusResponse> for OrderStatus {
    type Error = ApiError;

    fn try_from(source: wire::OrderStatusResponse) -> ApiResult<Self> {
        let fills = required(source.fills, "fills")?
            .into_iter()
            .map(Fill::try_from)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(OrderStatus {
            symbol: required(source.symbol, "symbol")?,
            venue: required(source.venue, "venue")?,
            direction: required(source.direction, "direction")?.parse()?,
            original_quantity: required(source.original_qty, "originalQty")?,
            quantity: required(source.qty, "qty")?,
            price: required(source.price, "price")?,
            order_type: required(source.order_type, "orderType")?.parse()?,
            id: required(source.id, "id")?,
            account: required(source.account, "account")?,
            timestamp: parse_timestamp(&required(source.ts, "ts")?)?,
            fills,
            total_filled: required(source.total_filled, "totalFilled")?,
            open: required(source.open, "open")?,
        })
    }
}
