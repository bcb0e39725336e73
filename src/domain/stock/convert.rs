//! Conversion: StocksResponse → Vec<Stock>.

use super::wire;
use super::Stock;
use crate::domain::required;
use crate::error::{ApiError, ApiResult};

impl TryFrom<wire::StockResponse> for Stock {
    type Error = ApiError;

    fn try_from(source: wire::StockResponse) -> ApiResult<Self> {
        let symbol = required(source.symbol, "symbol")?;
        if symbol.is_empty() {
            return Err(ApiError::MissingField("symbol"));
        }

        Ok(Stock {
            symbol,
            name: required(source.name, "name")?,
        })
    }
}

impl TryFrom<wire::StocksResponse> for Vec<Stock> {
    type Error = ApiError;

    fn try_from(source: wire::StocksResponse) -> ApiResult<Self> {
        required(source.symbols, "symbols")?
            .into_iter()
            .map(Stock::try_from)
            .collect()
    }
}
