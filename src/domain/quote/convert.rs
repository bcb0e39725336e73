//! Conversion: QuoteResponse → Quote.

use super::wire;
use super::Quote;
use crate::domain::required;
use crate::error::{ApiError, ApiResult};
use crate::shared::parse_timestamp;

impl TryFrom<wire::QuoteResponse> for Quote {
    type Error = ApiError;

    fn try_from(source: wire::QuoteResponse) -> ApiResult<Self> {
        Ok(Quote {
            symbol: required(source.symbol, "symbol")?,
            venue: required(source.venue, "venue")?,
            bid: source.bid.unwrap_or(0),
            ask: source.ask.unwrap_or(0),
            bid_size: required(source.bid_size, "bidSize")?,
            ask_size: required(source.ask_size, "askSize")?,
            bid_depth: required(source.bid_depth, "bidDepth")?,
            ask_depth: required(source.ask_depth, "askDepth")?,
            last: source.last.unwrap_or(0),
            last_size: required(source.last_size, "lastSize")?,
            last_trade: parse_timestamp(&required(source.last_trade, "lastTrade")?)?,
            quote_time: parse_timestamp(&required(source.quote_time, "quoteTime")?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_quote() -> serde_json::Value {
        json!({
            "ok": true,
            "symbol": "FOOBAR",
            "venue": "TESTEX",
            "bid": 5100,
            "ask": 5125,
            "bidSize": 392,
            "askSize": 711,
            "bidDepth": 2748,
            "askDepth": 2237,
            "last": 5125,
            "lastSize": 52,
            "lastTrade": "2015-07-13T05:38:17.33640392Z",
            "quoteTime": "2015-07-13T05:38:17.33640392Z"
        })
    }

    fn decode(json: serde_json::Value) -> ApiResult<Quote> {
        let response: wire::QuoteResponse = serde_json::from_value(json)?;
        Quote::try_from(response)
    }

    #[test]
    fn test_full_quote() {
        let quote = decode(full_quote()).unwrap();
        assert_eq!(quote.symbol, "FOOBAR");
        assert_eq!(quote.venue, "TESTEX");
        assert_eq!(quote.bid, 5100);
        assert_eq!(quote.ask, 5125);
        assert_eq!(quote.bid_size, 392);
        assert_eq!(quote.ask_depth, 2237);
        assert_eq!(quote.last_size, 52);
        assert_eq!(quote.last_trade, quote.quote_time);
    }

    #[test]
    fn test_missing_bid_ask_last_default_to_zero() {
        let mut json = full_quote();
        let obj = json.as_object_mut().unwrap();
        obj.remove("bid");
        obj.remove("ask");
        obj.remove("last");

        let quote = decode(json).unwrap();
        assert_eq!(quote.bid, 0);
        assert_eq!(quote.ask, 0);
        assert_eq!(quote.last, 0);
    }

    #[test]
    fn test_missing_size_is_an_error() {
        let mut json = full_quote();
        json.as_object_mut().unwrap().remove("bidSize");

        let err = decode(json).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("bidSize")));
    }

    #[test]
    fn test_wrong_type_is_json_error() {
        let mut json = full_quote();
        json["bid"] = json!("5100");

        assert!(matches!(decode(json), Err(ApiError::Json(_))));
    }
}
