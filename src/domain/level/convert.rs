//! Conversions: game-master wire types → LevelInfo / LevelStatus.

use super::wire;
use super::{LevelInfo, LevelStatus};
use crate::domain::required;
use crate::error::{ApiError, ApiResult};
use std::time::Duration;

impl TryFrom<wire::LevelResponse> for LevelInfo {
    type Error = ApiError;

    fn try_from(source: wire::LevelResponse) -> ApiResult<Self> {
        Ok(LevelInfo {
            account: required(source.account, "account")?,
            instance_id: required(source.instance_id, "instanceId")?,
            seconds_per_trading_day: Duration::from_secs(required(
                source.seconds_per_trading_day,
                "secondsPerTradingDay",
            )?),
            tickers: required(source.tickers, "tickers")?,
            venues: required(source.venues, "venues")?,
            instructions: source.instructions.unwrap_or_default(),
        })
    }
}

impl TryFrom<wire::LevelStatusResponse> for LevelStatus {
    type Error = ApiError;

    fn try_from(source: wire::LevelStatusResponse) -> ApiResult<Self> {
        let details = required(source.details, "details")?;

        Ok(LevelStatus {
            id: required(source.id, "id")?,
            done: required(source.done, "done")?,
            state: required(source.state, "state")?.parse()?,
            end_of_the_world_day: required(details.end_of_the_world_day, "endOfTheWorldDay")?,
            trading_day: required(details.trading_day, "tradingDay")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::level::LevelState;
    use serde_json::json;

    #[test]
    fn test_level_info() {
        let response: wire::LevelResponse = serde_json::from_value(json!({
            "ok": true,
            "account": "EXB123456",
            "instanceId": 4242,
            "instructions": {
                "Instructions": "Buy 100 shares.",
                "Order Types": "Limit orders rest on the book."
            },
            "secondsPerTradingDay": 5,
            "tickers": ["FOOBAR"],
            "venues": ["TESTEX"],
            "balances": {"USD": 0}
        }))
        .unwrap();

        let info = LevelInfo::try_from(response).unwrap();
        assert_eq!(info.account, "EXB123456");
        assert_eq!(info.instance_id, 4242);
        assert_eq!(info.seconds_per_trading_day, Duration::from_secs(5));
        assert_eq!(info.tickers, vec!["FOOBAR".to_string()]);
        assert_eq!(info.venues, vec!["TESTEX".to_string()]);
        assert_eq!(info.instructions.len(), 2);
        assert_eq!(info.instructions["Instructions"], "Buy 100 shares.");
    }

    #[test]
    fn test_level_info_without_instructions() {
        let response: wire::LevelResponse = serde_json::from_value(json!({
            "account": "EXB123456",
            "instanceId": 1,
            "secondsPerTradingDay": 5,
            "tickers": [],
            "venues": []
        }))
        .unwrap();

        let info = LevelInfo::try_from(response).unwrap();
        assert!(info.instructions.is_empty());
    }

    #[test]
    fn test_level_info_missing_venues() {
        let response: wire::LevelResponse = serde_json::from_value(json!({
            "account": "EXB123456",
            "instanceId": 1,
            "secondsPerTradingDay": 5,
            "tickers": ["FOOBAR"]
        }))
        .unwrap();

        assert!(matches!(
            LevelInfo::try_from(response),
            Err(ApiError::MissingField("venues"))
        ));
    }

    #[test]
    fn test_level_status() {
        let response: wire::LevelStatusResponse = serde_json::from_value(json!({
            "ok": true,
            "done": false,
            "id": 4242,
            "state": "open",
            "details": {"endOfTheWorldDay": 380, "tradingDay": 3}
        }))
        .unwrap();

        let status = LevelStatus::try_from(response).unwrap();
        assert_eq!(status.id, 4242);
        assert!(!status.done);
        assert_eq!(status.state, LevelState::Open);
        assert_eq!(status.end_of_the_world_day, 380);
        assert_eq!(status.trading_day, 3);
        assert_eq!(status.days_remaining(), 377);
    }

    #[test]
    fn test_level_status_missing_details() {
        let response: wire::LevelStatusResponse = serde_json::from_value(json!({
            "done": false,
            "id": 1,
            "state": "open"
        }))
        .unwrap();

        assert!(matches!(
            LevelStatus::try_from(response),
            Err(ApiError::MissingField("details"))
        ));
    }
}
