//! Wire types for game-master responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for level start, restart and resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResponse {
    pub account: Option<String>,
    pub instance_id: Option<u64>,
    pub seconds_per_trading_day: Option<u64>,
    pub tickers: Option<Vec<String>>,
    pub venues: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<BTreeMap<String, String>>,
}

/// Response for GET /gm/instances/{instance_id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelStatusResponse {
    pub id: Option<u64>,
    pub done: Option<bool>,
    pub state: Option<String>,
    pub details: Option<LevelDetails>,
}

/// Trading-day counters nested under `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDetails {
    pub end_of_the_world_day: Option<u32>,
    pub trading_day: Option<u32>,
}
