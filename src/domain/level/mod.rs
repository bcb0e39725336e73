//! Level domain: game-master level instances.
//!
//! A started level is an instance with its own account, venues and tickers.
//! `stop` closes it, `resume` reopens it, `restart` reinitializes it with a
//! fresh assignment.

mod convert;
pub mod wire;

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// Level numbers and the names the game master knows them by.
pub const LEVELS: &[(u32, &str)] = &[
    (1, "first_steps"),
    (2, "chock_a_block"),
    (3, "sell_side"),
];

/// Resolve a level number to its game-master name.
pub fn level_name(level: u32) -> ApiResult<&'static str> {
    LEVELS
        .iter()
        .find(|(number, _)| *number == level)
        .map(|(_, name)| *name)
        .ok_or(ApiError::UnknownLevel(level))
}

// ─── LevelInfo ───────────────────────────────────────────────────────────────

/// Assignment returned when a level is started, restarted or resumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelInfo {
    pub account: String,
    pub instance_id: u64,
    pub seconds_per_trading_day: Duration,
    pub tickers: Vec<String>,
    pub venues: Vec<String>,
    /// Named instruction texts, empty when the game master sends none
    pub instructions: BTreeMap<String, String>,
}

// ─── LevelState ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelState {
    Open,
    Closed,
}

impl FromStr for LevelState {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(LevelState::Open),
            "closed" => Ok(LevelState::Closed),
            _ => Err(ApiError::UnknownEnumValue {
                field: "state",
                value: s.to_string(),
            }),
        }
    }
}

// ─── LevelStatus ─────────────────────────────────────────────────────────────

/// Progress of a running level instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelStatus {
    pub id: u64,
    pub done: bool,
    pub state: LevelState,
    /// Trading day on which the level ends
    pub end_of_the_world_day: u32,
    pub trading_day: u32,
}

impl LevelStatus {
    pub fn is_open(&self) -> bool {
        self.state == LevelState::Open
    }

    /// Trading days left before the level ends.
    pub fn days_remaining(&self) -> u32 {
        self.end_of_the_world_day.saturating_sub(self.trading_day)
    }
}
