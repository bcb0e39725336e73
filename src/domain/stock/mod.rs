//! Stock domain: tradable symbols listed on a venue.

mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// A stock listed on a venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Ticker, never empty
    pub symbol: String,
    /// Display name
    pub name: String,
}
