//! # Stockfighter Rust SDK
//!
//! A typed client for the Stockfighter trading simulation.
//!
//! ## Modules
//!
//! - [`api`]: the client: market data, order entry and level control
//! - [`http`]: the transport capability, the default reqwest transport and
//!   response validation
//! - [`domain`]: domain records, their wire types and conversions
//! - [`shared`]: enums and the fixed-layout timestamp codec used across domains
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockfighter::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StockfighterClient::builder()
//!         .api_key(std::env::var("SF_API_KEY")?)
//!         .build()?;
//!
//!     let book = client.get_orderbook("TESTEX", "FOOBAR").await?;
//!     println!("{} bids, {} asks", book.bids.len(), book.asks.len());
//!
//!     let status = client
//!         .place_order("EXB123456", "TESTEX", "FOOBAR", 100, 10, Direction::Buy, OrderType::Limit)
//!         .await?;
//!     client.cancel_order("TESTEX", "FOOBAR", status.id).await?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Shared enums and the timestamp codec.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error type.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

/// Transport capability and response validation.
pub mod http;

/// The Stockfighter client.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use stockfighter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{StockfighterClient, StockfighterClientBuilder};
    pub use crate::config::{fetch_config, StockfighterConfig};
    pub use crate::domain::level::{LevelInfo, LevelState, LevelStatus};
    pub use crate::domain::order::{Fill, OrderStatus, PlaceOrderRequest};
    pub use crate::domain::orderbook::{OrderBook, OrderBookEntry};
    pub use crate::domain::quote::Quote;
    pub use crate::domain::stock::Stock;
    pub use crate::error::{ApiError, ApiResult, TransportError};
    pub use crate::http::{HttpRequest, Method, RawResponse, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_GM_URL};
    pub use crate::shared::{format_timestamp, parse_timestamp, Direction, OrderType};
}
