//! Stockfighter API client.
//!
//! [`StockfighterClient`] exposes every endpoint as an async method. Each
//! call builds one [`HttpRequest`](crate::http::HttpRequest), sends it
//! through the client's [`Transport`](crate::http::Transport), validates the
//! response and decodes it into a domain record.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stockfighter::api::StockfighterClient;
//!
//! let client = StockfighterClient::builder().api_key("my-key").build()?;
//! let quote = client.get_quote("TESTEX", "FOOBAR").await?;
//! println!("bid {} ask {}", quote.bid, quote.ask);
//! ```
//!
//! # Error Handling
//!
//! All methods return [`ApiResult`](crate::error::ApiResult). Nothing is
//! retried; the caller decides.
//!
//! ```rust,ignore
//! match client.venue_heartbeat("XXXX").await {
//!     Ok(_) => println!("venue up"),
//!     Err(ApiError::HttpStatus { status: 404, message }) => println!("no venue: {}", message),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```
//!
//! # Level Control
//!
//! ```rust,ignore
//! let info = client.start_level(1).await?;
//! let status = client.get_level_status(info.instance_id).await?;
//! client.stop_level(info.instance_id).await?;
//! ```

pub mod client;
mod levels;

pub use client::{StockfighterClient, StockfighterClientBuilder};
