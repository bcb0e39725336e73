//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain records handed to callers
//! - `wire.rs`: Raw serde structs matching backend requests/responses
//! - `convert.rs`: `TryFrom` conversions that enforce required fields,
//!   decode enums and parse timestamps

pub mod level;
pub mod order;
pub mod orderbook;
pub mod quote;
pub mod stock;

use crate::error::{ApiError, ApiResult};

/// Unwrap a wire field, reporting its wire name when absent.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> ApiResult<T> {
    value.ok_or(ApiError::MissingField(field))
}
