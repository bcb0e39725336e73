//! Response validation applied to every round trip before decoding.
//!
//! Two rules, checked in order:
//! 1. a status other than 200 fails with [`ApiError::HttpStatus`];
//! 2. a non-empty string in the top-level `error` field fails with
//!    [`ApiError::Remote`], even under status 200.

use crate::error::{ApiError, ApiResult, TransportError};
use serde_json::Value;

const SUCCESS: u16 = 200;

/// Parse a raw body and validate it.
///
/// A non-200 status wins over an unparseable body, so a plain-text error page
/// still surfaces as [`ApiError::HttpStatus`].
pub fn parse_body(status: u16, body: &str) -> ApiResult<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => validate(status, json),
        Err(_) if status != SUCCESS => {
            tracing::warn!(status, "Request failed with non-JSON body");
            Err(ApiError::HttpStatus {
                status,
                message: body.to_string(),
            })
        }
        Err(e) => Err(TransportError::InvalidJson(e.to_string()).into()),
    }
}

/// Validate an already parsed response.
pub fn validate(status: u16, json: Value) -> ApiResult<Value> {
    let remote_error = embedded_error(&json);

    if status != SUCCESS {
        tracing::warn!(status, error = ?remote_error, "Request failed");
        return Err(ApiError::HttpStatus {
            status,
            message: remote_error.unwrap_or_else(|| json.to_string()),
        });
    }

    if let Some(message) = remote_error {
        tracing::warn!(%message, "Service reported an error");
        return Err(ApiError::Remote(message));
    }

    Ok(json)
}

fn embedded_error(json: &Value) -> Option<String> {
    json.get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
