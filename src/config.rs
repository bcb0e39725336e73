//! Client configuration loaded from environment variables.
//!
//! - `SF_API_KEY`: API key for authenticated endpoints (optional)
//! - `SF_API_URL`: overrides the market API base URL
//! - `SF_GM_URL`: overrides the game-master base URL
//!
//! Empty variables are treated as unset.

use crate::api::StockfighterClientBuilder;
use crate::network::{DEFAULT_API_URL, DEFAULT_GM_URL};

pub const API_KEY_VAR: &str = "SF_API_KEY";
pub const API_URL_VAR: &str = "SF_API_URL";
pub const GM_URL_VAR: &str = "SF_GM_URL";

/// Connection settings for a [`StockfighterClient`](crate::api::StockfighterClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockfighterConfig {
    pub api_url: String,
    pub gm_url: String,
    pub api_key: Option<String>,
}

impl Default for StockfighterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            gm_url: DEFAULT_GM_URL.to_string(),
            api_key: None,
        }
    }
}

impl StockfighterConfig {
    /// Build a config from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            api_url: non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            gm_url: non_empty(GM_URL_VAR).unwrap_or_else(|| DEFAULT_GM_URL.to_string()),
            api_key: non_empty(API_KEY_VAR),
        }
    }

    /// Seed a client builder with these settings.
    pub fn into_builder(self) -> StockfighterClientBuilder {
        let builder = StockfighterClientBuilder::new()
            .api_url(self.api_url)
            .gm_url(self.gm_url);
        match self.api_key {
            Some(key) => builder.api_key(key),
            None => builder,
        }
    }
}

/// Loads the configuration from the process environment.
///
/// URLs are not validated here; [`StockfighterClientBuilder`] rejects a
/// malformed one when the client is built.
pub fn fetch_config() -> StockfighterConfig {
    let config = StockfighterConfig::from_lookup(|name| std::env::var(name).ok());
    tracing::debug!(
        api_url = %config.api_url,
        gm_url = %config.gm_url,
        has_api_key = config.api_key.is_some(),
        "Loaded configuration"
    );
    config
}
