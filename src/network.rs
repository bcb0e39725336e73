//! Network constants for the Stockfighter SDK.

/// Default market API base URL (heartbeat, venues, stocks, orders).
pub const DEFAULT_API_URL: &str = "https://api.stockfighter.io/ob/api";

/// Default game-master base URL (levels and instances).
pub const DEFAULT_GM_URL: &str = "https://www.stockfighter.io/gm";

/// Header carrying the API key on authenticated requests.
pub const AUTH_HEADER: &str = "X-Starfighter-Authorization";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
