//! Centralized constants for default endpoints, UA and cache policy.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Page carrying the latest insider-transactions table.
pub(crate) const DEFAULT_BASE_INSIDER: &str = "https://finviz.com/insidertrading.ashx";

/// Alpha Vantage query endpoint (function/symbol/apikey go in the query string).
pub(crate) const DEFAULT_BASE_OVERVIEW: &str = "https://www.alphavantage.co/query";

/// How long a fetched dataset may be served from memory.
pub(crate) const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Environment variable holding the market-cap provider credential.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";
