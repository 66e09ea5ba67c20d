//! Market capitalization lookups, memoized per ticker for the life of the process.
//!
//! - `alphavantage`: the default provider
//! - `wire`:         serde mapping of the provider payload

mod alphavantage;
mod wire;

pub use alphavantage::AlphaVantageProvider;

use crate::core::TrackerError;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// A source of market capitalization figures.
///
/// Implementations perform exactly one external call per invocation and report every
/// failure (network, throttling, unknown ticker) as an error. A response that lacks a
/// usable capitalization field is not an error: it resolves to `0.0`.
pub trait MarketCapProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Looks up the market capitalization of `ticker`.
    fn market_cap<'a>(
        &'a self,
        ticker: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<f64, TrackerError>> + Send + 'a>>;
}

/// Ticker → last known market capitalization. Entries never expire.
#[derive(Debug, Clone, Default)]
pub struct MarketCapCache {
    map: HashMap<String, f64>,
}

impl MarketCapCache {
    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.map.get(ticker).copied()
    }

    pub fn insert(&mut self, ticker: impl Into<String>, market_cap: f64) {
        self.map.insert(ticker.into(), market_cap);
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.map.contains_key(ticker)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Resolves market caps through an optional provider, never failing.
///
/// Without a provider every call returns `0.0` and nothing touches the network.
pub struct MarketCapResolver {
    provider: Option<Box<dyn MarketCapProvider>>,
    cache: MarketCapCache,
}

impl MarketCapResolver {
    pub fn new(provider: Option<Box<dyn MarketCapProvider>>) -> Self {
        Self {
            provider,
            cache: MarketCapCache::default(),
        }
    }

    /// A resolver with no provider.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn cache(&self) -> &MarketCapCache {
        &self.cache
    }

    /// Returns the cached value for `ticker`, or performs one lookup and caches the
    /// outcome. Failed lookups are logged, cached as `0.0` and never retried.
    pub async fn resolve(&mut self, ticker: &str) -> f64 {
        let Some(provider) = self.provider.as_ref() else {
            return 0.0;
        };
        if let Some(cached) = self.cache.get(ticker) {
            return cached;
        }

        let market_cap = match provider.market_cap(ticker).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    "Could not fetch market cap for {ticker}: {e}"
                );
                0.0
            }
        };

        self.cache.insert(ticker, market_cap);
        market_cap
    }
}

impl std::fmt::Debug for MarketCapResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketCapResolver")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("cache", &self.cache)
            .finish()
    }
}
