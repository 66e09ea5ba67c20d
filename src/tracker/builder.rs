//! Construction of [`InsiderTracker`]: endpoints, credential, cache TTL and logging sink.

use std::env;
use std::time::Duration;

use tracing::Dispatch;
use url::Url;

use super::InsiderTracker;
use super::cache::DatasetCache;
use crate::core::TrackerError;
use crate::core::client::HttpSettings;
use crate::core::client::constants::{
    API_KEY_ENV, DEFAULT_BASE_INSIDER, DEFAULT_BASE_OVERVIEW, DEFAULT_CACHE_TTL,
};
use crate::enrich::Enricher;
use crate::market_cap::{AlphaVantageProvider, MarketCapProvider, MarketCapResolver};
use crate::table::TableExtractor;

#[derive(Default)]
pub struct InsiderTrackerBuilder {
    http: HttpSettings,
    base_insider: Option<Url>,
    base_overview: Option<Url>,
    api_key: Option<String>,
    provider: Option<Box<dyn MarketCapProvider>>,
    extractor: Option<TableExtractor>,
    cache_ttl: Option<Duration>,
    dispatch: Option<Dispatch>,
}

impl InsiderTrackerBuilder {
    /// Reads the market-cap credential from `ALPHA_VANTAGE_API_KEY`, loading `.env` first
    /// when present. An empty value counts as absent.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!("could not load .env: {e}");
        }
        self.api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty());
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http.user_agent = Some(ua.into());
        self
    }

    /// Override the insider page URL (e.g., `https://finviz.com/insidertrading.ashx`).
    #[must_use]
    pub fn base_insider(mut self, url: Url) -> Self {
        self.base_insider = Some(url);
        self
    }

    /// Override the Alpha Vantage query URL (e.g., `https://www.alphavantage.co/query`).
    #[must_use]
    pub fn base_overview(mut self, url: Url) -> Self {
        self.base_overview = Some(url);
        self
    }

    /// Set the market-cap provider credential explicitly.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Use a custom market-cap provider. Takes precedence over `api_key`.
    #[must_use]
    pub fn market_cap_provider(mut self, provider: impl MarketCapProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Replace the table locating strategies.
    #[must_use]
    pub fn table_extractor(mut self, extractor: TableExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// How long a fetched dataset is served from memory. Default: 5 minutes.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.http.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.http.connect_timeout = Some(dur);
        self
    }

    /// Route this tracker's logs to `dispatch` instead of the global subscriber.
    #[must_use]
    pub fn dispatch(mut self, dispatch: impl Into<Dispatch>) -> Self {
        self.dispatch = Some(dispatch.into());
        self
    }

    pub fn build(self) -> Result<InsiderTracker, TrackerError> {
        let base_insider = match self.base_insider {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_INSIDER)?,
        };
        let http = self.http.build()?;

        let provider: Option<Box<dyn MarketCapProvider>> = match (self.provider, self.api_key) {
            (Some(p), _) => Some(p),
            (None, Some(key)) => {
                let base = match self.base_overview {
                    Some(u) => u,
                    None => Url::parse(DEFAULT_BASE_OVERVIEW)?,
                };
                Some(Box::new(AlphaVantageProvider::new(http.clone(), base, key)))
            }
            (None, None) => None,
        };

        if provider.is_none() {
            let warn = || {
                tracing::warn!(
                    "Alpha Vantage API key not found. Market cap data will not be available."
                );
            };
            match &self.dispatch {
                Some(d) => tracing::dispatcher::with_default(d, warn),
                None => warn(),
            }
        }

        Ok(InsiderTracker {
            http,
            base_insider,
            extractor: self.extractor.unwrap_or_default(),
            enricher: Enricher::new(MarketCapResolver::new(provider)),
            cache: DatasetCache::new(self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL)),
            dispatch: self.dispatch,
        })
    }
}
