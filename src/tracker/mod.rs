//! The orchestrator: fetch → extract → normalize → enrich → cache, plus queries.
//!
//! Internals are split into:
//! - `builder`: configuration and construction
//! - `cache`:   the time-boxed dataset cache
//! - `filter`:  filter criteria over a dataset

mod builder;
mod cache;
mod filter;

pub use builder::InsiderTrackerBuilder;
pub use cache::{CacheState, DatasetCache};
pub use filter::FilterCriteria;

use std::future::Future;

use chrono::{Local, NaiveDateTime};
use tracing::Dispatch;
use tracing::instrument::WithSubscriber;
use url::Url;

use crate::core::{CacheMode, TrackerError, net};
use crate::enrich::Enricher;
use crate::market_cap::MarketCapCache;
use crate::records::{self, Dataset, TransactionKind};
use crate::report::TradeSummary;
use crate::table::TableExtractor;

/// Fetches the insider-trading table, keeps the latest dataset for the cache TTL and
/// answers queries over it.
///
/// One tracker owns both caches; every method that may touch them takes `&mut self`.
/// All returned datasets are independent copies.
///
/// # Example
///
/// ```no_run
/// # use insider_tracker::{FilterCriteria, InsiderTracker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tracker = InsiderTracker::builder().from_env().build()?;
///
/// let criteria = FilterCriteria::new()
///     .transaction_types(["Buy"])
///     .min_value(1_000_000.0)
///     .max_days(10);
/// let purchases = tracker.filter(&criteria).await;
/// println!("{}", tracker.summary(&purchases, "Recent Large Purchases"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InsiderTracker {
    http: reqwest::Client,
    base_insider: Url,
    extractor: TableExtractor,
    enricher: Enricher,
    cache: DatasetCache,
    dispatch: Option<Dispatch>,
}

async fn scoped<F: Future>(dispatch: Option<Dispatch>, fut: F) -> F::Output {
    match dispatch {
        Some(d) => fut.with_subscriber(d).await,
        None => fut.await,
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl InsiderTracker {
    /// Create a new builder.
    pub fn builder() -> InsiderTrackerBuilder {
        InsiderTrackerBuilder::default()
    }

    /// A tracker with default endpoints and the credential taken from the environment.
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::builder().from_env().build()
    }

    /// Whether records get market-cap enrichment.
    pub fn market_cap_available(&self) -> bool {
        self.enricher.is_active()
    }

    pub fn cache_state(&self) -> CacheState {
        self.cache.state()
    }

    pub fn dataset_cache(&self) -> &DatasetCache {
        &self.cache
    }

    pub fn market_cap_cache(&self) -> &MarketCapCache {
        self.enricher.resolver().cache()
    }

    /// Returns the cached dataset when `mode` allows it and it is fresh; otherwise runs a
    /// full fetch cycle and, unless `mode` is [`CacheMode::Bypass`], stores the result.
    ///
    /// A failing cycle leaves the cache exactly as it was.
    ///
    /// # Errors
    ///
    /// [`TrackerError::Http`] / [`TrackerError::Status`] for transport failures,
    /// [`TrackerError::Extraction`] when the table cannot be found, and
    /// [`TrackerError::EmptyData`], [`TrackerError::MissingColumn`] or
    /// [`TrackerError::Data`] when the rows cannot be normalized.
    pub async fn try_fetch(&mut self, mode: CacheMode) -> Result<Dataset, TrackerError> {
        let dispatch = self.dispatch.clone();
        scoped(dispatch, self.fetch_cycle(mode)).await
    }

    /// [`try_fetch`](Self::try_fetch) with the error logged instead of returned.
    ///
    /// `use_cache = false` forces a network fetch; the result still replaces the cache.
    pub async fn fetch(&mut self, use_cache: bool) -> Option<Dataset> {
        let mode = if use_cache {
            CacheMode::Use
        } else {
            CacheMode::Refresh
        };
        let dispatch = self.dispatch.clone();
        scoped(dispatch, self.fetch_logged(mode)).await
    }

    /// Trades dated within the last `days` days with `value >= min_value`.
    pub async fn recent_trades(&mut self, days: u32, min_value: f64) -> Dataset {
        let criteria = FilterCriteria::new().max_days(days).min_value(min_value);
        self.filter(&criteria).await
    }

    /// Trades whose transaction kind is one of `kinds`.
    pub async fn trades_by_type<I, T>(&mut self, kinds: I) -> Dataset
    where
        I: IntoIterator<Item = T>,
        T: Into<TransactionKind>,
    {
        let criteria = FilterCriteria::new().transaction_types(kinds);
        self.filter(&criteria).await
    }

    /// Trades worth at least `min_percent` percent of the issuer's market cap.
    ///
    /// Returns an empty dataset, with a warning, when no market-cap provider is
    /// configured.
    pub async fn trades_by_market_cap_percent(&mut self, min_percent: f64) -> Dataset {
        if !self.market_cap_available() {
            let warn = || {
                tracing::warn!(
                    "Market cap filtering not available without Alpha Vantage API key"
                );
            };
            match &self.dispatch {
                Some(d) => tracing::dispatcher::with_default(d, warn),
                None => warn(),
            }
            return Dataset::default();
        }
        let criteria = FilterCriteria::new().min_market_cap_percent(min_percent);
        self.filter(&criteria).await
    }

    /// Applies every set criterion (logical AND) to the current dataset, fetching it
    /// first if needed. Empty when no dataset can be obtained.
    pub async fn filter(&mut self, criteria: &FilterCriteria) -> Dataset {
        let dispatch = self.dispatch.clone();
        scoped(dispatch, async {
            let Some(dataset) = self.fetch_logged(CacheMode::Use).await else {
                return Dataset::default();
            };
            criteria.apply_at(&dataset, now(), self.market_cap_available())
        })
        .await
    }

    /// A printable summary of `dataset`; the market-cap percent column shows only when
    /// enrichment is active.
    pub fn summary<'a>(&self, dataset: &'a Dataset, title: &'a str) -> TradeSummary<'a> {
        TradeSummary::new(dataset, title).market_cap_percent(self.market_cap_available())
    }

    async fn fetch_logged(&mut self, mode: CacheMode) -> Option<Dataset> {
        match self.fetch_cycle(mode).await {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                tracing::error!("Error fetching data: {e}");
                None
            }
        }
    }

    async fn fetch_cycle(&mut self, mode: CacheMode) -> Result<Dataset, TrackerError> {
        if mode.reads()
            && let Some(dataset) = self.cache.get()
        {
            tracing::info!("Using cached insider trading data");
            return Ok(dataset);
        }

        tracing::info!(url = %self.base_insider, "Fetching insider trading data...");
        let resp = net::get_checked(&self.http, self.base_insider.clone()).await?;
        let body = net::get_text(resp, "insider_page", "latest", "html").await?;

        let raw = self.extractor.extract(&body)?;
        tracing::debug!(
            strategy = %raw.strategy,
            rows = raw.rows.len(),
            dropped = raw.dropped,
            "extracted insider table"
        );

        let today = now().date();
        let dataset = records::normalize(&raw.headers, &raw.rows, today)?;
        let dataset = self.enricher.enrich(dataset).await;

        if mode.writes() {
            self.cache.put(dataset.clone());
        }

        tracing::info!(
            "Successfully fetched {} insider trading records",
            dataset.len()
        );
        Ok(dataset)
    }
}
