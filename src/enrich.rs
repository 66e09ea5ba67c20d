//! Adds market capitalization and trade-size-relative-to-company to normalized records.

use crate::market_cap::MarketCapResolver;
use crate::records::Dataset;

/// `100 * value / market_cap`, or `0.0` whenever the result would not be a finite number
/// (zero or missing market cap).
#[must_use]
pub fn market_cap_percent(value: f64, market_cap: f64) -> f64 {
    if market_cap > 0.0 && market_cap.is_finite() {
        let pct = 100.0 * value / market_cap;
        if pct.is_finite() { pct } else { 0.0 }
    } else {
        0.0
    }
}

/// Fills `market_cap` and `market_cap_percent` on every record through a
/// [`MarketCapResolver`].
#[derive(Debug)]
pub struct Enricher {
    resolver: MarketCapResolver,
}

impl Enricher {
    pub fn new(resolver: MarketCapResolver) -> Self {
        Self { resolver }
    }

    /// Whether a market-cap provider is configured.
    pub fn is_active(&self) -> bool {
        self.resolver.is_available()
    }

    pub fn resolver(&self) -> &MarketCapResolver {
        &self.resolver
    }

    /// Returns the same records with both market-cap fields set. When no provider is
    /// configured both fields are `0.0` and no lookup happens.
    pub async fn enrich(&mut self, dataset: Dataset) -> Dataset {
        let mut records = dataset.into_records();

        if !self.is_active() {
            for r in &mut records {
                r.market_cap = 0.0;
                r.market_cap_percent = 0.0;
            }
            return Dataset::from_records(records);
        }

        tracing::info!("Fetching market cap data...");
        for r in &mut records {
            r.market_cap = self.resolver.resolve(&r.ticker).await;
            r.market_cap_percent = market_cap_percent(r.value, r.market_cap);
        }
        tracing::debug!(
            tickers = self.resolver.cache().len(),
            "market cap cache populated"
        );

        Dataset::from_records(records)
    }
}
