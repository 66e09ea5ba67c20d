//! Named, AND-combined filter criteria over a [`Dataset`].

use chrono::{NaiveDateTime, TimeDelta};

use crate::records::{Dataset, TransactionKind, TransactionRecord};

/// Criteria for [`InsiderTracker::filter`](super::InsiderTracker::filter).
///
/// Every field left as `None` is ignored; the rest must all hold for a record to be
/// kept.
///
/// - `min_value`: `value >= min_value`
/// - `max_days`: trade date (at midnight) strictly after `now - max_days`
/// - `transaction_types`: transaction kind is one of these
/// - `min_market_cap_percent`: `market_cap_percent >= min`; skipped when no market-cap
///   provider is configured
/// - `tickers`: ticker is one of these
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_value: Option<f64>,
    pub max_days: Option<u32>,
    pub transaction_types: Option<Vec<TransactionKind>>,
    pub min_market_cap_percent: Option<f64>,
    pub tickers: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min_value(mut self, v: f64) -> Self {
        self.min_value = Some(v);
        self
    }

    #[must_use]
    pub fn max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    #[must_use]
    pub fn transaction_types<I, T>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TransactionKind>,
    {
        self.transaction_types = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn min_market_cap_percent(mut self, pct: f64) -> Self {
        self.min_market_cap_percent = Some(pct);
        self
    }

    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = Some(tickers.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `record` passes every criterion that is set.
    pub fn matches(
        &self,
        record: &TransactionRecord,
        now: NaiveDateTime,
        market_cap_active: bool,
    ) -> bool {
        if let Some(min) = self.min_value
            && record.value < min
        {
            return false;
        }
        if let Some(days) = self.max_days
            && record.traded_at() <= cutoff(now, days)
        {
            return false;
        }
        if let Some(kinds) = &self.transaction_types
            && !kinds.contains(&record.transaction)
        {
            return false;
        }
        if market_cap_active
            && let Some(min) = self.min_market_cap_percent
            && record.market_cap_percent < min
        {
            return false;
        }
        if let Some(tickers) = &self.tickers
            && !tickers.iter().any(|t| t == &record.ticker)
        {
            return false;
        }
        true
    }

    /// Applies the criteria to `dataset` as of `now`.
    pub fn apply_at(
        &self,
        dataset: &Dataset,
        now: NaiveDateTime,
        market_cap_active: bool,
    ) -> Dataset {
        if !market_cap_active && self.min_market_cap_percent.is_some() {
            tracing::warn!(
                "Market cap filtering not available without a market cap provider; \
                 ignoring min_market_cap_percent"
            );
        }
        dataset.filter(|r| self.matches(r, now, market_cap_active))
    }
}

/// Start of the trailing `days` window ending at `now`.
pub(crate) fn cutoff(now: NaiveDateTime, days: u32) -> NaiveDateTime {
    now - TimeDelta::days(i64::from(days))
}
