use std::future::Future;
use std::pin::Pin;

use reqwest::Client;
use url::Url;

use super::MarketCapProvider;
use super::wire::OverviewEnvelope;
use crate::core::error::redact_query;
use crate::core::{TrackerError, net};

/// Alpha Vantage `OVERVIEW` lookups.
///
/// - **Free tier**: 25 requests/day across all endpoints, so every ticker is looked up
///   at most once per process (see [`MarketCapResolver`](super::MarketCapResolver)).
/// - **Requires**: API key, sent as the `apikey` query parameter.
pub struct AlphaVantageProvider {
    http: Client,
    base: Url,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(http: Client, base: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base,
            api_key: api_key.into(),
        }
    }

    async fn fetch_overview(&self, ticker: &str) -> Result<OverviewEnvelope, TrackerError> {
        let symbol = ticker.to_uppercase();
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("function", "OVERVIEW")
            .append_pair("symbol", &symbol)
            .append_pair("apikey", &self.api_key);

        let resp = net::get_checked(&self.http, url).await?;
        let text = net::get_text(resp, "overview", &symbol, "json").await?;

        serde_json::from_str(&text)
            .map_err(|e| TrackerError::lookup(ticker, format!("overview json parse: {e}")))
    }
}

impl MarketCapProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    fn market_cap<'a>(
        &'a self,
        ticker: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<f64, TrackerError>> + Send + 'a>> {
        Box::pin(async move {
            let overview = self.fetch_overview(ticker).await.map_err(|e| match e {
                TrackerError::Lookup { .. } => e,
                other => TrackerError::lookup(ticker, redact_query(&other.to_string())),
            })?;

            if let Some(msg) = overview.refusal() {
                return Err(TrackerError::lookup(ticker, msg));
            }
            if overview.symbol.is_none() && overview.market_capitalization.is_none() {
                return Err(TrackerError::lookup(ticker, "no overview data (unknown ticker?)"));
            }

            Ok(overview.market_cap())
        })
    }
}
