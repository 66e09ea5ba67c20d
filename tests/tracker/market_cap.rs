use std::future::Future;
use std::pin::Pin;

use insider_tracker::{CacheMode, FilterCriteria, MarketCapProvider, TrackerError};

use crate::common::{self, page_row};

fn page() -> String {
    common::insider_page(&[
        page_row("AAPL", "Sale", "40,000,000", 1),
        page_row("KO", "Buy", "1,500,000", 2),
        page_row("AAPL", "Sale", "8,000,000", 3),
        page_row("ZZZZ", "Buy", "900,000", 4),
    ])
}

#[tokio::test]
async fn enrichment_looks_each_ticker_up_once() {
    let server = common::setup_server();
    let page_mock = common::mock_insider_page(&server, page());
    let aapl = common::mock_overview(
        &server,
        "AAPL",
        common::overview_body("AAPL", "4000000000000"),
    );
    let ko = common::mock_overview(&server, "KO", common::overview_body("KO", "300000000000"));
    let zzzz = common::mock_overview(&server, "ZZZZ", "{}");

    let mut tracker = common::builder(&server).api_key("test-key").build().unwrap();
    assert!(tracker.market_cap_available());

    let ds = tracker.fetch(true).await.unwrap();
    page_mock.assert();
    aapl.assert_calls(1);
    ko.assert_calls(1);
    zzzz.assert_calls(1);

    let got: Vec<(&str, f64, f64)> = ds
        .iter()
        .map(|r| (r.ticker.as_str(), r.market_cap, r.market_cap_percent))
        .collect();
    assert_eq!(
        got,
        vec![
            ("AAPL", 4e12, 0.001),
            ("AAPL", 4e12, 0.0002),
            ("KO", 3e11, 0.0005),
            ("ZZZZ", 0.0, 0.0),
        ]
    );
    assert_eq!(tracker.market_cap_cache().get("ZZZZ"), Some(0.0));

    // A refreshed dataset reuses the memoized market caps.
    tracker.try_fetch(CacheMode::Refresh).await.unwrap();
    page_mock.assert_calls(2);
    aapl.assert_calls(1);
    ko.assert_calls(1);
    zzzz.assert_calls(1);
}

#[tokio::test]
async fn market_cap_percent_query() {
    let server = common::setup_server();
    let _page = common::mock_insider_page(&server, page());
    let _aapl = common::mock_overview(
        &server,
        "AAPL",
        common::overview_body("AAPL", "4000000000000"),
    );
    let _ko = common::mock_overview(&server, "KO", common::overview_body("KO", "300000000000"));
    let _zzzz = common::mock_overview(&server, "ZZZZ", "{}");

    let mut tracker = common::builder(&server).api_key("test-key").build().unwrap();

    let ds = tracker.trades_by_market_cap_percent(0.0005).await;
    let tickers: Vec<&str> = ds.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "KO"]);

    let criteria = FilterCriteria::new()
        .min_market_cap_percent(0.0001)
        .transaction_types(["Sale"]);
    assert_eq!(tracker.filter(&criteria).await.len(), 2);
}

#[tokio::test]
async fn custom_provider_takes_precedence_over_the_key() {
    let server = common::setup_server();
    let _page = common::mock_insider_page(&server, page());
    let av = common::mock_overview(&server, "AAPL", common::overview_body("AAPL", "1"));

    let mut tracker = common::builder(&server)
        .api_key("test-key")
        .market_cap_provider(Fixed(1e9))
        .build()
        .unwrap();

    let ds = tracker.fetch(true).await.unwrap();
    av.assert_calls(0);
    assert!(ds.iter().all(|r| r.market_cap == 1e9));
    assert_eq!(ds.records()[0].market_cap_percent, 4.0);
}

struct Fixed(f64);

impl MarketCapProvider for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn market_cap<'a>(
        &'a self,
        _ticker: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<f64, TrackerError>> + Send + 'a>> {
        let v = self.0;
        Box::pin(async move { Ok(v) })
    }
}
