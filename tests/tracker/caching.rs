use std::time::Duration;

use httpmock::Method::GET;
use insider_tracker::{CacheMode, CacheState};

use crate::common::{self, INSIDER_PATH};

#[tokio::test]
async fn second_fetch_within_ttl_is_served_from_memory() {
    let server = common::setup_server();
    let mock = common::mock_insider_fixture(&server, "by_id");

    let mut tracker = common::builder(&server).build().unwrap();
    let first = tracker.fetch(true).await.unwrap();
    let second = tracker.fetch(true).await.unwrap();

    mock.assert_calls(1);
    assert_eq!(first, second);

    // Copies are independent of each other and of the cache.
    let mut owned = first.into_records();
    owned[0].ticker = "ZZZZ".into();
    owned.truncate(2);
    assert_eq!(second.len(), 9);
    assert_eq!(second.records()[0].ticker, "AAPL");
    assert_eq!(tracker.fetch(true).await.unwrap().len(), 9);
    mock.assert_calls(1);
}

#[tokio::test]
async fn expired_dataset_is_refetched() {
    let server = common::setup_server();
    let mock = common::mock_insider_fixture(&server, "by_id");

    let mut tracker = common::builder(&server)
        .cache_ttl(Duration::from_millis(50))
        .build()
        .unwrap();

    tracker.fetch(true).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(tracker.cache_state(), CacheState::Stale);

    tracker.fetch(true).await.unwrap();
    mock.assert_calls(2);
    assert_eq!(tracker.cache_state(), CacheState::Ready);
}

#[tokio::test]
async fn use_cache_false_always_hits_the_network() {
    let server = common::setup_server();
    let mock = common::mock_insider_fixture(&server, "by_id");

    let mut tracker = common::builder(&server).build().unwrap();
    tracker.fetch(false).await.unwrap();
    tracker.fetch(false).await.unwrap();
    mock.assert_calls(2);

    // The refreshed dataset still populates the cache.
    tracker.fetch(true).await.unwrap();
    mock.assert_calls(2);
}

#[tokio::test]
async fn bypass_leaves_the_cache_alone() {
    let server = common::setup_server();
    let mock = common::mock_insider_fixture(&server, "by_id");

    let mut tracker = common::builder(&server).build().unwrap();
    let ds = tracker.try_fetch(CacheMode::Bypass).await.unwrap();
    assert_eq!(ds.len(), 9);
    assert_eq!(tracker.cache_state(), CacheState::Empty);

    tracker.try_fetch(CacheMode::Use).await.unwrap();
    mock.assert_calls(2);
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_dataset() {
    let server = common::setup_server();
    let mut ok = common::mock_insider_fixture(&server, "by_id");

    let mut tracker = common::builder(&server).build().unwrap();
    let before = tracker.fetch(true).await.unwrap();
    ok.assert_calls(1);
    ok.delete();

    let failing = server.mock(|when, then| {
        when.method(GET).path(INSIDER_PATH);
        then.status(500);
    });

    assert!(tracker.fetch(false).await.is_none());
    failing.assert_calls(1);

    assert_eq!(tracker.cache_state(), CacheState::Ready);
    assert_eq!(tracker.dataset_cache().get(), Some(before.clone()));
    assert_eq!(tracker.fetch(true).await, Some(before));
    failing.assert_calls(1);
}

#[tokio::test]
async fn query_methods_share_one_fetch() {
    let server = common::setup_server();
    let mock = common::mock_insider_fixture(&server, "by_id");

    let mut tracker = common::builder(&server).build().unwrap();
    let sales = tracker.trades_by_type(["Sale"]).await;
    let big = tracker.recent_trades(100_000, 5_000_000.0).await;

    mock.assert_calls(1);
    assert_eq!(sales.len(), 4);
    let tickers: Vec<&str> = big.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "NVDA", "TSLA"]);
}
