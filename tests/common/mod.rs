#![allow(dead_code)]

use chrono::{Local, NaiveDate, TimeDelta};
use httpmock::{Method::GET, Mock, MockServer};
use insider_tracker::{InsiderTracker, InsiderTrackerBuilder, TransactionKind, TransactionRecord};
use std::{fs, path::Path};
use url::Url;

pub const INSIDER_PATH: &str = "/insidertrading.ashx";
pub const OVERVIEW_PATH: &str = "/query";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, name: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, name, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A builder pointed at the mock server for both endpoints, with no credential.
pub fn builder(server: &MockServer) -> InsiderTrackerBuilder {
    InsiderTracker::builder()
        .base_insider(Url::parse(&format!("{}{}", server.base_url(), INSIDER_PATH)).unwrap())
        .base_overview(Url::parse(&format!("{}{}", server.base_url(), OVERVIEW_PATH)).unwrap())
}

pub fn mock_insider_page<'a>(server: &'a MockServer, body: impl Into<String>) -> Mock<'a> {
    let body = body.into();
    server.mock(|when, then| {
        when.method(GET).path(INSIDER_PATH);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body.clone());
    })
}

pub fn mock_insider_fixture<'a>(server: &'a MockServer, name: &str) -> Mock<'a> {
    mock_insider_page(server, fixture("insider_page", name, "html"))
}

pub fn mock_overview<'a>(
    server: &'a MockServer,
    symbol: &str,
    body: impl Into<String>,
) -> Mock<'a> {
    let body = body.into();
    let symbol = symbol.to_string();
    server.mock(|when, then| {
        when.method(GET)
            .path(OVERVIEW_PATH)
            .query_param("function", "OVERVIEW")
            .query_param("symbol", symbol.as_str())
            .query_param("apikey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    })
}

pub fn overview_body(symbol: &str, market_cap: &str) -> String {
    format!(r#"{{"Symbol":"{symbol}","Name":"{symbol} Inc","MarketCapitalization":"{market_cap}"}}"#)
}

/* --------- synthetic pages with dates relative to today --------- */

pub struct PageRow {
    pub ticker: &'static str,
    pub owner: &'static str,
    pub transaction: &'static str,
    pub value: &'static str,
    pub days_ago: i64,
}

pub fn page_row(
    ticker: &'static str,
    transaction: &'static str,
    value: &'static str,
    days_ago: i64,
) -> PageRow {
    PageRow {
        ticker,
        owner: "Doe John",
        transaction,
        value,
        days_ago,
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders rows into a page shaped like the live one (`#insider-table`, `tr.header-row`).
pub fn insider_page(rows: &[PageRow]) -> String {
    let mut body = String::from(
        r#"<html><body><div class="content"><table id="insider-table"><tr class="header-row"><td>Ticker</td><td>Owner</td><td>Relationship</td><td>Date</td><td>Transaction</td><td>Cost</td><td>#Shares</td><td>Value ($)</td><td>#Shares Total</td><td>SEC Form 4</td></tr>"#,
    );
    for r in rows {
        let date = today() - TimeDelta::days(r.days_ago);
        body.push_str(&format!(
            "<tr><td><a href=\"quote.ashx?t={t}\">{t}</a></td><td>{o}</td><td>Director</td><td>{d}</td><td>{x}</td><td>10.00</td><td>1,000</td><td>{v}</td><td>5,000</td><td>Oct 01 05:00 PM</td></tr>",
            t = r.ticker,
            o = r.owner,
            d = date.format("%Y-%m-%d"),
            x = r.transaction,
            v = r.value,
        ));
    }
    body.push_str("</table></div></body></html>");
    body
}

/// A bare record for dataset-level tests.
pub fn record(ticker: &str, transaction: &str, value: f64, date: NaiveDate) -> TransactionRecord {
    TransactionRecord {
        ticker: ticker.to_string(),
        owner: "Doe John".to_string(),
        relationship: "Director".to_string(),
        date,
        transaction: TransactionKind::from(transaction),
        cost: 10.0,
        shares: Some(1_000),
        value,
        shares_total: None,
        sec_form4: None,
        market_cap: 0.0,
        market_cap_percent: 0.0,
    }
}

pub fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}
