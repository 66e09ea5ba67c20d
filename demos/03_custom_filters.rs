use std::time::Duration;

use insider_tracker::table::{ById, NthTableInRegion};
use insider_tracker::{CacheMode, FilterCriteria, InsiderTracker, TableExtractor, TransactionKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A tracker with a short dataset TTL, a request timeout and an extra table locator.
    let extractor = TableExtractor::default()
        .with_locator(NthTableInRegion::new("body", 2))
        .with_locator(ById::new("insider-table-v2"));
    let mut tracker = InsiderTracker::builder()
        .from_env()
        .cache_ttl(Duration::from_secs(60))
        .timeout(Duration::from_secs(20))
        .table_extractor(extractor)
        .build()?;

    // 2. Fetch once and inspect the error if the cycle fails.
    match tracker.try_fetch(CacheMode::Use).await {
        Ok(dataset) => println!("Fetched {} records.", dataset.len()),
        Err(e) => {
            eprintln!("Fetch failed: {e}");
            return Ok(());
        }
    }

    // 3. Option exercises by a handful of tickers.
    let criteria = FilterCriteria::new()
        .transaction_types([TransactionKind::OptionExercise])
        .tickers(["AAPL", "MSFT", "NVDA", "TSLA"]);
    let exercises = tracker.filter(&criteria).await;
    println!("{}", tracker.summary(&exercises, "Option Exercises (Mega Caps)"));

    // 4. Everything above $250k from the last three days.
    let recent = tracker.recent_trades(3, 250_000.0).await;
    for r in recent.top(10) {
        println!(
            "{:<6} {:<28} {:<16} {} {:>16}",
            r.ticker,
            r.owner,
            r.transaction,
            r.date,
            insider_tracker::report::format_usd(r.value)
        );
    }

    Ok(())
}
