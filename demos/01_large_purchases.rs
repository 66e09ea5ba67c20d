use insider_tracker::{FilterCriteria, InsiderTracker, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing("info");

    // 1. Build a tracker; the market-cap key (if any) comes from the environment or `.env`.
    let mut tracker = InsiderTracker::from_env()?;

    // 2. Open-market purchases of at least $1M in the last 10 days.
    let criteria = FilterCriteria::new()
        .transaction_types(["Buy"])
        .min_value(1_000_000.0)
        .max_days(10);
    let purchases = tracker.filter(&criteria).await;
    println!(
        "{}",
        tracker.summary(&purchases, "Recent Large Purchases (Last 10 Days)")
    );

    // 3. A second query within the TTL is served from the cached dataset.
    let sales = tracker.trades_by_type(["Sale", "Proposed Sale"]).await;
    println!("{}", tracker.summary(&sales, "Sales and Proposed Sales"));

    Ok(())
}
