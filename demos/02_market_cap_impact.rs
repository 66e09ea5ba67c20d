use insider_tracker::{FilterCriteria, InsiderTracker, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing("info");

    let mut tracker = InsiderTracker::from_env()?;
    if !tracker.market_cap_available() {
        println!("Set ALPHA_VANTAGE_API_KEY to run this demo.");
        return Ok(());
    }

    // Trades worth at least 1% of the issuer's market cap over the last week.
    let criteria = FilterCriteria::new()
        .min_market_cap_percent(1.0)
        .max_days(7);
    let significant = tracker.filter(&criteria).await;
    println!(
        "{}",
        tracker.summary(&significant, "Significant Market Cap Impact Trades (Last Week)")
    );

    println!(
        "Market caps resolved for {} distinct tickers.",
        tracker.market_cap_cache().len()
    );
    Ok(())
}
