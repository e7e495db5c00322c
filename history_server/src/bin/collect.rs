//! One-shot collector: fetch, normalize, and persist a ticker's history.

use anyhow::Result;
use clap::Parser;
use price_store::store::PriceStore;
use quote_collector::normalize::normalize;
use quote_collector::providers::{QuoteSource, nasdaq::NasdaqProvider};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Collect daily price history for one ticker")]
struct Cli {
    /// Ticker symbol to collect (e.g. AAPL)
    ticker: String,

    /// Lookback window in years
    #[arg(long, default_value_t = 1)]
    years: u32,

    /// SQLite database path (defaults to $DATABASE_URL, then stock_history.db)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let ticker = cli.ticker.trim().to_uppercase();
    let database_url = cli
        .database_url
        .unwrap_or_else(|| shared_utils::env::env_str("DATABASE_URL", "stock_history.db"));

    let store = PriceStore::new(database_url);
    store.migrate()?;

    let source = NasdaqProvider::new()?;
    let raw = source.fetch_daily_or_empty(&ticker, cli.years).await;
    let batch = normalize(&ticker, &raw);

    if batch.bars.is_empty() {
        println!("No data obtained for {ticker}.");
        return Ok(());
    }
    if batch.dropped > 0 {
        tracing::warn!(dropped = batch.dropped, "some vendor rows were malformed");
    }

    let count = store.save(&batch.bars)?;
    println!("Fetched and saved {count} records for {ticker}.");
    Ok(())
}
