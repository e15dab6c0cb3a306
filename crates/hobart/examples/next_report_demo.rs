//! Demo of next-report-date lookup.
//!
//! This example demonstrates how to:
//! - Build a Zacks client with the default configuration
//! - Fetch the detailed-estimates page for a ticker
//! - Print the projected date of the next earnings report
//!
//! Run with: cargo run --example next_report_demo

use hobart::ZacksClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ZacksClient::new()?;

    let symbol = "aapl";
    println!("Fetching detailed estimates for {}...", symbol);

    match client.next_earnings_estimate(symbol).await? {
        Some(when) => {
            println!("\n{} next reports earnings on {}", symbol, when.format("%Y-%m-%d"));
        }
        None => {
            println!("\nNo upcoming report date published for {}", symbol);
        }
    }

    Ok(())
}
