//! Demo of the daily earnings calendar.
//!
//! This example demonstrates how to:
//! - Build a Zacks client with the default configuration
//! - Download the earnings-calendar export for a historical date
//! - Walk the rows the provider returned
//!
//! Run with: cargo run --example calendar_demo

use chrono::NaiveDate;
use hobart::ZacksClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ZacksClient::new()?;

    // A historical weekday with a packed reporting calendar.
    let day = NaiveDate::from_ymd_opt(2017, 8, 10).expect("valid date");
    println!("Fetching the earnings calendar for {}...", day);

    let calendar = client.earnings_by_date(day).await?;
    if calendar.is_empty() {
        println!("\nNo companies report on {}", calendar.date);
        return Ok(());
    }

    println!("\n{} companies report on {}:", calendar.len(), calendar.date);
    for row in calendar.iter().take(10) {
        println!(
            "  {} - {}",
            row.symbol().unwrap_or("?"),
            row.company().unwrap_or("(unnamed)")
        );
    }
    if calendar.len() > 10 {
        println!("  ... and {} more", calendar.len() - 10);
    }

    Ok(())
}
