//! Hobart CLI binary.
//!
//! Command-line lookups against the Zacks earnings pages.

use std::process;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use hobart::ZacksClient;
use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Earnings-report dates and calendars from Zacks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the projected date of a company's next earnings report
    Next {
        /// Ticker symbol
        symbol: String,

        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the companies reporting earnings on a date
    Calendar {
        /// Calendar date as YYYY-MM-DD (defaults to today)
        date: Option<String>,

        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hobart=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Next { symbol, format } => {
            next_report(&symbol, &format).await?;
        }
        Commands::Calendar { date, format } => {
            calendar(date.as_deref(), &format).await?;
        }
    }

    Ok(())
}

async fn next_report(symbol: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = ZacksClient::new()?;
    let next = client.next_earnings_estimate(symbol).await?;

    if format.to_lowercase() == "json" {
        let output = json!({
            "symbol": symbol.trim().to_lowercase(),
            "next_report_date": next.map(|when| when.format("%Y-%m-%d").to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match next {
        Some(when) => {
            println!("{} next reports earnings on {}", symbol, when.format("%Y-%m-%d"));
        }
        None => {
            println!("No upcoming report date published for {}", symbol);
        }
    }

    Ok(())
}

async fn calendar(date: Option<&str>, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let day = match date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(parsed) => parsed,
            Err(e) => {
                return Err(format!("Invalid date {:?} (expected YYYY-MM-DD): {}", raw, e).into());
            }
        },
        None => Utc::now().date_naive(),
    };

    let client = ZacksClient::new()?;
    let calendar = client.earnings_by_date(day).await?;

    if format.to_lowercase() == "json" {
        let output = json!({
            "date": calendar.date.format("%Y-%m-%d").to_string(),
            "count": calendar.len(),
            "companies": calendar.rows(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if calendar.is_empty() {
        println!("No companies report on {}", calendar.date);
        return Ok(());
    }

    println!("{} companies report on {}:", calendar.len(), calendar.date);
    for row in calendar.iter() {
        println!(
            "  {} - {}",
            row.symbol().unwrap_or("?"),
            row.company().unwrap_or("(unnamed)")
        );
    }

    Ok(())
}
