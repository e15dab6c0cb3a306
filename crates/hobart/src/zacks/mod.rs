//! Zacks earnings-data fetching and extraction.
//!
//! This module covers the two provider operations:
//! - Next projected earnings-report date for a ticker, extracted from the
//!   detailed-estimates page by an ordered strategy chain
//! - All companies reporting on a given day, parsed from the tab-delimited
//!   calendar export
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use hobart::zacks::ZacksClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZacksClient::new()?;
//!
//!     // Next report date for one symbol
//!     if let Some(when) = client.next_earnings_estimate("AAPL").await? {
//!         println!("AAPL reports next on {}", when.date());
//!     }
//!
//!     // Everyone reporting on a given day
//!     let day = NaiveDate::from_ymd_opt(2017, 8, 12).unwrap();
//!     let calendar = client.earnings_by_date(day).await?;
//!     for row in calendar.iter() {
//!         println!("{:8} {}", row.symbol().unwrap_or("?"), row.company().unwrap_or("?"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod client;
pub mod estimates;

// Re-export main types
pub use calendar::{CalendarRow, EarningsCalendar, parse_calendar};
pub use client::ZacksClient;
pub use estimates::extract_next_earnings_date;
