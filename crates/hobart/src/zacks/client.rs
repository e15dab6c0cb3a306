//! Provider client for the two calendar operations.

use crate::config::ZacksConfig;
use crate::error::{DataError, Result};
use crate::zacks::calendar::{self, EarningsCalendar};
use crate::zacks::estimates;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use reqwest::header::USER_AGENT;

/// Value of the AJAX-indicator header the calendar endpoint requires to
/// serve the tab-delimited export instead of a full HTML page.
const AJAX_INDICATOR: &str = "XMLHttpRequest";

/// Client for the provider's earnings endpoints.
///
/// Holds one HTTP client and the immutable configuration; no state is
/// shared between calls, so a single instance can serve concurrent callers.
/// Each operation issues exactly one outbound GET, bounded by the
/// configured timeout, with no internal retries.
pub struct ZacksClient {
    http: reqwest::Client,
    config: ZacksConfig,
}

impl ZacksClient {
    /// Create a client with the provider defaults (10s timeout).
    pub fn new() -> Result<Self> {
        Self::with_config(ZacksConfig::default())
    }

    /// Create a client from explicit configuration.
    ///
    /// # Example
    /// ```no_run
    /// use hobart::{ZacksClient, ZacksConfig};
    /// use std::time::Duration;
    ///
    /// # fn example() -> hobart::Result<()> {
    /// let config = ZacksConfig {
    ///     timeout: Duration::from_secs(3),
    ///     ..ZacksConfig::default()
    /// };
    /// let client = ZacksClient::with_config(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ZacksConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DataError::unexpected("client construction", e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Next projected earnings-report date for `symbol`.
    ///
    /// The symbol is lower-cased into the quote-page URL, matching the
    /// provider's canonical links. `Ok(None)` means the page carried no
    /// qualifying future date; that is normal for delisted or never-covered
    /// symbols, and for pages whose layout dropped the estimates table.
    ///
    /// # Errors
    /// [`DataError::Request`]/[`DataError::Status`] when the provider is
    /// unreachable or refuses the request, [`DataError::Parse`] when the
    /// page body cannot be decoded.
    ///
    /// # Example
    /// ```no_run
    /// use hobart::ZacksClient;
    ///
    /// # async fn example() -> hobart::Result<()> {
    /// let client = ZacksClient::new()?;
    /// match client.next_earnings_estimate("AAPL").await? {
    ///     Some(when) => println!("next report: {}", when.date()),
    ///     None => println!("no upcoming report found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn next_earnings_estimate(&self, symbol: &str) -> Result<Option<NaiveDateTime>> {
        let symbol = symbol.trim().to_lowercase();
        let context = format!("symbol {symbol}");
        let url = self.estimates_url(&symbol);

        tracing::debug!(symbol, url, "fetching detailed-estimates page");
        let request = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.config.estimates_user_agent);
        let body = self.fetch(request, &context).await?;

        estimates::extract_next_earnings_date(&body, &symbol, Utc::now().naive_utc())
    }

    /// Companies reporting earnings on `date`.
    ///
    /// The endpoint is keyed by the Unix timestamp of the date at midnight
    /// UTC; any timestamp within the day selects the same export. An empty
    /// calendar is a valid result (no earnings scheduled that day).
    ///
    /// # Errors
    /// [`DataError::Request`]/[`DataError::Status`] when the provider is
    /// unreachable or refuses the request, [`DataError::Parse`] when the
    /// export is structurally malformed.
    ///
    /// # Example
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use hobart::ZacksClient;
    ///
    /// # async fn example() -> hobart::Result<()> {
    /// let client = ZacksClient::new()?;
    /// let day = NaiveDate::from_ymd_opt(2017, 8, 12).unwrap();
    /// let calendar = client.earnings_by_date(day).await?;
    /// for row in calendar.iter() {
    ///     println!("{:?} {:?}", row.symbol(), row.company());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn earnings_by_date(&self, date: NaiveDate) -> Result<EarningsCalendar> {
        let context = format!("date {date}");
        let url = self.calendar_url(export_timestamp(date));

        tracing::debug!(%date, url, "fetching calendar export");
        let request = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.config.calendar_user_agent)
            .header("X-Requested-With", AJAX_INDICATOR);
        let body = self.fetch(request, &context).await?;

        calendar::parse_calendar(&body, date)
    }

    /// Issue one GET and return the body bytes, mapping transport failures
    /// and non-2xx statuses to typed errors.
    async fn fetch(&self, request: reqwest::RequestBuilder, context: &str) -> Result<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|source| DataError::request(context, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::status(context, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| DataError::request(context, source))?;
        Ok(body.to_vec())
    }

    fn estimates_url(&self, symbol: &str) -> String {
        format!(
            "{}/stock/quote/{}/detailed-estimates",
            self.config.base_url, symbol
        )
    }

    fn calendar_url(&self, timestamp: i64) -> String {
        format!(
            "{}/research/earnings/earning_export.php?timestamp={timestamp}&tab_id=1",
            self.config.base_url
        )
    }
}

/// Unix timestamp keying the calendar export: midnight UTC of the queried
/// date.
fn export_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

impl Default for ZacksClient {
    fn default() -> Self {
        Self::new().expect("Failed to create Zacks client")
    }
}

impl std::fmt::Debug for ZacksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZacksClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
