//! Tab-delimited earnings-calendar exports.
//!
//! The calendar endpoint answers with a header row followed by one row per
//! reporting company. Column names are whatever the provider currently
//! exports (symbol and company plus time-of-day, EPS estimate, and so on);
//! rows keep them opaque and address them by header name.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Header name of the ticker column in the provider's export.
const SYMBOL_COLUMN: &str = "Symbol";

/// Header name of the company-name column in the provider's export.
const COMPANY_COLUMN: &str = "Company";

/// One company's entry for the queried day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    /// Column name → cell value, exactly as exported.
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl CalendarRow {
    /// Value of the named column, if the export carried it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Ticker symbol, when the export carries the standard column.
    pub fn symbol(&self) -> Option<&str> {
        self.get(SYMBOL_COLUMN)
    }

    /// Company name, when the export carries the standard column.
    pub fn company(&self) -> Option<&str> {
        self.get(COMPANY_COLUMN)
    }
}

/// All companies reporting earnings on one day, in provider order.
///
/// An empty calendar is a valid outcome: it means no earnings are scheduled
/// for the day, not that the query failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsCalendar {
    /// The queried day. Rows share it by contract; it is not a per-row
    /// field re-validated during parsing.
    pub date: NaiveDate,
    columns: Vec<String>,
    rows: Vec<CalendarRow>,
}

impl EarningsCalendar {
    /// Column names in provider order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in provider order.
    pub fn rows(&self) -> &[CalendarRow] {
        &self.rows
    }

    /// Number of companies reporting.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no company reports on the queried day.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in provider order.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarRow> {
        self.rows.iter()
    }
}

/// Parse a raw calendar export for `date` into rows.
///
/// An empty or header-only payload is a valid empty calendar.
///
/// # Errors
/// Returns [`DataError::Parse`] when the payload is not valid UTF-8 or a
/// row disagrees with the header on column count. Cell contents are never
/// validated; the provider's values pass through untouched.
pub fn parse_calendar(raw: &[u8], date: NaiveDate) -> Result<EarningsCalendar> {
    let context = format!("date {date}");
    let text = std::str::from_utf8(raw).map_err(|e| {
        DataError::parse(
            context.as_str(),
            format!("calendar export is not valid UTF-8: {e}"),
        )
    })?;

    if text.trim().is_empty() {
        return Ok(EarningsCalendar {
            date,
            columns: Vec::new(),
            rows: Vec::new(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| {
            DataError::parse(
                context.as_str(),
                format!("calendar header row unreadable: {e}"),
            )
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            DataError::parse(
                context.as_str(),
                format!("calendar row {} malformed: {e}", rows.len() + 1),
            )
        })?;
        let values = columns
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(CalendarRow { values });
    }

    tracing::debug!(%date, rows = rows.len(), "calendar export parsed");
    Ok(EarningsCalendar {
        date,
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 8, 12).unwrap()
    }

    #[test]
    fn test_single_row_export() {
        let calendar = parse_calendar(b"Symbol\tCompany\nMSFT\tMicrosoft Corp\n", day()).unwrap();
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.columns(), ["Symbol", "Company"]);

        let row = &calendar.rows()[0];
        assert_eq!(row.get("Symbol"), Some("MSFT"));
        assert_eq!(row.get("Company"), Some("Microsoft Corp"));
        assert_eq!(row.symbol(), Some("MSFT"));
        assert_eq!(row.company(), Some("Microsoft Corp"));
    }

    #[test]
    fn test_rows_preserve_provider_order() {
        let raw = b"Symbol\tCompany\nAAPL\tApple Inc.\nMSFT\tMicrosoft Corp\nNVDA\tNVIDIA Corp\n";
        let calendar = parse_calendar(raw, day()).unwrap();
        let symbols: Vec<_> = calendar.iter().filter_map(CalendarRow::symbol).collect();
        assert_eq!(symbols, ["AAPL", "MSFT", "NVDA"]);
    }

    #[test]
    fn test_provider_columns_pass_through_opaque() {
        let raw = b"Symbol\tCompany\tTime\tEstimate\nWMT\tWalmart Inc.\tBefore Open\t1.22\n";
        let calendar = parse_calendar(raw, day()).unwrap();
        let row = &calendar.rows()[0];
        assert_eq!(row.get("Time"), Some("Before Open"));
        assert_eq!(row.get("Estimate"), Some("1.22"));
        assert_eq!(row.get("Surprise"), None);
    }

    #[test]
    fn test_header_only_export_is_empty() {
        let calendar = parse_calendar(b"Symbol\tCompany\n", day()).unwrap();
        assert!(calendar.is_empty());
        assert_eq!(calendar.columns(), ["Symbol", "Company"]);
    }

    #[test]
    fn test_blank_export_is_empty() {
        let calendar = parse_calendar(b"", day()).unwrap();
        assert!(calendar.is_empty());
        assert!(calendar.columns().is_empty());
        assert_eq!(calendar.date, day());
    }

    #[test]
    fn test_ragged_row_is_a_parse_error() {
        let raw = b"Symbol\tCompany\nMSFT\tMicrosoft Corp\textra-field\n";
        let err = parse_calendar(raw, day()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_undecodable_export_is_a_parse_error() {
        let raw = [0x53, 0x79, 0xff, 0xfe, 0x6d];
        let err = parse_calendar(&raw, day()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_row_serializes_by_column_name() {
        let calendar = parse_calendar(b"Symbol\tCompany\nMSFT\tMicrosoft Corp\n", day()).unwrap();
        let json = serde_json::to_value(&calendar.rows()[0]).unwrap();
        assert_eq!(json["Symbol"], "MSFT");
        assert_eq!(json["Company"], "Microsoft Corp");
    }
}
