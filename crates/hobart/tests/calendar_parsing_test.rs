//! Integration tests for calendar-export parsing over response fixtures.

use chrono::NaiveDate;
use hobart::zacks::parse_calendar;
use hobart::ErrorKind;

const EXPORT: &str = include_str!("fixtures/earnings_export.tsv");
const EXPORT_EMPTY: &str = include_str!("fixtures/earnings_export_empty.tsv");

fn report_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 8, 10).unwrap()
}

#[test]
fn test_export_fixture_parses_every_row() {
    let calendar = parse_calendar(EXPORT.as_bytes(), report_day()).unwrap();
    assert_eq!(calendar.len(), 5);
    assert_eq!(calendar.date, report_day());
}

#[test]
fn test_export_fixture_preserves_column_order() {
    let calendar = parse_calendar(EXPORT.as_bytes(), report_day()).unwrap();
    assert_eq!(
        calendar.columns(),
        [
            "Symbol",
            "Company",
            "Market Cap(M)",
            "Time",
            "Estimate",
            "Reported",
            "Surprise",
        ]
    );
}

#[test]
fn test_export_fixture_row_fields() {
    let calendar = parse_calendar(EXPORT.as_bytes(), report_day()).unwrap();
    let first = &calendar.rows()[0];
    assert_eq!(first.symbol(), Some("KSS"));
    assert_eq!(first.company(), Some("Kohl's Corporation"));

    // Provider-specific columns ride along untouched.
    let nvidia = &calendar.rows()[2];
    assert_eq!(nvidia.symbol(), Some("NVDA"));
    assert_eq!(nvidia.get("Surprise"), Some("44.29%"));
    assert_eq!(nvidia.get("Market Cap(M)"), Some("97543.32"));
}

#[test]
fn test_export_fixture_iterates_in_file_order() {
    let calendar = parse_calendar(EXPORT.as_bytes(), report_day()).unwrap();
    let symbols: Vec<_> = calendar.iter().filter_map(|row| row.symbol()).collect();
    assert_eq!(symbols, ["KSS", "M", "NVDA", "SNAP", "TTD"]);
}

#[test]
fn test_header_only_export_is_a_valid_empty_calendar() {
    // Weekends and market holidays export just the header line.
    let calendar = parse_calendar(EXPORT_EMPTY.as_bytes(), report_day()).unwrap();
    assert!(calendar.is_empty());
    assert_eq!(calendar.columns().len(), 7);
}

#[test]
fn test_short_row_is_a_parse_error() {
    let raw = b"Symbol\tCompany\tTime\nMSFT\tMicrosoft Corp\n";
    let err = parse_calendar(raw, report_day()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}
