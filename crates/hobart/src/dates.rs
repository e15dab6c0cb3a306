//! Recovering dates embedded in free-form text.
//!
//! Provider pages rarely present a bare date: cells read like
//! `"Next Report Date 1/30/25 *AMC"` or `"Sept. 3, 2025"`. The scanner here
//! finds date-shaped substrings and parses the first one that yields a real
//! calendar date, leaving the extraction strategies free of date grammar.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

/// Years outside this window are treated as non-dates. Catches numeric runs
/// that happen to parse (a bare "25" becoming year 0025) without rejecting
/// anything the provider could plausibly publish.
const YEAR_WINDOW: RangeInclusive<i32> = 1990..=2100;

/// Three-letter prefixes of the month names, index = month - 1. Full names
/// all begin with their abbreviation, so prefix matching covers both.
const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// ISO formats with a time-of-day component, most specific first.
const ISO_TIMED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-shaped substrings: ISO (optionally with a time suffix), US slash
/// form with two- or four-digit years, and month-name forms.
static DATE_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}(?::\d{2})?)?\b",
        r"|\b\d{1,2}/\d{1,2}/\d{2,4}\b",
        r"|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.? \d{1,2},? \d{4}\b",
    ))
    .expect("date candidate pattern")
});

/// Parse the first date embedded in `text`, tolerating surrounding non-date
/// content.
///
/// Candidates are scanned left to right; a candidate that fails to resolve
/// to a real calendar date (impossible month/day, implausible year) is
/// skipped rather than failing the scan. ISO candidates keep an annotated
/// time of day; all other matches resolve to midnight.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use hobart::dates::parse_embedded_date;
///
/// let parsed = parse_embedded_date("Next Report Date 1/30/25 *AMC");
/// assert_eq!(parsed.map(|dt| dt.date()), NaiveDate::from_ymd_opt(2025, 1, 30));
/// ```
pub fn parse_embedded_date(text: &str) -> Option<NaiveDateTime> {
    let normalized = normalize_whitespace(text);
    for candidate in DATE_CANDIDATE.find_iter(&normalized) {
        if let Some(found) = parse_candidate(candidate.as_str()) {
            if YEAR_WINDOW.contains(&found.year()) {
                return Some(found);
            }
        }
    }
    None
}

/// Collapse all whitespace runs (including non-breaking spaces from markup)
/// to single spaces and trim.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_candidate(raw: &str) -> Option<NaiveDateTime> {
    let token = raw.trim();
    if token.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return parse_month_name(token).map(|date| date.and_time(NaiveTime::MIN));
    }
    if token.contains('/') {
        let year_len = token.rsplit('/').next().map_or(0, str::len);
        let format = if year_len == 4 { "%m/%d/%Y" } else { "%m/%d/%y" };
        return NaiveDate::parse_from_str(token, format)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN));
    }
    parse_iso(token)
}

/// ISO candidates may carry the provider's time-of-day annotation; keep it
/// when present, fall back to midnight for a bare date.
fn parse_iso(token: &str) -> Option<NaiveDateTime> {
    for format in ISO_TIMED_FORMATS {
        if let Ok(found) = NaiveDateTime::parse_from_str(token, format) {
            return Some(found);
        }
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn parse_month_name(token: &str) -> Option<NaiveDate> {
    let lower = token.to_lowercase();
    let word: String = lower
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    let month = MONTH_ABBREVS.iter().position(|a| word.starts_with(a))? as u32 + 1;

    let digits: String = lower
        .chars()
        .map(|c| if c.is_ascii_digit() { c } else { ' ' })
        .collect();
    let mut parts = digits.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01/30/2025", 2025, 1, 30)]
    #[case("1/30/25", 2025, 1, 30)]
    #[case("Next Report Date 1/30/25 *AMC", 2025, 1, 30)]
    #[case("2025-07-22", 2025, 7, 22)]
    #[case("updated 2025-07-22T13:05:00Z", 2025, 7, 22)]
    #[case("Jan 5, 2026", 2026, 1, 5)]
    #[case("September 3, 2025", 2025, 9, 3)]
    #[case("Sept. 3, 2025", 2025, 9, 3)]
    #[case("reported May 1 2024 after close", 2024, 5, 1)]
    fn test_embedded_date_found(
        #[case] text: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let parsed = parse_embedded_date(text).map(|dt| dt.date());
        assert_eq!(parsed, NaiveDate::from_ymd_opt(year, month, day));
    }

    #[rstest]
    #[case("")]
    #[case("no dates here")]
    #[case("Zacks Rank 3 (Hold)")]
    #[case("13/45/2025")]
    #[case("0025-01-01")]
    #[case("$4.92 per share")]
    fn test_embedded_date_absent(#[case] text: &str) {
        assert_eq!(parse_embedded_date(text), None);
    }

    #[test]
    fn test_first_candidate_wins() {
        let parsed = parse_embedded_date("from 03/15/2024 through 06/15/2024");
        assert_eq!(
            parsed.map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_unparsable_candidate_is_skipped() {
        // "14/01/2031" is date-shaped but has no month 14; the scan moves on.
        let parsed = parse_embedded_date("14/01/2031 then 02/14/2031");
        assert_eq!(
            parsed.map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2031, 2, 14)
        );
    }

    #[test]
    fn test_whitespace_is_normalized_before_scanning() {
        let parsed = parse_embedded_date("Jan\u{a0}5,\n\t 2026");
        assert_eq!(
            parsed.map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2026, 1, 5)
        );
    }

    #[test]
    fn test_midnight_for_date_only_text() {
        let parsed = parse_embedded_date("04/30/2025");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 4, 30).map(|d| d.and_time(NaiveTime::MIN))
        );
    }

    #[test]
    fn test_iso_time_of_day_is_preserved() {
        let parsed = parse_embedded_date("call scheduled 2025-07-22 16:30");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 7, 22).and_then(|d| d.and_hms_opt(16, 30, 0))
        );
    }

    #[test]
    fn test_iso_seconds_are_preserved() {
        let parsed = parse_embedded_date("as of 2025-07-22T13:05:09");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 7, 22).and_then(|d| d.and_hms_opt(13, 5, 9))
        );
    }
}
