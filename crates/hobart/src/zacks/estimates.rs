//! Next-report-date extraction from the detailed-estimates page.
//!
//! The provider publishes the next report date inside a labeled summary
//! table, but the markup is not a contract: the label wording shifts, and
//! the whole table is sometimes dropped in favor of a bare styled `<span>`.
//! Extraction therefore runs an ordered chain of strategies over the parsed
//! page and takes the first qualifying hit.

use crate::dates::{normalize_whitespace, parse_embedded_date};
use crate::error::{DataError, Result};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Phrases identifying a table that carries the next report date.
const MARKER_PHRASES: &[&str] = &["next report", "earnings date", "next earnings"];

/// Class-attribute fragments identifying styled date containers.
const CLASS_MARKERS: &[&str] = &["date", "earnings", "report"];

// Constant selectors, compiled on first use.
static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("table selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("cell selector"));
static CLASSED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[class]").expect("class attribute selector"));

/// One extraction attempt over the parsed page. Strategies never fail, they
/// only decline; declining hands the page to the next strategy.
type Strategy = fn(&Html, NaiveDateTime) -> Option<NaiveDateTime>;

/// Strategy chain in priority order. First qualifying date wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("keyword-table", scan_keyword_tables),
    ("styled-container", scan_styled_containers),
];

/// Extract the next earnings-report date for `symbol` from the raw bytes of
/// its detailed-estimates page.
///
/// Absence is a normal outcome: a page with no qualifying future date
/// yields `Ok(None)`. Dates at or before `now` never qualify, so historical
/// report dates elsewhere on the page are never returned.
///
/// # Arguments
/// * `raw` - response body of the detailed-estimates page
/// * `symbol` - queried ticker, used for log context
/// * `now` - qualifying dates must be strictly later than this moment
///
/// # Errors
/// Returns [`DataError::Parse`] if the body is not valid UTF-8; a body that
/// cannot be decoded as text cannot be tokenized into tables at all. (The
/// HTML tree builder itself accepts any text, so decoding is the only
/// structural failure.)
pub fn extract_next_earnings_date(
    raw: &[u8],
    symbol: &str,
    now: NaiveDateTime,
) -> Result<Option<NaiveDateTime>> {
    let html = std::str::from_utf8(raw).map_err(|e| {
        DataError::parse(
            format!("symbol {symbol}"),
            format!("estimates page is not valid UTF-8: {e}"),
        )
    })?;
    let document = Html::parse_document(html);

    for (name, strategy) in STRATEGIES {
        if let Some(found) = strategy(&document, now) {
            tracing::debug!(symbol, strategy = name, date = %found, "next report date extracted");
            return Ok(Some(found));
        }
        tracing::debug!(symbol, strategy = name, "no qualifying date");
    }
    Ok(None)
}

/// Tables whose text mentions a marker phrase, cells scanned in document
/// order for the first date strictly later than `now`.
fn scan_keyword_tables(document: &Html, now: NaiveDateTime) -> Option<NaiveDateTime> {
    for table in document.select(&TABLE_SELECTOR) {
        let text = normalize_whitespace(&table.text().collect::<String>()).to_lowercase();
        if !MARKER_PHRASES.iter().any(|phrase| text.contains(phrase)) {
            continue;
        }
        for cell in table.select(&CELL_SELECTOR) {
            if let Some(found) = future_date_in(cell, now) {
                return Some(found);
            }
        }
    }
    None
}

/// Fallback: any element whose class attribute names a date, earnings, or
/// report container, in document order.
fn scan_styled_containers(document: &Html, now: NaiveDateTime) -> Option<NaiveDateTime> {
    for element in document.select(&CLASSED_SELECTOR) {
        let Some(class) = element.value().attr("class") else {
            continue;
        };
        let class = class.to_lowercase();
        if !CLASS_MARKERS.iter().any(|marker| class.contains(marker)) {
            continue;
        }
        if let Some(found) = future_date_in(element, now) {
            return Some(found);
        }
    }
    None
}

/// The first date embedded in the element's text, if it is in the future.
/// Unparseable text declines silently; a past date declines too, so the
/// caller keeps scanning.
fn future_date_in(element: ElementRef<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let text = element.text().collect::<String>();
    parse_embedded_date(&text).filter(|found| *found > now)
}
