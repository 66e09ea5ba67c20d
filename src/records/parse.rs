//! Text → typed value coercions used by the normalizer.

use chrono::{Datelike, NaiveDate};

/// Date layouts seen in the insider table and its mirrors, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b %d '%y", "%b %d %Y", "%B %d %Y"];

/// Parses locale-formatted currency text such as `$1,234.50` or `1,000,000`.
///
/// Currency symbols, thousands separators and surrounding whitespace are stripped
/// before parsing. Returns `None` when nothing numeric is left.
#[must_use]
pub fn parse_currency(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parses a share count such as `12,500`. Fractional or negative counts yield `None`.
#[must_use]
pub fn parse_count(s: &str) -> Option<u64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<u64>().ok()
}

/// Parses a trade date.
///
/// `today` anchors year-less dates (`Oct 14`): they take `today`'s year unless that
/// would put them in the future or the day does not exist that year (`Feb 29`), in
/// which case the previous year is used.
#[must_use]
pub fn parse_date(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Year-less `Mon DD`; `Feb 29` only exists in some years.
    let in_year = |year: i32| NaiveDate::parse_from_str(&format!("{s} {year}"), "%b %d %Y").ok();
    match in_year(today.year()) {
        Some(d) if d <= today => Some(d),
        _ => in_year(today.year() - 1),
    }
}
