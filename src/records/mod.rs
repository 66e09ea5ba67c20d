//! Typed insider-trade records and the normalizer that builds them from raw table text.

mod model;
pub mod parse;

pub use model::{Dataset, TransactionKind, TransactionRecord};

use crate::core::TrackerError;
use chrono::NaiveDate;
use parse::{parse_count, parse_currency, parse_date};

/// Header labels of the insider table.
pub mod columns {
    pub const TICKER: &str = "Ticker";
    pub const OWNER: &str = "Owner";
    pub const RELATIONSHIP: &str = "Relationship";
    pub const DATE: &str = "Date";
    pub const TRANSACTION: &str = "Transaction";
    pub const COST: &str = "Cost";
    pub const SHARES: &str = "#Shares";
    pub const VALUE: &str = "Value ($)";
    pub const SHARES_TOTAL: &str = "#Shares Total";
    pub const SEC_FORM4: &str = "SEC Form 4";
}

struct Layout {
    ticker: usize,
    owner: usize,
    relationship: usize,
    date: usize,
    transaction: usize,
    cost: usize,
    value: usize,
    shares: Option<usize>,
    shares_total: Option<usize>,
    sec_form4: Option<usize>,
}

impl Layout {
    fn resolve(headers: &[String]) -> Result<Self, TrackerError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| TrackerError::MissingColumn(name.to_string()));

        Ok(Layout {
            ticker: require(columns::TICKER)?,
            owner: require(columns::OWNER)?,
            relationship: require(columns::RELATIONSHIP)?,
            date: require(columns::DATE)?,
            transaction: require(columns::TRANSACTION)?,
            cost: require(columns::COST)?,
            value: require(columns::VALUE)?,
            shares: find(columns::SHARES),
            shares_total: find(columns::SHARES_TOTAL),
            sec_form4: find(columns::SEC_FORM4),
        })
    }
}

/// Coerces a whole column; one bad cell fails the column.
fn coerce_column<T>(
    rows: &[Vec<String>],
    idx: usize,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, TrackerError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cell = row.get(idx).map(String::as_str).unwrap_or_default();
            parse(cell).ok_or_else(|| {
                TrackerError::Data(format!("column `{name}`: cannot parse {cell:?} (row {i})"))
            })
        })
        .collect()
}

fn optional(row: &[String], idx: Option<usize>) -> Option<&String> {
    idx.and_then(|i| row.get(i))
}

fn is_valid_amount(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Converts raw rows into a value-sorted [`Dataset`].
///
/// The date, value and cost columns are coerced as a whole: a single cell that cannot
/// be parsed fails the entire call with [`TrackerError::Data`]. Records whose ticker is
/// blank or whose value/cost parse to a negative or non-finite number are rejected
/// individually. Fails with [`TrackerError::EmptyData`] when there is nothing to
/// normalize or nothing survives.
///
/// `today` anchors year-less dates (see [`parse::parse_date`]).
pub fn normalize(
    headers: &[String],
    rows: &[Vec<String>],
    today: NaiveDate,
) -> Result<Dataset, TrackerError> {
    if rows.is_empty() {
        return Err(TrackerError::EmptyData(
            "no rows found in the insider trading table".into(),
        ));
    }

    let layout = Layout::resolve(headers)?;

    let dates = coerce_column(rows, layout.date, columns::DATE, |s| parse_date(s, today))?;
    let values = coerce_column(rows, layout.value, columns::VALUE, parse_currency)?;
    let costs = coerce_column(rows, layout.cost, columns::COST, parse_currency)?;

    let cell = |row: &Vec<String>, idx: usize| row.get(idx).cloned().unwrap_or_default();

    let mut rejected = 0usize;
    let mut records = Vec::with_capacity(rows.len());

    for (((row, date), value), cost) in rows.iter().zip(dates).zip(values).zip(costs) {
        let ticker = cell(row, layout.ticker);
        if ticker.is_empty() || !is_valid_amount(value) || !is_valid_amount(cost) {
            rejected += 1;
            continue;
        }

        records.push(TransactionRecord {
            ticker,
            owner: cell(row, layout.owner),
            relationship: cell(row, layout.relationship),
            date,
            transaction: TransactionKind::from(cell(row, layout.transaction)),
            cost,
            shares: optional(row, layout.shares).and_then(|s| parse_count(s)),
            value,
            shares_total: optional(row, layout.shares_total).and_then(|s| parse_count(s)),
            sec_form4: optional(row, layout.sec_form4)
                .filter(|s| !s.is_empty())
                .cloned(),
            market_cap: 0.0,
            market_cap_percent: 0.0,
        });
    }

    if rejected > 0 {
        tracing::debug!(rejected, kept = records.len(), "rejected malformed records");
    }

    if records.is_empty() {
        return Err(TrackerError::EmptyData(format!(
            "all {rejected} rows were rejected"
        )));
    }

    Ok(Dataset::from_records(records))
}
