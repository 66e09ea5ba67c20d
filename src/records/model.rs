// src/records/model.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// The kind of trade as printed in the table's `Transaction` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionKind {
    /// Open-market purchase.
    Buy,
    /// Open-market sale.
    Sale,
    /// Exercise of options or other derivative securities.
    OptionExercise,
    /// A Form 144 notice of a planned sale.
    ProposedSale,
    /// Anything the table prints that is not one of the above.
    Other(String),
}

impl TransactionKind {
    /// The label exactly as the table prints it.
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Buy => "Buy",
            TransactionKind::Sale => "Sale",
            TransactionKind::OptionExercise => "Option Exercise",
            TransactionKind::ProposedSale => "Proposed Sale",
            TransactionKind::Other(s) => s,
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Buy" => TransactionKind::Buy,
            "Sale" => TransactionKind::Sale,
            "Option Exercise" => TransactionKind::OptionExercise,
            "Proposed Sale" => TransactionKind::ProposedSale,
            other => TransactionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionKind {
    fn from(s: String) -> Self {
        TransactionKind::from(s.as_str())
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single insider trade, typed and optionally enriched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// The issuer's ticker symbol. Never empty.
    pub ticker: String,
    /// The insider who traded.
    pub owner: String,
    /// The insider's role at the issuer (e.g. "CEO", "10% Owner").
    pub relationship: String,
    /// The trade date.
    pub date: NaiveDate,
    /// What kind of trade this was.
    pub transaction: TransactionKind,
    /// Price per share.
    pub cost: f64,
    /// Number of shares traded, when the table carries it.
    pub shares: Option<u64>,
    /// Total trade value in dollars.
    pub value: f64,
    /// Shares held after the trade, when the table carries it.
    pub shares_total: Option<u64>,
    /// Filing stamp of the SEC Form 4, when the table carries it.
    pub sec_form4: Option<String>,
    /// Issuer market capitalization; `0.0` when unavailable.
    pub market_cap: f64,
    /// `100 * value / market_cap`; `0.0` when the market cap is unavailable.
    pub market_cap_percent: f64,
}

impl TransactionRecord {
    /// The trade date at midnight, for comparisons against wall-clock cutoffs.
    pub fn traded_at(&self) -> NaiveDateTime {
        self.date.and_time(chrono::NaiveTime::MIN)
    }
}

/// Records ordered by trade value, largest first.
///
/// Every filter returns a new `Dataset`; the relative order of the records it keeps
/// is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<TransactionRecord>,
}

impl Dataset {
    /// Builds a dataset, sorting by value descending. Equal values keep their input order.
    pub fn from_records(mut records: Vec<TransactionRecord>) -> Self {
        records.sort_by(|a, b| b.value.total_cmp(&a.value));
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }

    /// Sum of all trade values.
    pub fn total_value(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }

    /// The `n` largest trades.
    pub fn top(&self, n: usize) -> &[TransactionRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Returns a new dataset holding clones of the records that satisfy `pred`.
    pub fn filter<F>(&self, mut pred: F) -> Dataset
    where
        F: FnMut(&TransactionRecord) -> bool,
    {
        Dataset {
            records: self.records.iter().filter(|r| pred(*r)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = TransactionRecord;
    type IntoIter = std::vec::IntoIter<TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
