//! Plain-text trade summaries.

use std::fmt;

use crate::records::{Dataset, TransactionRecord};

/// How many rows the summary lists.
const TOP_N: usize = 5;

/// Formats `v` as US dollars with thousands separators and two decimals (`$1,234.50`).
#[must_use]
pub fn format_usd(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// A titled summary of a dataset: count, total value and the largest trades.
///
/// Rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct TradeSummary<'a> {
    dataset: &'a Dataset,
    title: &'a str,
    market_cap_percent: bool,
}

impl<'a> TradeSummary<'a> {
    pub fn new(dataset: &'a Dataset, title: &'a str) -> Self {
        Self {
            dataset,
            title,
            market_cap_percent: false,
        }
    }

    /// Include the "Trade % of Market Cap" column.
    #[must_use]
    pub fn market_cap_percent(mut self, show: bool) -> Self {
        self.market_cap_percent = show;
        self
    }

    fn row(&self, r: &TransactionRecord) -> Vec<String> {
        let mut cells = vec![
            r.ticker.clone(),
            r.owner.clone(),
            r.relationship.clone(),
            r.date.format("%Y-%m-%d").to_string(),
            r.transaction.to_string(),
            format_usd(r.value),
        ];
        if self.market_cap_percent {
            cells.push(format!("{:.4}", r.market_cap_percent));
        }
        cells
    }
}

impl fmt::Display for TradeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== {} ===", self.title)?;
        if self.dataset.is_empty() {
            return writeln!(f, "No trades found matching the criteria.");
        }

        writeln!(f, "Number of trades: {}", self.dataset.len())?;
        writeln!(f, "Total value: {}", format_usd(self.dataset.total_value()))?;
        writeln!(f, "\nTop {TOP_N} trades by value:")?;

        let mut header = vec![
            "Ticker",
            "Owner",
            "Relationship",
            "Date",
            "Transaction",
            "Value ($)",
        ];
        if self.market_cap_percent {
            header.push("Trade % of Market Cap");
        }

        let rows: Vec<Vec<String>> = self
            .dataset
            .top(TOP_N)
            .iter()
            .map(|r| self.row(r))
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let line = |cells: &[&str]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        writeln!(f, "{}", line(&header))?;
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            writeln!(f, "{}", line(&cells))?;
        }
        Ok(())
    }
}
