//! Locate the insider table in a raw HTML document and pull out header labels and
//! cell text.
//!
//! Internals are split into:
//! - `strategies`: the [`TableLocator`] trait and the built-in locators
//! - `text`:       visible-text extraction for cells

mod strategies;
mod text;

pub use strategies::{ById, NthTableInRegion, TableLocator};

use crate::core::TrackerError;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};
use text::{cell_text, header_text};

/// `id` of the data table on the insider page.
pub const INSIDER_TABLE_ID: &str = "insider-table";

/// Header labels and the text of every row whose arity matches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows skipped because their cell count differed from the header count.
    pub dropped: usize,
    /// Name of the locator that found the table.
    pub strategy: String,
}

/// Tries each [`TableLocator`] in order and extracts the first table found.
pub struct TableExtractor {
    locators: Vec<Box<dyn TableLocator>>,
}

impl Default for TableExtractor {
    /// `#insider-table` first, then the second table inside `div.content`.
    fn default() -> Self {
        Self::new(vec![
            Box::new(ById::new(INSIDER_TABLE_ID)),
            Box::new(NthTableInRegion::new("div.content", 1)),
        ])
    }
}

impl std::fmt::Debug for TableExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.locators.iter().map(|l| l.name()))
            .finish()
    }
}

impl TableExtractor {
    pub fn new(locators: Vec<Box<dyn TableLocator>>) -> Self {
        Self { locators }
    }

    /// Appends a locator tried after the existing ones.
    #[must_use]
    pub fn with_locator(mut self, locator: impl TableLocator + 'static) -> Self {
        self.locators.push(Box::new(locator));
        self
    }

    /// Extracts headers and rows from `html`.
    ///
    /// The header row is the first `tr.header-row`, else the table's first `tr`. Every
    /// later row is split into `td` cells; rows whose cell count differs from the header
    /// count are dropped and counted in [`RawTable::dropped`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Extraction`] when no locator finds a table, the header
    /// row has no cells, or data rows exist but none matches the header arity.
    pub fn extract(&self, html: &str) -> Result<RawTable, TrackerError> {
        let doc = Html::parse_document(html);

        let (table, strategy) = self
            .locators
            .iter()
            .find_map(|l| {
                let found = l.locate(&doc);
                tracing::debug!(strategy = l.name(), hit = found.is_some(), "table locator");
                found.map(|t| (t, l.name().to_string()))
            })
            .ok_or_else(|| {
                TrackerError::Extraction("could not find insider trading table on the page".into())
            })?;

        let (headers, rows, dropped) = split_table(table)?;

        if dropped > 0 {
            tracing::debug!(dropped, kept = rows.len(), "dropped rows with mismatched cell count");
        }
        if rows.is_empty() && dropped > 0 {
            return Err(TrackerError::Extraction(format!(
                "none of {dropped} rows matches the {}-column header",
                headers.len()
            )));
        }

        Ok(RawTable {
            headers,
            rows,
            dropped,
            strategy,
        })
    }
}

type Split = (Vec<String>, Vec<Vec<String>>, usize);

fn split_table(table: ElementRef<'_>) -> Result<Split, TrackerError> {
    let sel = |css: &str| {
        Selector::parse(css)
            .map_err(|e| TrackerError::Extraction(format!("selector `{css}`: {e}")))
    };
    let tr = sel("tr")?;
    let header_cell = sel("th, td")?;
    let data_cell = sel("td")?;

    let all_rows: Vec<ElementRef<'_>> = table.select(&tr).collect();
    let header_idx = all_rows
        .iter()
        .position(|r| {
            r.value()
                .has_class("header-row", CaseSensitivity::AsciiCaseInsensitive)
        })
        .unwrap_or(0);
    let header_row = all_rows
        .get(header_idx)
        .ok_or_else(|| TrackerError::Extraction("table has no rows".into()))?;

    let headers: Vec<String> = header_row.select(&header_cell).map(header_text).collect();
    if headers.is_empty() {
        return Err(TrackerError::Extraction("header row has no cells".into()));
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for row in &all_rows[header_idx + 1..] {
        let cells: Vec<String> = row.select(&data_cell).map(cell_text).collect();
        if cells.len() == headers.len() {
            rows.push(cells);
        } else {
            dropped += 1;
        }
    }

    Ok((headers, rows, dropped))
}
