//! Pluggable ways of finding the insider table inside a document.
//!
//! The page has no published contract; every strategy here is a best-effort heuristic
//! tied to the markup as last observed. Add or reorder locators on the
//! [`TableExtractor`](super::TableExtractor) when the markup moves.

use scraper::{ElementRef, Html, Selector};

/// Finds a candidate table in a parsed document.
pub trait TableLocator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns the table element, or `None` when this strategy does not apply.
    fn locate<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>>;
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::debug!(css, error = %e, "invalid selector");
            None
        }
    }
}

/// Strategy A: the table carries a stable `id` attribute.
#[derive(Debug, Clone)]
pub struct ById {
    id: String,
}

impl ById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl TableLocator for ById {
    fn name(&self) -> &str {
        "by-id"
    }

    fn locate<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        let sel = selector(&format!("table[id=\"{}\"]", self.id))?;
        doc.select(&sel).next()
    }
}

/// Strategy B: the `index`-th table (zero-based) inside the first element matching `region`.
///
/// The page's content region opens with a navigation/ad table, so the data table is the
/// second one. Breaks as soon as the page adds or removes a table ahead of it.
#[derive(Debug, Clone)]
pub struct NthTableInRegion {
    region: String,
    index: usize,
}

impl NthTableInRegion {
    pub fn new(region: impl Into<String>, index: usize) -> Self {
        Self {
            region: region.into(),
            index,
        }
    }
}

impl TableLocator for NthTableInRegion {
    fn name(&self) -> &str {
        "nth-table-in-region"
    }

    fn locate<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        let region_sel = selector(&self.region)?;
        let table_sel = selector("table")?;
        let region = doc.select(&region_sel).next()?;
        let tables: Vec<_> = region.select(&table_sel).collect();
        tracing::debug!(
            region = %self.region,
            tables = tables.len(),
            "scanning content region for tables"
        );
        tables.get(self.index).copied()
    }
}
