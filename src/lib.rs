//! insider-tracker: the public insider-trading table as typed, filterable records.
//!
//! The pipeline is fetch → [`table`] extraction → [`records`] normalization →
//! [`enrich`]ment with market caps → cached [`Dataset`] → filters and reports, driven
//! by [`InsiderTracker`].

pub mod core;
pub mod enrich;
pub mod market_cap;
pub mod records;
pub mod report;
pub mod table;
pub mod tracker;

#[cfg(feature = "tracing-subscriber")]
pub mod telemetry;

pub use crate::core::{CacheMode, TrackerError};
pub use enrich::Enricher;
pub use market_cap::{AlphaVantageProvider, MarketCapCache, MarketCapProvider, MarketCapResolver};
pub use records::{Dataset, TransactionKind, TransactionRecord};
pub use report::TradeSummary;
pub use table::{RawTable, TableExtractor, TableLocator};
pub use tracker::{CacheState, DatasetCache, FilterCriteria, InsiderTracker, InsiderTrackerBuilder};
