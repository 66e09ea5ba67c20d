//! Time-boxed holder for the most recent dataset.

use crate::records::Dataset;
use std::time::{Duration, Instant};

/// Where the dataset cache stands relative to its TTL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing has been fetched yet.
    Empty,
    /// A dataset younger than the TTL is available.
    Ready,
    /// The held dataset has outlived the TTL and will not be served.
    Stale,
}

#[derive(Debug)]
struct CacheEntry {
    dataset: Dataset,
    fetched_at: Instant,
}

/// Holds one dataset and the instant it was stored.
///
/// A dataset is served only while `now - fetched_at < ttl`. Reads hand out clones, so
/// callers never share state with the cache or with each other.
#[derive(Debug)]
pub struct DatasetCache {
    entry: Option<CacheEntry>,
    ttl: Duration,
}

impl DatasetCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn state_at(&self, now: Instant) -> CacheState {
        match &self.entry {
            None => CacheState::Empty,
            Some(e) if now.saturating_duration_since(e.fetched_at) < self.ttl => CacheState::Ready,
            Some(_) => CacheState::Stale,
        }
    }

    pub fn state(&self) -> CacheState {
        self.state_at(Instant::now())
    }

    /// A copy of the held dataset if it is still fresh at `now`.
    pub fn get_at(&self, now: Instant) -> Option<Dataset> {
        match self.state_at(now) {
            CacheState::Ready => self.entry.as_ref().map(|e| e.dataset.clone()),
            CacheState::Empty | CacheState::Stale => None,
        }
    }

    pub fn get(&self) -> Option<Dataset> {
        self.get_at(Instant::now())
    }

    /// Replaces whatever was held.
    pub fn put_at(&mut self, dataset: Dataset, now: Instant) {
        self.entry = Some(CacheEntry {
            dataset,
            fetched_at: now,
        });
    }

    pub fn put(&mut self, dataset: Dataset) {
        self.put_at(dataset, Instant::now());
    }

    /// How long ago the held dataset was stored.
    pub fn age(&self) -> Option<Duration> {
        self.entry.as_ref().map(|e| e.fetched_at.elapsed())
    }
}
