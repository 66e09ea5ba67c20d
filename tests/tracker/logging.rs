use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tracing::span::{Attributes, Id, Record};
use tracing::{Dispatch, Event, Level, Metadata, Subscriber};

use crate::common;

/// Counts events per level; spans are accepted and ignored.
#[derive(Clone, Default)]
struct Counter {
    warns: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
    next_span: Arc<AtomicU64>,
}

impl Subscriber for Counter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(self.next_span.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        match *event.metadata().level() {
            Level::WARN => self.warns.fetch_add(1, Ordering::SeqCst),
            Level::ERROR => self.errors.fetch_add(1, Ordering::SeqCst),
            _ => 0,
        };
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[tokio::test]
async fn injected_dispatch_receives_tracker_logs() {
    let server = common::setup_server();
    let _mock = common::mock_insider_fixture(&server, "no_table");

    let counter = Counter::default();
    let mut tracker = common::builder(&server)
        .dispatch(Dispatch::new(counter.clone()))
        .build()
        .unwrap();

    // Missing credential is reported once, at build time.
    assert_eq!(counter.warns.load(Ordering::SeqCst), 1);

    assert!(tracker.trades_by_market_cap_percent(1.0).await.is_empty());
    assert_eq!(counter.warns.load(Ordering::SeqCst), 2);

    assert!(tracker.fetch(true).await.is_none());
    assert_eq!(counter.errors.load(Ordering::SeqCst), 1);
}
