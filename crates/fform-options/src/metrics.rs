#![forbid(unsafe_code)]

//! Engine observability counters.
//!
//! Monotonic process-wide counters for the option paging engine. Cheap
//! enough to stay unconditional; structured event logging around the
//! same points is feature-gated behind `tracing`.

use std::sync::atomic::{AtomicU64, Ordering};

static FETCHES_ISSUED_TOTAL: AtomicU64 = AtomicU64::new(0);
static STALE_RESULTS_DROPPED_TOTAL: AtomicU64 = AtomicU64::new(0);
static PAGES_RESOLVED_TOTAL: AtomicU64 = AtomicU64::new(0);
static FETCH_DURATION_US_TOTAL: AtomicU64 = AtomicU64::new(0);
static PRESENCE_SYNTHESIZED_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Total fetch requests issued to remote sources.
#[must_use]
pub fn fetches_issued_total() -> u64 {
    FETCHES_ISSUED_TOTAL.load(Ordering::Relaxed)
}

/// Total fetch replies dropped because their token was outdated.
#[must_use]
pub fn stale_results_dropped_total() -> u64 {
    STALE_RESULTS_DROPPED_TOTAL.load(Ordering::Relaxed)
}

/// Total successful page resolutions (both source kinds).
#[must_use]
pub fn pages_resolved_total() -> u64 {
    PAGES_RESOLVED_TOTAL.load(Ordering::Relaxed)
}

/// Cumulative observed fetch latency, in microseconds.
#[must_use]
pub fn fetch_duration_us_total() -> u64 {
    FETCH_DURATION_US_TOTAL.load(Ordering::Relaxed)
}

pub(crate) fn record_fetch_issued() {
    FETCHES_ISSUED_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_stale_drop() {
    STALE_RESULTS_DROPPED_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_page_resolved() {
    PAGES_RESOLVED_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_fetch_duration(us: u64) {
    FETCH_DURATION_US_TOTAL.fetch_add(us, Ordering::Relaxed);
}

/// Total page entries synthesized by the presence guarantor.
#[must_use]
pub fn presence_synthesized_total() -> u64 {
    PRESENCE_SYNTHESIZED_TOTAL.load(Ordering::Relaxed)
}

pub(crate) fn record_presence_synthesized(count: u64) {
    PRESENCE_SYNTHESIZED_TOTAL.fetch_add(count, Ordering::Relaxed);
}
