//! Process-wide counters for a milestones run.
//!
//! Counters are bumped at the call site; [`Metrics::flush`] emits the
//! current values as one `tracing::info!` event at the end of a run.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

pub struct Metrics {
    rows_loaded: AtomicU64,
    summaries_built: AtomicU64,
    placeholders_emitted: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            rows_loaded: AtomicU64::new(0),
            summaries_built: AtomicU64::new(0),
            placeholders_emitted: AtomicU64::new(0),
        }
    }

    /// One roster row accepted by the loader.
    pub fn inc_rows_loaded(&self) {
        self.rows_loaded.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "rows_loaded", "counter incremented");
    }

    /// One supervisor summary built.
    pub fn inc_summaries(&self) {
        self.summaries_built.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "summaries_built", "counter incremented");
    }

    /// `count` non-supervisor placeholders emitted.
    pub fn add_placeholders(&self, count: u64) {
        self.placeholders_emitted.fetch_add(count, Ordering::Relaxed);
        tracing::trace!(metric = "placeholders_emitted", count, "counter incremented");
    }

    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            rows_loaded = self.rows_loaded(),
            summaries_built = self.summaries_built(),
            placeholders_emitted = self.placeholders_emitted(),
        );
    }

    pub fn rows_loaded(&self) -> u64 {
        self.rows_loaded.load(Ordering::Relaxed)
    }

    pub fn summaries_built(&self) -> u64 {
        self.summaries_built.load(Ordering::Relaxed)
    }

    pub fn placeholders_emitted(&self) -> u64 {
        self.placeholders_emitted.load(Ordering::Relaxed)
    }
}
