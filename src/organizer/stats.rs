//! Run counters shared by all workers.
//!
//! Mutation goes through atomic adds only; the orchestrator reads them once,
//! after every worker has been joined.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Stats {
    moved: AtomicU64,
    skipped: AtomicU64,
    failed: AtomicU64,
    bytes: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_moved(&self, bytes: u64) {
        self.moved.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_skipped_n(&self, n: u64) {
        self.skipped.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Freeze the counters into a summary. Call after the workers are joined.
    pub fn snapshot(&self, duration: Duration) -> RunSummary {
        RunSummary {
            moved: self.moved.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            total_bytes: self.bytes.load(Ordering::Relaxed),
            duration,
            interrupted: false,
        }
    }
}

/// Final numbers of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub moved: u64,
    pub skipped: u64,
    pub failed: u64,
    pub total_bytes: u64,
    pub duration: Duration,
    /// True if an interrupt stopped the run before every entry was handled.
    pub interrupted: bool,
}

impl RunSummary {
    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}
