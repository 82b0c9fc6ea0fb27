//! Lightweight acquire/release/build counters and peak tracking.
//!
//! Keep this cheap. Tests use it to check that every acquire is matched by
//! exactly one release.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct TwiddleStats {
    acquires: AtomicUsize,
    releases: AtomicUsize,
    builds: AtomicUsize,
    peak_bytes: AtomicUsize,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub acquires: usize,
    pub releases: usize,
    pub builds: usize,
    pub peak_bytes: usize,
}

impl StatsSnapshot {
    /// Handles acquired and not yet released.
    pub fn outstanding(&self) -> usize {
        // The two counters are loaded separately, so a release can land in between.
        self.acquires.saturating_sub(self.releases)
    }
}

impl TwiddleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_acquire(&self) {
        self.acquires.fetch_add(1, Ordering::AcqRel);
    }

    pub fn record_release(&self) {
        self.releases.fetch_add(1, Ordering::AcqRel);
    }

    /// Record a table build and the budget usage right after it.
    pub fn record_build(&self, used_bytes: usize) {
        self.builds.fetch_add(1, Ordering::AcqRel);
        let mut cur = self.peak_bytes.load(Ordering::Relaxed);
        while used_bytes > cur {
            match self.peak_bytes.compare_exchange(
                cur,
                used_bytes,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => cur = observed,
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            used_bytes,
            peak = self.peak_bytes.load(Ordering::Relaxed),
            "twiddle usage"
        );
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            acquires: self.acquires.load(Ordering::Acquire),
            releases: self.releases.load(Ordering::Acquire),
            builds: self.builds.load(Ordering::Acquire),
            peak_bytes: self.peak_bytes.load(Ordering::Acquire),
        }
    }
}
