//! The coefficient provider.
//!
//! Contract with plans: acquire before use, release exactly once per acquire
//! (dropping the handle releases it), never mutate the table.
//!
//! Tables are deduplicated by key while any handle to them is alive. Builds
//! happen under the provider lock, so concurrent requests for one key build
//! it once.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, Mutex, Weak};

use once_cell::sync::Lazy;

use crate::budget::TwiddleBudget;
use crate::error::{Error, Result};
use crate::table::{TwiddleKey, TwiddleTable};
use crate::tracking::{StatsSnapshot, TwiddleStats};

/// Cap used by the process-wide provider.
pub const DEFAULT_CAP_BYTES: usize = 64 * 1024 * 1024;

static SHARED: Lazy<TwiddleProvider> = Lazy::new(|| TwiddleProvider::new(DEFAULT_CAP_BYTES));

struct ProviderInner {
    budget: TwiddleBudget,
    tables: Mutex<HashMap<TwiddleKey, Weak<TwiddleTable>>>,
    stats: TwiddleStats,
}

#[derive(Clone)]
pub struct TwiddleProvider {
    inner: Arc<ProviderInner>,
}

impl TwiddleProvider {
    pub fn new(cap_bytes: usize) -> Self {
        Self {
            inner: Arc::new(ProviderInner {
                budget: TwiddleBudget::new(cap_bytes),
                tables: Mutex::new(HashMap::new()),
                stats: TwiddleStats::new(),
            }),
        }
    }

    /// Process-wide provider for callers that do not inject their own.
    pub fn shared() -> Self {
        SHARED.clone()
    }

    pub fn acquire(&self, key: TwiddleKey) -> Result<TwiddleHandle> {
        let mut tables = self.inner.tables.lock().map_err(|_| Error::Poisoned)?;

        let table = match tables.get(&key).and_then(Weak::upgrade) {
            Some(t) => t,
            None => {
                tables.retain(|_, w| w.strong_count() > 0);
                let t = Arc::new(TwiddleTable::build(key, &self.inner.budget)?);
                tables.insert(key, Arc::downgrade(&t));
                self.inner.stats.record_build(self.inner.budget.used_bytes());
                #[cfg(feature = "tracing")]
                tracing::debug!(%key, bytes = t.bytes(), "built twiddle table");
                t
            }
        };
        drop(tables);

        self.inner.stats.record_acquire();
        Ok(TwiddleHandle {
            table,
            provider: Arc::clone(&self.inner),
        })
    }

    /// Explicit release; equivalent to dropping the handle.
    pub fn release(&self, handle: TwiddleHandle) {
        drop(handle);
    }

    /// Tables currently alive (held by at least one handle).
    pub fn live_tables(&self) -> usize {
        self.inner
            .tables
            .lock()
            .map(|t| t.values().filter(|w| w.strong_count() > 0).count())
            .unwrap_or(0)
    }

    pub fn used_bytes(&self) -> usize {
        self.inner.budget.used_bytes()
    }

    pub fn capacity_bytes(&self) -> usize {
        self.inner.budget.capacity_bytes()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.stats.snapshot()
    }
}

/// A read-only reference to a shared table. Dropping it releases it.
pub struct TwiddleHandle {
    table: Arc<TwiddleTable>,
    provider: Arc<ProviderInner>,
}

impl TwiddleHandle {
    /// True when both handles refer to the very same table allocation.
    pub fn same_table(&self, other: &TwiddleHandle) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }
}

impl Deref for TwiddleHandle {
    type Target = TwiddleTable;
    fn deref(&self) -> &TwiddleTable {
        &self.table
    }
}

impl Drop for TwiddleHandle {
    fn drop(&mut self) {
        self.provider.stats.record_release();
        #[cfg(feature = "tracing")]
        tracing::trace!(key = %self.table.key(), "released twiddle table");
    }
}
