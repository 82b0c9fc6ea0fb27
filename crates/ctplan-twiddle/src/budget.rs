//! Byte budget + RAII guard for table memory.
//!
//! A table acquires a guard before allocating its coefficients. Dropping the
//! guard (when the table itself is freed) returns the bytes to the budget.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

struct BudgetInner {
    capacity: usize,
    used: AtomicUsize,
}

impl BudgetInner {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            used: AtomicUsize::new(0),
        }
    }

    fn try_acquire(&self, bytes: usize) -> bool {
        loop {
            let cur = self.used.load(Ordering::Relaxed);
            let next = cur.saturating_add(bytes);
            if next > self.capacity {
                return false;
            }
            if self
                .used
                .compare_exchange(cur, next, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return true;
            }
        }
    }

    fn release(&self, bytes: usize) {
        self.used.fetch_sub(bytes, Ordering::AcqRel);
    }
}

/// Hard cap on live table bytes. Cheap to clone; clones share the counter.
#[derive(Clone)]
pub struct TwiddleBudget {
    inner: Arc<BudgetInner>,
}

impl TwiddleBudget {
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            inner: Arc::new(BudgetInner::new(capacity_bytes)),
        }
    }

    /// Reserve `bytes`, or report how far over the cap the request would go.
    pub fn try_acquire(&self, bytes: usize, tag: &'static str) -> Result<BudgetGuard> {
        if bytes == 0 || self.inner.try_acquire(bytes) {
            Ok(BudgetGuard {
                inner: Arc::clone(&self.inner),
                bytes,
                tag,
            })
        } else {
            Err(Error::BudgetExceeded {
                tag,
                requested: bytes,
                capacity: self.capacity_bytes(),
                used: self.used_bytes(),
            })
        }
    }

    /// Current usage (advisory).
    pub fn used_bytes(&self) -> usize {
        self.inner.used.load(Ordering::Relaxed)
    }

    pub fn capacity_bytes(&self) -> usize {
        self.inner.capacity
    }
}

/// RAII guard that accounts for a number of bytes.
pub struct BudgetGuard {
    inner: Arc<BudgetInner>,
    bytes: usize,
    tag: &'static str,
}

impl BudgetGuard {
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl Drop for BudgetGuard {
    fn drop(&mut self) {
        if self.bytes > 0 {
            self.inner.release(self.bytes);
            self.bytes = 0;
        }
    }
}
