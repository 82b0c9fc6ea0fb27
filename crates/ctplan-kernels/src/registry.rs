//! Kernel registry keyed by `(radix, CombinationKind)`.
//!
//! Solvers resolve their kernel once at registration time; new radix
//! families are added with [`KernelRegistry::register`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::KernelError;
use crate::stage::{DifKernel, DitKernel};
use crate::traits::{CombinationKind, Kernel};

#[derive(Default)]
pub struct KernelRegistry {
    kernels: HashMap<(usize, CombinationKind), Arc<dyn Kernel>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// DIT kernels for `dit` radices and DIF kernels for `dif` radices.
    pub fn with_defaults(dit: &[usize], dif: &[usize]) -> Self {
        let mut reg = Self::new();
        for &r in dit {
            reg.register(Arc::new(DitKernel::new(r)));
        }
        for &r in dif {
            reg.register(Arc::new(DifKernel::new(r)));
        }
        reg
    }

    /// Insert or replace the kernel for its `(radix, kind)`.
    pub fn register(&mut self, kernel: Arc<dyn Kernel>) {
        self.kernels.insert((kernel.radix(), kernel.kind()), kernel);
    }

    pub fn lookup(&self, radix: usize, kind: CombinationKind) -> Option<Arc<dyn Kernel>> {
        self.kernels.get(&(radix, kind)).cloned()
    }

    pub fn require(&self, radix: usize, kind: CombinationKind) -> Result<Arc<dyn Kernel>, KernelError> {
        self.lookup(radix, kind).ok_or(KernelError::Missing {
            radix,
            kind: kind.as_str(),
        })
    }

    /// Registered keys in a stable order.
    pub fn keys(&self) -> Vec<(usize, CombinationKind)> {
        let mut keys: Vec<_> = self.kernels.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}
