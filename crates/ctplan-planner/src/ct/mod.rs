//! Generic Cooley-Tukey decomposition: one solver type, any radix, either
//! combination kind.

mod plan;
mod solver;

use std::sync::Arc;

use ctplan_kernels::{CombinationKind, Kernel};

pub use plan::CtPlan;
pub use solver::CtSolver;

/// Immutable solver descriptor shared with every plan the solver builds.
/// Plans use it for the kernel and for diagnostics only.
pub(crate) struct CtDesc {
    pub(crate) kernel: Arc<dyn Kernel>,
    pub(crate) name: String,
}

impl CtDesc {
    pub(crate) fn radix(&self) -> usize {
        self.kernel.radix()
    }

    pub(crate) fn kind(&self) -> CombinationKind {
        self.kernel.kind()
    }
}
