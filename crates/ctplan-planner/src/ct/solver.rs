use std::sync::Arc;

use ctplan_core::{IoDim, Plan, Search, Solver, Tensor, TransformProblem};
use ctplan_kernels::{CombinationKind, Kernel};
use ctplan_twiddle::TwiddleProvider;

use super::{CtDesc, CtPlan};

/// Cooley-Tukey solver for one radix and combination kind.
///
/// Stateless after registration. The search authority is passed into
/// [`Solver::try_build`] and never stored.
pub struct CtSolver {
    desc: Arc<CtDesc>,
    provider: TwiddleProvider,
}

impl CtSolver {
    pub fn new(kernel: Arc<dyn Kernel>, name: impl Into<String>, provider: TwiddleProvider) -> Self {
        Self {
            desc: Arc::new(CtDesc {
                kernel,
                name: name.into(),
            }),
            provider,
        }
    }

    pub fn radix(&self) -> usize {
        self.desc.radix()
    }

    pub fn kind(&self) -> CombinationKind {
        self.desc.kind()
    }

    /// The size-`n/r` problem whose plan this solver wraps.
    ///
    /// DIT reads stripe `q` of the input (`x[q + r*t]`) into row `q` of a
    /// contiguous `r x m` scratch buffer. DIF reads row `k` of the scratch
    /// buffer and writes `X[r*k1 + k]`.
    pub fn child_problem(&self, problem: &TransformProblem) -> Option<TransformProblem> {
        if !self.is_applicable(problem) {
            return None;
        }
        let d = problem.dim()?;
        let r = self.radix();
        let m = d.n / r;
        let (sz, vec) = match self.kind() {
            CombinationKind::Dit => (IoDim::new(m, r * d.is, 1), IoDim::new(r, d.is, m)),
            CombinationKind::Dif => (IoDim::new(m, 1, r * d.os), IoDim::new(r, m, d.os)),
        };
        Some(TransformProblem::new(
            Tensor::one(sz),
            Tensor::one(vec),
            problem.direction,
        ))
    }
}

impl Solver for CtSolver {
    fn name(&self) -> &str {
        &self.desc.name
    }

    fn is_applicable(&self, problem: &TransformProblem) -> bool {
        // Radix 0 cannot divide and radix 1 would recurse on the same size.
        self.radix() >= 2
            && problem.sz.rank() == 1
            && problem.vecsz.rank() <= 1
            && problem.size() > 0
            && problem.size() % self.radix() == 0
    }

    fn try_build(&self, problem: &TransformProblem, search: &dyn Search) -> Option<Box<dyn Plan>> {
        // Re-checked here: callers may not have asked first.
        let child_problem = self.child_problem(problem)?;
        let child = search.plan_for(&child_problem)?;

        let plan = CtPlan::new(Arc::clone(&self.desc), self.provider.clone(), problem, child);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            solver = %self.desc.name,
            radix = self.radix(),
            n = problem.size(),
            cost = plan.cost(),
            "built cooley-tukey plan"
        );
        Some(Box::new(plan))
    }
}
