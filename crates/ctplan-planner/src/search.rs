//! The search authority.
//!
//! `Planner` owns the solver registry and the coefficient provider. For each
//! problem it asks every applicable solver for a plan and keeps the cheapest;
//! solvers recurse back through [`Search::plan_for`] for their sub-problems.
//! With memoization on, the index of the winning solver is remembered per
//! problem so a repeated sub-problem is rebuilt along the winning path only.

use std::collections::HashMap;
use std::sync::Mutex;

use ctplan_core::{Error, Plan, PlannerConfig, Result, Search, Solver, TransformProblem};
use ctplan_kernels::KernelRegistry;
use ctplan_twiddle::TwiddleProvider;

use crate::ct::CtSolver;
use crate::direct::DirectSolver;

/// `None` records that no registered solver could plan the problem.
type Memo = Mutex<HashMap<TransformProblem, Option<usize>>>;

pub struct Planner {
    solvers: Vec<Box<dyn Solver>>,
    memo: Option<Memo>,
    provider: TwiddleProvider,
}

impl Planner {
    /// Empty registry with memoization on.
    pub fn new(provider: TwiddleProvider) -> Self {
        Self {
            solvers: Vec::new(),
            memo: Some(Mutex::new(HashMap::new())),
            provider,
        }
    }

    /// One Cooley-Tukey solver per configured `(radix, kind)` followed by the
    /// direct leaf solver, all sharing a fresh provider capped at
    /// `cfg.twiddle_cap_bytes`.
    pub fn from_config(cfg: &PlannerConfig) -> Result<Self> {
        cfg.validate()?;
        Self::with_provider(cfg, TwiddleProvider::new(cfg.twiddle_cap_bytes))
    }

    pub fn with_provider(cfg: &PlannerConfig, provider: TwiddleProvider) -> Result<Self> {
        cfg.validate()?;
        let mut planner = Self::new(provider);
        if !cfg.memoize {
            planner.memo = None;
        }

        let kernels = KernelRegistry::with_defaults(&cfg.radices, &cfg.dif_radices);
        for (radix, kind) in kernels.keys() {
            let kernel = kernels.require(radix, kind)?;
            let name = kernel.name().to_string();
            planner.register(Box::new(CtSolver::new(
                kernel,
                name,
                planner.provider.clone(),
            )));
        }
        planner.register(Box::new(DirectSolver::new()));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            solvers = planner.solvers.len(),
            memoize = cfg.memoize,
            cap_bytes = cfg.twiddle_cap_bytes,
            "planner configured"
        );
        Ok(planner)
    }

    /// Append a solver. Earlier solvers win ties on cost.
    pub fn register(&mut self, solver: Box<dyn Solver>) {
        self.forget();
        self.solvers.push(solver);
    }

    pub fn solver_names(&self) -> Vec<&str> {
        self.solvers.iter().map(|s| s.name()).collect()
    }

    pub fn provider(&self) -> &TwiddleProvider {
        &self.provider
    }

    /// Cheapest plan for `problem`, constructed asleep.
    pub fn plan(&self, problem: &TransformProblem) -> Result<Box<dyn Plan>> {
        problem.validate()?;
        self.plan_for(problem)
            .ok_or_else(|| Error::Problem(format!("no solver applies to {problem}")))
    }

    /// Drop every remembered winner.
    pub fn forget(&mut self) {
        if let Some(memo) = self.memo.as_mut() {
            match memo.get_mut() {
                Ok(map) => map.clear(),
                Err(poisoned) => poisoned.into_inner().clear(),
            }
        }
    }

    pub fn memoized(&self) -> usize {
        self.memo
            .as_ref()
            .and_then(|m| m.lock().ok().map(|map| map.len()))
            .unwrap_or(0)
    }

    fn remembered(&self, problem: &TransformProblem) -> Option<Option<usize>> {
        let memo = self.memo.as_ref()?;
        let map = memo.lock().ok()?;
        map.get(problem).copied()
    }

    fn remember(&self, problem: &TransformProblem, winner: Option<usize>) {
        if let Some(memo) = self.memo.as_ref() {
            if let Ok(mut map) = memo.lock() {
                map.insert(problem.clone(), winner);
            }
        }
    }

    /// Try every applicable solver; the first strictly cheapest plan wins.
    fn search_all(&self, problem: &TransformProblem) -> Option<(usize, Box<dyn Plan>)> {
        let mut best: Option<(usize, Box<dyn Plan>)> = None;
        for (idx, solver) in self.solvers.iter().enumerate() {
            if !solver.is_applicable(problem) {
                continue;
            }
            let Some(plan) = solver.try_build(problem, self) else {
                continue;
            };
            let better = best
                .as_ref()
                .map_or(true, |(_, current)| plan.cost() < current.cost());
            if better {
                // The displaced candidate is dropped here, asleep.
                best = Some((idx, plan));
            }
        }
        best
    }
}

impl Search for Planner {
    fn plan_for(&self, problem: &TransformProblem) -> Option<Box<dyn Plan>> {
        if problem.validate().is_err() {
            return None;
        }

        if let Some(winner) = self.remembered(problem) {
            #[cfg(feature = "tracing")]
            tracing::trace!(%problem, ?winner, "memo hit");
            return winner.and_then(|idx| self.solvers[idx].try_build(problem, self));
        }

        let found = self.search_all(problem);
        self.remember(problem, found.as_ref().map(|(idx, _)| *idx));

        #[cfg(feature = "tracing")]
        match &found {
            Some((idx, plan)) => tracing::debug!(
                %problem,
                solver = self.solvers[*idx].name(),
                cost = plan.cost(),
                "selected plan"
            ),
            None => tracing::debug!(%problem, "no plan"),
        }

        found.map(|(_, plan)| plan)
    }
}
