//! ctplan: recursive, cost-annotated Cooley-Tukey DFT plan composition.
//!
//! Re-exports the workspace crates under one roof for integration tests,
//! benches and downstream users.

pub use ctplan_core as core;
pub use ctplan_kernels as kernels;
pub use ctplan_planner as planner;
pub use ctplan_twiddle as twiddle;

pub use ctplan_core::{
    describe_to_string, Complex64, Direction, Error, Plan, PlannerConfig, Result, Search, Solver,
    TransformProblem,
};
pub use ctplan_planner::{fingerprint, solve, CtPlan, CtSolver, DirectSolver, PlanReport, Planner};
pub use ctplan_twiddle::TwiddleProvider;
