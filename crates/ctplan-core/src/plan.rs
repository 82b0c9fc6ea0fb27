//! Plan, solver and search contracts.
//!
//! The concrete solvers and the search authority live in `ctplan-planner`;
//! coefficient tables live in `ctplan-twiddle`. We keep only traits here so
//! every crate can depend on the contracts without pulling either in.
//!
//! Lifecycle of a plan: constructed asleep, toggled between awake and asleep
//! any number of times with [`Plan::awake`], destroyed exactly once by
//! dropping it. Dropping releases any live coefficient table and recursively
//! drops the child plan.

use std::fmt;

use num_complex::Complex64;

use crate::error::Result;
use crate::problem::TransformProblem;

/// An executable recipe for one specific problem.
pub trait Plan: Send {
    /// Analytic cost estimate. Immutable after construction.
    fn cost(&self) -> f64;

    /// Wake (`true`) or sleep (`false`) the plan and its children.
    ///
    /// Idempotent at every level. Children wake before their parent. On error
    /// the whole subtree is left asleep.
    fn awake(&mut self, turning_on: bool) -> Result<()>;

    fn is_awake(&self) -> bool;

    /// Number of (input, output) elements the plan touches from offset 0.
    fn extents(&self) -> (usize, usize);

    /// Execute with the strides fixed at planning time.
    ///
    /// Must not be called while asleep; implementations return
    /// `Error::PlanAsleep` rather than reading a missing table.
    fn apply(&self, input: &[Complex64], output: &mut [Complex64]) -> Result<()>;

    /// Human-readable, recursively nested description. Read-only.
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// A capability registered with the search authority.
pub trait Solver: Send + Sync {
    /// Display name used in plan descriptions.
    fn name(&self) -> &str;

    /// Pure applicability test; no side effects.
    fn is_applicable(&self, problem: &TransformProblem) -> bool;

    /// Build a plan for `problem`, recursing through `search` for sub-plans.
    ///
    /// `None` means "this solver cannot help"; the caller tries the next one.
    fn try_build(&self, problem: &TransformProblem, search: &dyn Search) -> Option<Box<dyn Plan>>;
}

/// The search authority, as seen by solvers that recurse into it.
pub trait Search {
    fn plan_for(&self, problem: &TransformProblem) -> Option<Box<dyn Plan>>;
}

pub fn describe_to_string(plan: &dyn Plan) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = plan.describe(&mut s);
    s
}
