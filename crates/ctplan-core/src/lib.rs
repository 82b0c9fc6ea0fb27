#![forbid(unsafe_code)]
//! ctplan-core: the vocabulary shared by every ctplan crate.
//!
//! - `problem`: immutable DFT problem descriptions (`TransformProblem`).
//! - `stride`: access-pattern classification (`StrideDescriptor`).
//! - `plan`: the `Plan`, `Solver` and `Search` contracts that solvers,
//!   plans and the search authority implement.
//! - `config`, `error`, `hash`: ambient plumbing.
//!
//! No table construction and no numeric kernels live here.

pub mod config;
pub mod error;
pub mod hash;
pub mod plan;
pub mod prelude;
pub mod problem;
pub mod stride;

pub use num_complex::Complex64;

pub use config::PlannerConfig;
pub use error::{Error, Result};
pub use plan::{describe_to_string, Plan, Search, Solver};
pub use problem::{Direction, IoDim, Tensor, TransformProblem};
pub use stride::StrideDescriptor;
