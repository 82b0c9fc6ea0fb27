//! Convenient re-exports for downstream crates.

pub use crate::config::PlannerConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::{hash_serde, hash_str, Hash256};
pub use crate::plan::{describe_to_string, Plan, Search, Solver};
pub use crate::problem::{Direction, IoDim, Tensor, TransformProblem};
pub use crate::stride::StrideDescriptor;
pub use num_complex::Complex64;
