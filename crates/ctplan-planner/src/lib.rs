#![forbid(unsafe_code)]
//! ctplan-planner: DFT problem → cheapest composed plan.
//!
//! Design:
//! - `ct`: the generic Cooley-Tukey solver. For `n = r * m` it plans the
//!   size-`m` sub-problem through the search authority and wraps the result
//!   with a radix-`r` combination stage and a cost estimate.
//! - `direct`: O(n^2) leaf solver so every non-empty problem has a plan.
//! - `search`: the `Planner` search authority (solver registry, cheapest
//!   plan wins, per-problem memo of the winner).
//! - `solve`: generic execution entry point and plan fingerprints.
//! - `report`: serializable plan summaries.
//! - `config_file`: YAML loading for `PlannerConfig`.

pub mod config_file;
pub mod cost;
pub mod ct;
pub mod direct;
pub mod report;
pub mod search;
pub mod solve;

pub use config_file::{load_config, parse_config_yaml};
pub use cost::{ct_cost, direct_cost, K1, OPTIMAL_RADIX};
pub use ct::{CtPlan, CtSolver};
pub use direct::{DirectPlan, DirectSolver};
pub use report::PlanReport;
pub use search::Planner;
pub use solve::{fingerprint, solve};
