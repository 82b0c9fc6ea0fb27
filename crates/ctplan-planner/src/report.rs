//! Serializable summary of a chosen plan, printed by the CLI.

use serde::{Deserialize, Serialize};

use ctplan_core::hash::hash_serde;
use ctplan_core::{describe_to_string, Plan, Result, TransformProblem};

use crate::solve::fingerprint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub problem: TransformProblem,
    /// Short blake3 of the serialized problem.
    pub problem_id: String,
    pub description: String,
    pub cost: f64,
    /// Short blake3 of `description`.
    pub fingerprint: String,
    /// Combination stages above the leaf.
    pub depth: usize,
}

impl PlanReport {
    pub fn new(problem: &TransformProblem, plan: &dyn Plan) -> Result<Self> {
        let description = describe_to_string(plan);
        let depth = description.matches('(').count().saturating_sub(1);
        Ok(Self {
            problem: problem.clone(),
            problem_id: hash_serde(problem)?.short(),
            cost: plan.cost(),
            fingerprint: fingerprint(plan).short(),
            description,
            depth,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::DirectPlan;

    #[test]
    fn leaf_report() {
        let p = TransformProblem::new_1d(4, 1, 1);
        let report = PlanReport::new(&p, &DirectPlan::new(&p)).unwrap();
        assert_eq!(report.description, "(dft-direct-4)");
        assert_eq!(report.depth, 0);
        assert_eq!(report.fingerprint.len(), 16);

        let json = report.to_json().unwrap();
        let back: PlanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
