//! Leaf solver: the direct O(n^2) DFT.
//!
//! Applicable to every rank-1 problem, so the search always bottoms out.
//! Holds no coefficient table; awake/sleep only flips a flag.

use std::fmt::{self, Write as _};

use ctplan_core::{Complex64, Direction, Error, Plan, Result, Search, Solver, TransformProblem};
use ctplan_kernels::direct::dft_strided;

use crate::cost::direct_cost;

#[derive(Debug, Clone, Default)]
pub struct DirectSolver {
    max_size: Option<usize>,
}

impl DirectSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept problems up to `max_size` points.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }
}

impl Solver for DirectSolver {
    fn name(&self) -> &str {
        "dft-direct"
    }

    fn is_applicable(&self, problem: &TransformProblem) -> bool {
        let n = problem.size();
        problem.sz.rank() == 1
            && problem.vecsz.rank() <= 1
            && n > 0
            && self.max_size.map_or(true, |max| n <= max)
    }

    fn try_build(&self, problem: &TransformProblem, _search: &dyn Search) -> Option<Box<dyn Plan>> {
        if !self.is_applicable(problem) {
            return None;
        }
        Some(Box::new(DirectPlan::new(problem)))
    }
}

pub struct DirectPlan {
    n: usize,
    is: usize,
    os: usize,
    vl: usize,
    ivs: usize,
    ovs: usize,
    direction: Direction,
    awake: bool,
    extents: (usize, usize),
}

impl DirectPlan {
    pub fn new(problem: &TransformProblem) -> Self {
        let (is, os) = problem.dim().map_or((1, 1), |d| (d.is, d.os));
        let (vl, ivs, ovs) = problem.batch();
        Self {
            n: problem.size(),
            is,
            os,
            vl,
            ivs,
            ovs,
            direction: problem.direction,
            awake: false,
            extents: (problem.input_extent(), problem.output_extent()),
        }
    }
}

impl Plan for DirectPlan {
    fn cost(&self) -> f64 {
        direct_cost(self.n)
    }

    fn awake(&mut self, turning_on: bool) -> Result<()> {
        self.awake = turning_on;
        Ok(())
    }

    fn is_awake(&self) -> bool {
        self.awake
    }

    fn extents(&self) -> (usize, usize) {
        self.extents
    }

    fn apply(&self, input: &[Complex64], output: &mut [Complex64]) -> Result<()> {
        let (need_in, need_out) = self.extents;
        if input.len() < need_in {
            return Err(Error::BufferTooSmall {
                which: "input",
                needed: need_in,
                got: input.len(),
            });
        }
        if output.len() < need_out {
            return Err(Error::BufferTooSmall {
                which: "output",
                needed: need_out,
                got: output.len(),
            });
        }
        for v in 0..self.vl {
            dft_strided(
                &input[v * self.ivs..],
                self.is,
                &mut output[v * self.ovs..],
                self.os,
                self.n,
                self.direction,
            )?;
        }
        Ok(())
    }

    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "(dft-direct-{}", self.n)?;
        if self.vl > 1 {
            write!(out, "-x{}", self.vl)?;
        }
        out.write_char(')')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctplan_core::describe_to_string;

    struct Unused;

    impl Search for Unused {
        fn plan_for(&self, _: &TransformProblem) -> Option<Box<dyn Plan>> {
            panic!("direct solver must not recurse")
        }
    }

    #[test]
    fn size_four_leaf_costs_four() {
        let plan = DirectSolver::new()
            .try_build(&TransformProblem::new_1d(4, 1, 1), &Unused)
            .unwrap();
        assert!((plan.cost() - 4.0).abs() < 1e-12);
        assert_eq!(describe_to_string(plan.as_ref()), "(dft-direct-4)");
    }

    #[test]
    fn max_size_limits_applicability() {
        let s = DirectSolver::with_max_size(8);
        assert!(s.is_applicable(&TransformProblem::new_1d(8, 1, 1)));
        assert!(!s.is_applicable(&TransformProblem::new_1d(9, 1, 1)));
        assert!(!s.is_applicable(&TransformProblem::new_1d(0, 1, 1)));
    }

    #[test]
    fn batched_leaf_transforms_each_vector() {
        let p = TransformProblem::new_1d(2, 1, 1).with_batch(2, 2, 2);
        let plan = DirectPlan::new(&p);
        let input = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(-1.0, 0.0),
        ];
        let mut output = vec![Complex64::default(); 4];
        plan.apply(&input, &mut output).unwrap();
        assert_eq!(output[0], Complex64::new(2.0, 0.0));
        assert!(output[1].norm() < 1e-12);
        assert!(output[2].norm() < 1e-12);
        assert!((output[3] - Complex64::new(2.0, 0.0)).norm() < 1e-12);
        assert_eq!(describe_to_string(&plan), "(dft-direct-2-x2)");
    }

    #[test]
    fn short_output_is_an_error() {
        let plan = DirectPlan::new(&TransformProblem::new_1d(4, 1, 1));
        let input = vec![Complex64::default(); 4];
        let mut output = vec![Complex64::default(); 3];
        assert!(matches!(
            plan.apply(&input, &mut output),
            Err(Error::BufferTooSmall { which: "output", .. })
        ));
    }
}
