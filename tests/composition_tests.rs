//! End-to-end planning and execution tests

use std::cell::RefCell;
use std::sync::Arc;

use ctplan_core::{
    describe_to_string, Complex64, Direction, Plan, PlannerConfig, Search, Solver,
    TransformProblem,
};
use ctplan_kernels::direct::dft_strided;
use ctplan_kernels::{DifKernel, DitKernel};
use ctplan_planner::{solve, CtSolver, DirectSolver, Planner};
use ctplan_twiddle::TwiddleProvider;

fn config(radices: &[usize], dif: &[usize]) -> PlannerConfig {
    PlannerConfig {
        radices: radices.to_vec(),
        dif_radices: dif.to_vec(),
        twiddle_cap_bytes: 16 * 1024 * 1024,
        memoize: true,
    }
}

fn signal(len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Complex64::new((0.7 * t).sin() + 0.1 * t, (1.3 * t).cos())
        })
        .collect()
}

/// Plan, execute and compare against the direct DFT; returns the max error.
fn max_error(planner: &Planner, problem: &TransformProblem) -> f64 {
    let mut plan = planner.plan(problem).expect("no plan");
    let (in_len, out_len) = plan.extents();
    let input = signal(in_len);
    let mut output = vec![Complex64::default(); out_len];

    plan.awake(true).expect("awake failed");
    solve(plan.as_ref(), &input, &mut output).expect("solve failed");
    plan.awake(false).expect("sleep failed");

    let d = problem.dim().expect("rank-1 problem");
    let (vl, ivs, ovs) = problem.batch();
    let mut expected = vec![Complex64::default(); out_len];
    for v in 0..vl {
        dft_strided(
            &input[v * ivs..],
            d.is,
            &mut expected[v * ovs..],
            d.os,
            d.n,
            problem.direction,
        )
        .expect("reference failed");
    }

    let mut worst = 0.0_f64;
    for v in 0..vl {
        for k in 0..d.n {
            let idx = v * ovs + k * d.os;
            worst = worst.max((output[idx] - expected[idx]).norm());
        }
    }
    worst
}

/// Search stub handing back a direct leaf and recording what it was asked.
#[derive(Default)]
struct LeafSearch {
    asked: RefCell<Vec<TransformProblem>>,
}

impl Search for LeafSearch {
    fn plan_for(&self, problem: &TransformProblem) -> Option<Box<dyn Plan>> {
        self.asked.borrow_mut().push(problem.clone());
        DirectSolver::new().try_build(problem, self)
    }
}

#[test]
fn test_radix_three_over_size_four_leaf() {
    let provider = TwiddleProvider::new(1 << 20);
    let solver = CtSolver::new(Arc::new(DitKernel::new(3)), "ct-dit", provider);
    let problem = TransformProblem::new_1d(12, 1, 1);
    assert!(solver.is_applicable(&problem));

    let search = LeafSearch::default();
    let plan = solver.try_build(&problem, &search).expect("plan expected");

    let asked = search.asked.borrow();
    assert_eq!(asked.len(), 1);
    assert_eq!(asked[0].size(), 4);
    assert!((plan.cost() - 13.1).abs() < 1e-9);
    assert!(!plan.is_awake());
}

#[test]
fn test_non_divisor_radix_is_rejected() {
    let provider = TwiddleProvider::new(1 << 20);
    let solver = CtSolver::new(Arc::new(DitKernel::new(5)), "ct-dit", provider);
    let problem = TransformProblem::new_1d(12, 1, 1);
    assert!(!solver.is_applicable(&problem));

    let search = LeafSearch::default();
    assert!(solver.try_build(&problem, &search).is_none());
    assert!(search.asked.borrow().is_empty());
}

#[test]
fn test_description_shows_strides_and_batch() {
    let planner = Planner::from_config(&config(&[3], &[])).unwrap();
    let plan = planner
        .plan(&TransformProblem::new_1d(12, 2, 1))
        .expect("no plan");
    assert_eq!(
        describe_to_string(plan.as_ref()),
        "(ct-dit-3/12/is=2/os=1 (dft-direct-4-x3))"
    );

    let batched = TransformProblem::new_1d(12, 1, 1).with_batch(5, 12, 12);
    let plan = planner.plan(&batched).expect("no plan");
    assert_eq!(
        describe_to_string(plan.as_ref()),
        "(ct-dit-3/12-x5 (dft-direct-4-x3))"
    );
}

#[test]
fn test_default_planner_matches_direct_dft() {
    let planner = Planner::from_config(&PlannerConfig::default()).unwrap();
    for n in [1, 2, 3, 4, 5, 6, 8, 12, 16, 30, 60, 64, 100, 128, 210, 243, 256, 1024] {
        let err = max_error(&planner, &TransformProblem::new_1d(n, 1, 1));
        assert!(err < 1e-9 * n as f64, "n={n}: max error {err}");
    }
}

#[test]
fn test_radix_two_chain_matches_direct_dft() {
    let planner = Planner::from_config(&config(&[2], &[])).unwrap();
    for n in [2, 4, 8, 16, 32, 64, 128] {
        let err = max_error(&planner, &TransformProblem::new_1d(n, 1, 1));
        assert!(err < 1e-9 * n as f64, "n={n}: max error {err}");
    }
}

#[test]
fn test_strided_and_batched_problems() {
    let planner = Planner::from_config(&PlannerConfig::default()).unwrap();
    let cases = [
        TransformProblem::new_1d(12, 3, 1),
        TransformProblem::new_1d(16, 1, 2),
        TransformProblem::new_1d(24, 2, 5),
        TransformProblem::new_1d(8, 1, 1).with_batch(4, 8, 8),
        TransformProblem::new_1d(6, 4, 4).with_batch(4, 1, 1),
        TransformProblem::new_1d(36, 1, 3).with_batch(3, 40, 110),
    ];
    for p in &cases {
        let err = max_error(&planner, p);
        assert!(err < 1e-8, "{p}: max error {err}");
    }
}

#[test]
fn test_dif_only_planner() {
    let planner = Planner::from_config(&config(&[], &[2, 3, 4])).unwrap();
    let plan = planner
        .plan(&TransformProblem::new_1d(48, 1, 1))
        .expect("no plan");
    assert!(describe_to_string(plan.as_ref()).starts_with("(ct-dif-"));

    for n in [4, 12, 48, 64, 96] {
        let err = max_error(&planner, &TransformProblem::new_1d(n, 1, 2));
        assert!(err < 1e-9 * n as f64, "n={n}: max error {err}");
    }
}

#[test]
fn test_mixed_dit_dif_planner() {
    let planner = Planner::from_config(&config(&[2, 3, 5], &[4, 8])).unwrap();
    for n in [40, 60, 120, 360] {
        let p = TransformProblem::new_1d(n, 1, 1).with_batch(2, n, n);
        let err = max_error(&planner, &p);
        assert!(err < 1e-9 * n as f64, "n={n}: max error {err}");
    }
}

#[test]
fn test_inverse_undoes_forward_up_to_scale() {
    let planner = Planner::from_config(&PlannerConfig::default()).unwrap();
    let n = 60;
    let fwd_problem = TransformProblem::new_1d(n, 1, 1);
    let inv_problem = fwd_problem.clone().with_direction(Direction::Inverse);

    let mut fwd = planner.plan(&fwd_problem).unwrap();
    let mut inv = planner.plan(&inv_problem).unwrap();
    fwd.awake(true).unwrap();
    inv.awake(true).unwrap();

    let x = signal(n);
    let mut spectrum = vec![Complex64::default(); n];
    let mut back = vec![Complex64::default(); n];
    solve(fwd.as_ref(), &x, &mut spectrum).unwrap();
    solve(inv.as_ref(), &spectrum, &mut back).unwrap();

    for (a, b) in x.iter().zip(&back) {
        assert!((*a * n as f64 - *b).norm() < 1e-9);
    }
}

#[test]
fn test_hand_assembled_solvers() {
    let provider = TwiddleProvider::new(1 << 20);
    let mut planner = Planner::new(provider.clone());
    planner.register(Box::new(CtSolver::new(
        Arc::new(DifKernel::new(5)),
        "dif5",
        provider.clone(),
    )));
    planner.register(Box::new(DirectSolver::with_max_size(5)));

    let plan = planner.plan(&TransformProblem::new_1d(25, 1, 1)).unwrap();
    assert_eq!(
        describe_to_string(plan.as_ref()),
        "(dif5-5/25 (dif5-5/5/is=1/os=5-x5 (dft-direct-1-x5)))"
    );
    // Above the leaf cap nothing but the radix-5 stage can help.
    assert!(planner.plan(&TransformProblem::new_1d(7, 1, 1)).is_err());
    assert_eq!(planner.solver_names(), vec!["dif5", "dft-direct"]);
    assert!(max_error(&planner, &TransformProblem::new_1d(25, 1, 1)) < 1e-9);
}

#[test]
fn test_plan_report_serializes() {
    let planner = Planner::from_config(&config(&[3], &[])).unwrap();
    let problem = TransformProblem::new_1d(12, 1, 1);
    let plan = planner.plan(&problem).unwrap();
    let report = ctplan_planner::PlanReport::new(&problem, plan.as_ref()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&report.to_json().unwrap()).expect("valid json");
    assert_eq!(value["description"], "(ct-dit-3/12 (dft-direct-4-x3))");
    assert_eq!(value["depth"], 1);
    assert_eq!(
        value["fingerprint"].as_str().unwrap(),
        ctplan_planner::fingerprint(plan.as_ref()).short()
    );
}
