use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ctplan_core::{Complex64, Plan, PlannerConfig, TransformProblem};
use ctplan_planner::{solve, Planner};

fn signal(len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|i| Complex64::new((i % 17) as f64, (i % 5) as f64 - 2.0))
        .collect()
}

fn bench_planning(c: &mut Criterion) {
    let cfg = PlannerConfig {
        memoize: false,
        ..PlannerConfig::default()
    };
    let planner = Planner::from_config(&cfg).unwrap();
    let problem = TransformProblem::new_1d(720, 1, 1);
    c.bench_function("plan_720_cold", |b| {
        b.iter(|| black_box(planner.plan(&problem).unwrap().cost()))
    });

    let memo = Planner::from_config(&PlannerConfig::default()).unwrap();
    let _ = memo.plan(&problem).unwrap();
    c.bench_function("plan_720_memoized", |b| {
        b.iter(|| black_box(memo.plan(&problem).unwrap().cost()))
    });
}

fn bench_execution(c: &mut Criterion) {
    let planner = Planner::from_config(&PlannerConfig::default()).unwrap();
    for n in [256usize, 1000, 4096] {
        let problem = TransformProblem::new_1d(n, 1, 1);
        let mut plan = planner.plan(&problem).unwrap();
        plan.awake(true).unwrap();
        let input = signal(n);
        let mut output = vec![Complex64::default(); n];
        c.bench_function(&format!("apply_{n}"), |b| {
            b.iter(|| solve(plan.as_ref(), black_box(&input), &mut output).unwrap())
        });
    }
}

fn bench_awake_cycle(c: &mut Criterion) {
    let planner = Planner::from_config(&PlannerConfig::default()).unwrap();
    let mut plan = planner.plan(&TransformProblem::new_1d(4096, 1, 1)).unwrap();
    c.bench_function("awake_sleep_4096", |b| {
        b.iter(|| {
            plan.awake(true).unwrap();
            plan.awake(false).unwrap();
        })
    });
}

criterion_group!(ctplan_benches, bench_planning, bench_execution, bench_awake_cycle);
criterion_main!(ctplan_benches);
