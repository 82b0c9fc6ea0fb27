//! ctplan CLI: inspect, run and validate Cooley-Tukey plans.

use clap::{Args, Parser, Subcommand};
use ctplan_core::config::parse_radix_list;
use ctplan_core::{Complex64, Direction, PlannerConfig, TransformProblem};
use ctplan_kernels::direct::dft_strided;
use ctplan_planner::{load_config, solve, PlanReport, Planner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctplan")]
#[command(about = "Recursive Cooley-Tukey DFT planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cheapest plan for a problem
    Plan {
        #[command(flatten)]
        problem: ProblemArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Plan, wake and execute on a deterministic input, checking against the direct DFT
    Run {
        #[command(flatten)]
        problem: ProblemArgs,
    },

    /// Validate a planner configuration file
    Validate {
        /// Path to the YAML configuration
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct ProblemArgs {
    /// Transform length
    #[arg(short = 'n', long)]
    size: usize,

    /// Number of transforms in the batch
    #[arg(short, long, default_value_t = 1)]
    batch: usize,

    /// Input element stride
    #[arg(long, default_value_t = 1)]
    input_stride: usize,

    /// Output element stride
    #[arg(long, default_value_t = 1)]
    output_stride: usize,

    /// Compute the (unnormalized) inverse transform
    #[arg(long)]
    inverse: bool,

    /// YAML planner configuration (overrides environment)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated DIT radices (overrides config)
    #[arg(long)]
    radices: Option<String>,

    /// Twiddle table cap in bytes (overrides config)
    #[arg(long)]
    twiddle_cap: Option<usize>,
}

impl ProblemArgs {
    fn problem(&self) -> TransformProblem {
        let mut p = TransformProblem::new_1d(self.size, self.input_stride, self.output_stride);
        if self.batch > 1 {
            let ivs = self.size * self.input_stride;
            let ovs = self.size * self.output_stride;
            p = p.with_batch(self.batch, ivs, ovs);
        }
        if self.inverse {
            p = p.with_direction(Direction::Inverse);
        }
        p
    }

    fn planner_config(&self) -> Result<PlannerConfig, Box<dyn std::error::Error>> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => PlannerConfig::from_env(),
        };
        if let Some(list) = &self.radices {
            cfg.radices = parse_radix_list(list).ok_or_else(|| format!("bad radix list: {list}"))?;
        }
        if let Some(cap) = self.twiddle_cap {
            cfg.twiddle_cap_bytes = cap;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { problem, json } => {
            if let Err(e) = show_plan(&problem, json) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Run { problem } => {
            if let Err(e) = run_plan(&problem) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { config } => {
            if let Err(e) = load_config(&config) {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
            println!("✓ Configuration is valid");
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CTPLAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show_plan(args: &ProblemArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = args.planner_config()?;
    let planner = Planner::from_config(&cfg)?;
    let problem = args.problem();
    let plan = planner.plan(&problem)?;
    let report = PlanReport::new(&problem, plan.as_ref())?;

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Problem:     {} [{}]", problem, report.problem_id);
    println!("Plan:        {}", report.description);
    println!("Cost:        {:.3}", report.cost);
    println!("Depth:       {}", report.depth);
    println!("Fingerprint: {}", report.fingerprint);
    Ok(())
}

fn run_plan(args: &ProblemArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = args.planner_config()?;
    let planner = Planner::from_config(&cfg)?;
    let problem = args.problem();
    let mut plan = planner.plan(&problem)?;
    tracing::info!(plan = %ctplan_core::describe_to_string(plan.as_ref()), "planned");

    let (in_len, out_len) = plan.extents();
    let input: Vec<Complex64> = (0..in_len)
        .map(|i| {
            let t = i as f64;
            Complex64::new((0.37 * t).sin() + 0.5, (0.11 * t).cos() - 0.25)
        })
        .collect();
    let mut output = vec![Complex64::default(); out_len];

    plan.awake(true)?;
    let applied = solve(plan.as_ref(), &input, &mut output);
    let live_bytes = planner.provider().used_bytes();
    plan.awake(false)?;
    applied?;

    let (vl, ivs, ovs) = problem.batch();
    let mut expected = vec![Complex64::default(); out_len];
    for v in 0..vl {
        dft_strided(
            &input[v * ivs..],
            args.input_stride,
            &mut expected[v * ovs..],
            args.output_stride,
            args.size,
            problem.direction,
        )?;
    }
    let max_err = output
        .iter()
        .zip(&expected)
        .map(|(a, b)| (*a - *b).norm())
        .fold(0.0_f64, f64::max);

    let stats = planner.provider().stats();
    println!("✓ Plan executed");
    println!("  Plan:            {}", ctplan_core::describe_to_string(plan.as_ref()));
    println!("  Max abs error:   {:.3e}", max_err);
    println!("  Twiddle bytes:   {} live while awake, {} peak", live_bytes, stats.peak_bytes);
    println!(
        "  Tables:          {} built, {} acquired, {} released",
        stats.builds, stats.acquires, stats.releases
    );
    Ok(())
}
