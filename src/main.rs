use crate::algos::Algorithm;
use crate::config::Config;
use crate::scenarios::Scenario;
use clap::{ArgAction, Parser};
use eyre::{Error, ensure, eyre};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{Level, error, info, warn};

mod algos;
mod checks;
mod config;
mod display;
mod loaders;
mod model;
mod scenarios;
mod stats;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of knapsolver.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Load projects from a CSV file with name, value and hours columns
    #[arg(short, long, value_name = "FILE", conflicts_with = "random")]
    projects: Option<PathBuf>,
    /// Hours available
    #[arg(short = 'C', long)]
    capacity: Option<u32>,
    /// Algorithm to run (may be repeated, defaults to every algorithm)
    #[arg(short, long, value_enum)]
    algorithm: Vec<Algorithm>,
    /// Generate a random instance with N projects
    #[arg(long, value_name = "N")]
    random: Option<usize>,
    /// Seed used to generate the random instance
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn load_cases(args: &Args, capacity: Option<u32>) -> Result<Vec<Scenario>, Error> {
    if let Some(path) = &args.projects {
        let projects = loaders::load_projects(path)?;
        let capacity =
            capacity.ok_or_else(|| eyre!("a capacity is required when loading projects"))?;
        Ok(vec![Scenario {
            title: path.display().to_string(),
            projects,
            capacity,
        }])
    } else if let Some(n) = args.random {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, projects = n, "Generating random instance");
        let mut scenario = Scenario {
            title: format!("Random instance (seed {seed})"),
            projects: scenarios::random_projects(&mut StdRng::seed_from_u64(seed), n),
            capacity: 0,
        };
        scenario.capacity = capacity.unwrap_or_else(|| scenario.total_hours() / 2);
        Ok(vec![scenario])
    } else {
        scenarios::builtin()
    }
}

/// Run every algorithm on a case, and return whether the results are consistent.
fn run_case(
    scenario: &Scenario,
    algorithms: &[Algorithm],
    brute_force_limit: usize,
) -> Result<bool, Error> {
    display::display_case(&scenario.title, &scenario.projects, scenario.capacity);
    let mut consistent = true;
    let mut results = Vec::new();
    for &algorithm in algorithms {
        if algorithm == Algorithm::BruteForce && scenario.projects.len() > brute_force_limit {
            warn!(
                projects = scenario.projects.len(),
                limit = brute_force_limit,
                "Skipping brute force on a large instance"
            );
            continue;
        }
        let solution = algorithm.solver().solve(&scenario.projects, scenario.capacity)?;
        if let Err(e) = checks::check_solution(&scenario.projects, scenario.capacity, &solution) {
            error!(algorithm = %algorithm, "Invalid solution: {e}");
            consistent = false;
        }
        display::display_solution(algorithm, &solution);
        results.push((algorithm, solution));
    }
    let comparison = stats::compare(&results);
    display::display_comparison(&comparison);
    Ok(consistent && comparison.disagreement.is_empty())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::find(args.config.as_deref())?;
    let algorithms = if args.algorithm.is_empty() {
        config.solver.algorithms.clone()
    } else {
        args.algorithm.clone()
    };
    let cases = load_cases(&args, args.capacity.or(config.solver.capacity))?;
    let mut failures = 0;
    for case in &cases {
        info!(case = %case.title, projects = case.projects.len(), "Solving");
        if !run_case(case, &algorithms, config.solver.brute_force_limit)? {
            failures += 1;
        }
    }
    if config.output.complexity_summary {
        display::display_complexity_summary();
    }
    ensure!(failures == 0, "{failures} case(s) produced inconsistent results");
    Ok(())
}
