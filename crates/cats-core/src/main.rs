//! Cat colony simulation runner
//!
//! Runs one simulation from command line parameters and prints or writes
//! the result document.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rand::Rng;
use tracing_subscriber::EnvFilter;

use cats_core::config::{TuningConfig, DEFAULT_TUNING_PATH};
use cats_core::request::check_contract;
use cats_core::{execute, RunStatus, SimulationParameters};

/// Command line arguments for a simulation run
#[derive(Parser, Debug)]
#[command(name = "cats")]
#[command(about = "Simulate a cat colony and report its social structure")]
struct Args {
    /// Number of iterations
    #[arg(short = 'i', long, default_value_t = 1000, allow_negative_numbers = true)]
    iterations: i64,

    /// Amount of cats
    #[arg(long = "cat-amount", alias = "cat_amount", default_value_t = 10)]
    cat_amount: usize,

    /// Amount of locations
    #[arg(long = "node-amount", alias = "node_amount", default_value_t = 60)]
    node_amount: usize,

    /// The average amount of connections between nodes
    #[arg(long = "mean-edges", alias = "mean_edges", default_value_t = 4.0)]
    mean_edges: f64,

    /// The variance of connections between nodes
    #[arg(long = "var-edges", alias = "var_edges", default_value_t = 1.0)]
    var_edges: f64,

    /// The average aggressiveness, -1.0 (very friendly) to 1.0
    #[arg(
        long = "mean-aggressive",
        alias = "mean_aggressive",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    mean_aggressive: f64,

    /// The variance of aggressiveness
    #[arg(long = "var-aggressive", alias = "var_aggressive", default_value_t = 0.1)]
    var_aggressive: f64,

    /// The average laziness, 0.0 to 1.0
    #[arg(long = "mean-laziness", alias = "mean_laziness", default_value_t = 0.5)]
    mean_laziness: f64,

    /// The variance of laziness
    #[arg(long = "var-laziness", alias = "var_laziness", default_value_t = 0.05)]
    var_laziness: f64,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Tuning file
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: PathBuf,

    /// Write the run record as JSON here instead of printing the result
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the parameter range and ratio checks
    #[arg(long)]
    skip_checks: bool,
}

impl Args {
    fn parameters(&self, seed: u32) -> Result<SimulationParameters, cats_core::SimError> {
        Ok(SimulationParameters::new(self.iterations, seed)?
            .with_population(self.cat_amount, self.node_amount)
            .with_edges(self.mean_edges, self.var_edges)
            .with_aggressiveness(self.mean_aggressive, self.var_aggressive)
            .with_laziness(self.mean_laziness, self.var_laziness))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let params = match args.parameters(seed) {
        Ok(params) => params,
        Err(e) => {
            tracing::error!(error = %e, "Rejected parameters");
            return ExitCode::FAILURE;
        }
    };
    if !args.skip_checks {
        if let Err(e) = check_contract(&params) {
            tracing::error!(error = %e, "Rejected parameters");
            return ExitCode::FAILURE;
        }
    }

    let tuning = TuningConfig::load_or_default(&args.tuning);
    let record = execute(params, tuning);

    let written = match &args.output {
        Some(path) => write_record(&record, path),
        None => print_result(&record),
    };
    if let Err(e) = written {
        tracing::error!(error = %e, "Could not write output");
        return ExitCode::FAILURE;
    }

    match record.status {
        RunStatus::Finished => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn write_record(record: &cats_core::RunRecord, path: &Path) -> std::io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(record)
        .map_err(std::io::Error::other)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), run = %record.id, "Wrote run record");
    Ok(())
}

fn print_result(record: &cats_core::RunRecord) -> std::io::Result<()> {
    if let Some(report) = &record.result {
        let json = report
            .to_json_pretty()
            .map_err(std::io::Error::other)?;
        println!("{}", json);
    }
    Ok(())
}
