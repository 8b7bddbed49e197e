use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use malplan::report::render_plan;
use malplan::{PlanOptions, SweepWorker, build_plan, init_logging, load_project};
use malplan_core::strategise::DEFAULT_SWEEP_POINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "malplan")]
#[command(about = "Cost malaria interventions per region and sweep a shared budget")]
struct Args {
    /// Project file (.yaml, .yml or .json)
    project_file: PathBuf,

    /// Number of cost thresholds to sweep
    #[arg(short, long, default_value_t = DEFAULT_SWEEP_POINTS)]
    points: usize,

    /// Budget to sweep up to (overrides the project's budget)
    #[arg(short, long)]
    budget: Option<f64>,

    /// Cost threshold to report the strategy at (default: the budget)
    #[arg(short, long)]
    select: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Write logs to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let _log_guard = init_logging(args.log_dir.as_deref(), &args.log_level)?;

    let project = load_project(&args.project_file)?;
    let options = PlanOptions {
        points: args.points,
        budget: args.budget,
        select: args.select,
    };

    let worker = SweepWorker::new();
    let plan = build_plan(&project, &options, &worker)?;

    match args.format {
        OutputFormat::Table => print!("{}", render_plan(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }

    tracing::info!("Finished");
    Ok(())
}
