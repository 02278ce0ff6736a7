use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use transfer_paths::{
    config::OptimizerConfig,
    error::Result,
    graphs::{
        snapshot::{build_graph, Snapshot},
        VertexId,
    },
    report::optimize,
    search::collections::vertex_distance_queue::QueueKind,
    utility::{get_progressspinner, init_logging},
};

/// Finds the cheapest transfer route between two schools of a snapshot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot in `.json` or `.bincode` format
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Optional config in `.toml` format
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Id of the school the route starts at
    #[arg(long)]
    source: VertexId,

    /// Id of the school the route ends at
    #[arg(long)]
    target: VertexId,

    /// Only use transportation costs in their stored direction
    #[arg(long)]
    directed: bool,

    /// Priority queue used by the search
    #[arg(short, long, value_enum)]
    queue: Option<QueueKind>,

    /// Print the full report as json
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => OptimizerConfig::load(path)?,
        None => OptimizerConfig::default(),
    };
    if args.directed {
        config.bidirectional = false;
    }
    if let Some(queue) = args.queue {
        config.queue = queue;
    }
    let _logger = init_logging(&config.log_level)?;

    let spinner = get_progressspinner("Reading snapshot");
    let snapshot = Snapshot::from_file(&args.snapshot)?;
    spinner.finish_and_clear();

    let directory = build_graph(&snapshot, config.bidirectional);
    let report = optimize(&directory, args.source, args.target, config.queue);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
        if report.success {
            println!("{}", report.route());
            for leg in &report.legs {
                println!("  {} -> {}: {}", leg.from, leg.to, leg.cost);
            }
            if let Some(total_cost) = report.total_cost {
                println!("total cost {}", total_cost);
            }
        }
    }

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
