use std::path::PathBuf;

use clap::Parser;
use transfer_paths::{
    config::OptimizerConfig,
    graphs::{
        snapshot::{build_graph, Snapshot},
        VertexId,
    },
    optimizer::all_distances_from_with_queue,
    report::school_name,
    utility::init_logging,
};

/// Prints the distance and the shortest path of every school reachable from
/// `source`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot in `.json` or `.bincode` format
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Optional config in `.toml` format
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Id of the school the search starts at
    #[arg(long)]
    source: VertexId,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => OptimizerConfig::load(path)?,
        None => OptimizerConfig::default(),
    };
    let _logger = init_logging(&config.log_level)?;

    let snapshot = Snapshot::from_file(&args.snapshot)?;
    let directory = build_graph(&snapshot, config.bidirectional);
    let tree = all_distances_from_with_queue(&directory.graph, args.source, config.queue)?;

    for (vertex, distance) in &tree.distances {
        let name = school_name(&directory, *vertex);
        match (distance, tree.path(*vertex)) {
            (Some(distance), Some(path)) => {
                println!("{:>6} {:<30} {:>8} {:?}", vertex, name, distance, path.vertices)
            }
            _ => println!("{:>6} {:<30} unreachable", vertex, name),
        }
    }

    Ok(())
}
