use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use transfer_paths::{
    error::Result,
    graphs::snapshot::{build_graph, Snapshot},
    utility::{generate_test_cases, init_logging},
};

/// Generates test cases for every ordered pair of schools of the snapshot at
/// `snapshot`. The test cases will be saved at `test_cases` as json.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot in `.json` or `.bincode` format
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Path where the test cases will be saved
    #[arg(short, long)]
    test_cases: PathBuf,

    /// Only use transportation costs in their stored direction
    #[arg(long)]
    directed: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = init_logging("info")?;

    let snapshot = Snapshot::from_file(&args.snapshot)?;
    let directory = build_graph(&snapshot, !args.directed);

    let start = Instant::now();
    let test_cases = generate_test_cases(&directory.graph);
    log::info!(
        "generated {} test cases in {:?}",
        test_cases.len(),
        start.elapsed()
    );

    let writer = BufWriter::new(File::create(&args.test_cases)?);
    serde_json::to_writer(writer, &test_cases)?;

    Ok(())
}
