use std::path::PathBuf;

use clap::Parser;
use transfer_paths::{error::Result, graphs::snapshot::Snapshot};

/// Reading a .bincode snapshot is way faster than a .json snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .json format
    #[arg(short, long)]
    json: PathBuf,

    /// Outfile in .bincode format
    #[arg(short, long)]
    bincode: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let snapshot = Snapshot::from_file(&args.json)?;
    snapshot.to_file(&args.bincode)?;

    Ok(())
}
