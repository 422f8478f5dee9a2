//! Command-line arguments (spec treats CLI parsing as an external
//! collaborator, §1 — this is that collaborator).

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lane")]
#[command(about = "Time-expanded shipment routing over a live facility/route graph")]
#[command(version)]
pub struct Cli {
    /// JSONL file of facility records.
    #[arg(long)]
    pub facilities: PathBuf,

    /// JSONL file of route records.
    #[arg(long)]
    pub routes: PathBuf,

    /// JSONL file of shipment request records.
    #[arg(long)]
    pub shipments: PathBuf,

    /// Output path for result documents (JSONL). Omit to log results
    /// instead of writing a file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Optional TOML settings file, layered under `LANE_`-prefixed
    /// environment overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the configured bounded-queue capacity.
    #[arg(long)]
    pub queue_capacity: Option<usize>,

    /// Override the configured worker dequeue timeout, in milliseconds.
    #[arg(long)]
    pub dequeue_timeout_ms: Option<u64>,
}
