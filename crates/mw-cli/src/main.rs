use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    latency::{self, LatencyArgs},
    reconstruct::{self, ReconstructArgs},
    temporal::{self, TemporalArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "mw-cli", about = "Microwave backhaul reconstruction and latency CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reconstruct the network active on one date from the ledgers.
    Reconstruct(ReconstructArgs),
    /// Measure end-to-end latency metrics on a stored snapshot graph.
    Latency(LatencyArgs),
    /// Run the full pipeline over a list of dates and emit a time series.
    Temporal(TemporalArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Reconstruct(args) => reconstruct::run(&args),
        Command::Latency(args) => latency::run(&args),
        Command::Temporal(args) => temporal::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

pub(crate) fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body)?;
    Ok(())
}
