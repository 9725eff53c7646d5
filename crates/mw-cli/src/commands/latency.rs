use std::error::Error;
use std::fs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use clap::Args;
use mw_graph::graph_from_yaml;
use mw_path::{analyze, write_rows, AnalysisOpts, LatencyReport, MetricsRow};

use crate::commands::{parse_site, write_value_lines};

#[derive(Args, Debug)]
pub struct LatencyArgs {
    /// Snapshot graph document (graph_active.yaml).
    #[arg(long)]
    pub graph: PathBuf,
    /// First site as lat,lon decimal degrees.
    #[arg(long)]
    pub site0: String,
    /// Second site as lat,lon decimal degrees.
    #[arg(long)]
    pub site1: String,
    /// Key column of the metrics row (entity name or date token).
    #[arg(long)]
    pub key: String,
    /// Output directory for the metrics row and link data files.
    #[arg(long)]
    pub out: PathBuf,
    /// Proximity radius around each site, in km.
    #[arg(long, default_value_t = 50.0)]
    pub radius_km: f64,
    /// Aggregate stretch acceptance threshold.
    #[arg(long, default_value_t = 1.05)]
    pub stretch_threshold: f64,
}

pub fn run(args: &LatencyArgs) -> Result<(), Box<dyn Error>> {
    let yaml = fs::read_to_string(&args.graph)?;
    let graph = graph_from_yaml(&yaml)?;
    let site0 = parse_site("site0", &args.site0)?;
    let site1 = parse_site("site1", &args.site1)?;
    let opts = AnalysisOpts {
        radius_km: args.radius_km,
        stretch_threshold: args.stretch_threshold,
        ..AnalysisOpts::default()
    };

    fs::create_dir_all(&args.out)?;
    let row = match analyze(&graph, &site0, &site1, &opts)? {
        Some(report) => {
            write_link_files(&args.out, &report)?;
            MetricsRow::from_report(&args.key, &report)
        }
        None => MetricsRow::absent(&args.key),
    };
    append_metrics_row(&args.out.join("metrics.txt"), &row)?;
    Ok(())
}

pub(crate) fn write_link_files(dir: &Path, report: &LatencyReport) -> Result<(), Box<dyn Error>> {
    write_value_lines(&dir.join("link_lengths.txt"), &report.link_lengths)?;
    write_value_lines(&dir.join("link_freqs.txt"), &report.link_freqs)?;
    write_value_lines(
        &dir.join("link_lengths_red.txt"),
        &report.redundant_link_lengths,
    )?;
    write_value_lines(&dir.join("link_freqs_red.txt"), &report.redundant_link_freqs)?;
    Ok(())
}

pub(crate) fn append_metrics_row(path: &Path, row: &MetricsRow) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_rows(file, std::slice::from_ref(row))?;
    Ok(())
}
