use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use mw_core::Site;
use mw_graph::graph_to_yaml;
use mw_ledger::{parse_ledger_date, reconstruct, snapshot_token, HopLedger, LicenseLedger};
use mw_path::{analyze, AnalysisOpts, MetricsRow};

use crate::commands::{load_hop_ledger, load_license_ledger, parse_site};
use crate::commands::latency::{append_metrics_row, write_link_files};

#[derive(Args, Debug)]
pub struct TemporalArgs {
    /// License ledger file (comma separated records).
    #[arg(long)]
    pub licenses: PathBuf,
    /// Hop ledger file (semicolon separated records).
    #[arg(long)]
    pub hops: PathBuf,
    /// Reconstruction dates in mm/dd/yyyy form.
    #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
    pub dates: Vec<String>,
    /// First site as lat,lon decimal degrees.
    #[arg(long)]
    pub site0: String,
    /// Second site as lat,lon decimal degrees.
    #[arg(long)]
    pub site1: String,
    /// Output directory for snapshots and the metrics time series.
    #[arg(long)]
    pub out: PathBuf,
    /// Proximity radius around each site, in km.
    #[arg(long, default_value_t = 50.0)]
    pub radius_km: f64,
    /// Aggregate stretch acceptance threshold.
    #[arg(long, default_value_t = 1.05)]
    pub stretch_threshold: f64,
}

pub fn run(args: &TemporalArgs) -> Result<(), Box<dyn Error>> {
    let licenses = load_license_ledger(&args.licenses)?;
    let hops = load_hop_ledger(&args.hops)?;
    let site0 = parse_site("site0", &args.site0)?;
    let site1 = parse_site("site1", &args.site1)?;
    let opts = AnalysisOpts {
        radius_km: args.radius_km,
        stretch_threshold: args.stretch_threshold,
        ..AnalysisOpts::default()
    };

    fs::create_dir_all(&args.out)?;
    let metrics_path = args.out.join("metrics.txt");
    for date_text in &args.dates {
        // A failed date must not abort the sweep: report it and move on to
        // the remaining dates so the time series stays as complete as the
        // inputs allow.
        if let Err(err) = run_date(
            args,
            date_text,
            &licenses,
            &hops,
            &site0,
            &site1,
            &opts,
            &metrics_path,
        ) {
            eprintln!("date {date_text}: {err}");
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_date(
    args: &TemporalArgs,
    date_text: &str,
    licenses: &LicenseLedger,
    hops: &HopLedger,
    site0: &Site,
    site1: &Site,
    opts: &AnalysisOpts,
    metrics_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let date = parse_ledger_date(date_text)?;
    let token = snapshot_token(date);
    let snapshot = reconstruct(date, &licenses.records, &hops.records);

    let snapshot_dir = args.out.join(&token);
    fs::create_dir_all(&snapshot_dir)?;
    fs::write(
        snapshot_dir.join("graph_active.yaml"),
        graph_to_yaml(&snapshot.graph)?,
    )?;

    // An unmeasurable date still contributes a keyed row so the time
    // series keeps one line per requested date.
    let row = match analyze(&snapshot.graph, site0, site1, opts)? {
        Some(report) => {
            write_link_files(&snapshot_dir, &report)?;
            MetricsRow::from_report(&token, &report)
        }
        None => MetricsRow::absent(&token),
    };
    append_metrics_row(metrics_path, &row)?;
    Ok(())
}
