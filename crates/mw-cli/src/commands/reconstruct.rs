use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use mw_graph::graph_to_yaml;
use mw_ledger::{parse_ledger_date, reconstruct, snapshot_token};
use serde_json::json;

use crate::commands::{load_hop_ledger, load_license_ledger};
use crate::write_json;

#[derive(Args, Debug)]
pub struct ReconstructArgs {
    /// License ledger file (comma separated records).
    #[arg(long)]
    pub licenses: PathBuf,
    /// Hop ledger file (semicolon separated records).
    #[arg(long)]
    pub hops: PathBuf,
    /// Reconstruction date in mm/dd/yyyy form.
    #[arg(long)]
    pub date: String,
    /// Output directory; artifacts land under <out>/<mm_dd_yyyy>/.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ReconstructArgs) -> Result<(), Box<dyn Error>> {
    let date = parse_ledger_date(&args.date)?;
    let licenses = load_license_ledger(&args.licenses)?;
    let hops = load_hop_ledger(&args.hops)?;

    let snapshot = reconstruct(date, &licenses.records, &hops.records);

    let dir = args.out.join(snapshot_token(date));
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("graph_active.yaml"),
        graph_to_yaml(&snapshot.graph)?,
    )?;

    let summary = json!({
        "date": snapshot_token(date),
        "nodes": snapshot.graph.node_count(),
        "edges": snapshot.graph.edge_count(),
        "accepted_hops": snapshot.accepted_hops,
        "skipped_hops": snapshot.skipped_hops,
        "license_defects": licenses.defects.len(),
        "hop_defects": hops.defects.len(),
    });
    write_json(dir.join("summary.json"), &summary)?;
    println!("{summary}");
    Ok(())
}
