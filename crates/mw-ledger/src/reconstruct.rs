use chrono::NaiveDate;
use mw_graph::{HopGraph, TowerSighting};

use crate::schema::{HopRecord, LicenseRecord};
use crate::validity::active_licenses;

/// The network graph as it existed given only licenses active on one date.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Reconstruction date.
    pub date: NaiveDate,
    /// Hop graph restricted to hops whose license was active on `date`.
    pub graph: HopGraph,
    /// Number of hop records accepted into the graph.
    pub accepted_hops: usize,
    /// Number of hop records skipped because no active license owned them.
    pub skipped_hops: usize,
}

/// Replays the hop ledger through a fresh graph builder, restricted to the
/// licenses active on `date`.
///
/// A hop record owned by an inactive license, or by a license absent from
/// the ledger, is skipped silently: it represents a license that existed but
/// is not active on this date, not a data defect.
pub fn reconstruct(
    date: NaiveDate,
    licenses: &[LicenseRecord],
    hops: &[HopRecord],
) -> Snapshot {
    let active = active_licenses(date, licenses);
    let mut graph = HopGraph::new();
    let mut accepted_hops = 0;
    let mut skipped_hops = 0;
    for hop in hops {
        if !active.contains(&hop.license_id) {
            skipped_hops += 1;
            continue;
        }
        graph.add_hop(
            TowerSighting::new(hop.tx_point, hop.tx_elevation.clone()),
            TowerSighting::new(hop.rx_point, hop.rx_elevation.clone()),
            hop.frequencies.clone(),
        );
        accepted_hops += 1;
    }
    Snapshot {
        date,
        graph,
        accepted_hops,
        skipped_hops,
    }
}
