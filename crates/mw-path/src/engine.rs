use std::collections::BTreeSet;

use mw_core::{chord_distance_km, MwError, NodeId, Site};
use mw_graph::{EdgeKey, HopGraph, HopLink, UndirectedView};

use crate::dijkstra::{hop_distance, shortest_path, WeightedPath};
use crate::flags::AnalysisOpts;
use crate::yen::SimplePaths;

/// A tower within fiber reach of a site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityTower {
    /// Tower id in the snapshot graph.
    pub id: NodeId,
    /// Straight-line access distance from the site, in km.
    pub access_km: f64,
}

/// Full result of one end-to-end latency analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyReport {
    /// Tower chosen near site 0.
    pub tower0: NodeId,
    /// Tower chosen near site 1.
    pub tower1: NodeId,
    /// Direct site-to-site chord distance, km.
    pub geo_dist_dc: f64,
    /// Shortest backbone path length between the chosen towers, km.
    pub path_length: f64,
    /// Sum of the two access distances, km.
    pub dist_fiber: f64,
    /// Backbone path length over the direct tower-to-tower chord.
    pub stretch: f64,
    /// Latency-weighted aggregate stretch for the chosen pair.
    pub stretch_aggr: f64,
    /// Count of leading low-stretch simple paths.
    pub simple_path_counter: usize,
    /// Unweighted hop count between the chosen towers.
    pub hop_count: usize,
    /// Lower median of the chosen path's per-hop lengths, km.
    pub median_link_len: f64,
    /// Lower median of the chosen path's numeric per-hop frequencies.
    pub median_freq: Option<f64>,
    /// Fraction of path edges whose removal leaves a low-stretch alternate.
    pub path_diversity: f64,
    /// Node sequence of the chosen shortest path.
    pub path: Vec<NodeId>,
    /// Per-hop lengths of the chosen path, km, in path order.
    pub link_lengths: Vec<f64>,
    /// Numeric per-hop frequencies of the chosen path, in path order.
    pub link_freqs: Vec<f64>,
    /// Per-hop lengths across the accepted low-stretch paths' edge set.
    pub redundant_link_lengths: Vec<f64>,
    /// Numeric frequencies across the accepted low-stretch paths' edge set.
    pub redundant_link_freqs: Vec<f64>,
}

/// Runs the path analysis engine for one snapshot graph and two sites.
///
/// Returns `Ok(None)` when the measurement is impossible: no tower within
/// reach of a site, or no backbone path between any candidate pair. Absence
/// is "unmeasurable", not an error.
pub fn analyze(
    graph: &HopGraph,
    site0: &Site,
    site1: &Site,
    opts: &AnalysisOpts,
) -> Result<Option<LatencyReport>, MwError> {
    let view = UndirectedView::from_graph(graph);
    let near0 = proximity_towers(graph, site0, opts);
    let near1 = proximity_towers(graph, site1, opts);
    if near0.is_empty() || near1.is_empty() {
        return Ok(None);
    }
    let geo_dist_dc = chord_distance_km(&site0.point, &site1.point);

    // Best-connected pair: minimize aggregate stretch over all reachable
    // pairs; the first minimum found wins. Proximity lists are in ascending
    // node id order, so the scan order is reproducible.
    let mut best: Option<(ProximityTower, ProximityTower, WeightedPath, f64)> = None;
    for t0 in &near0 {
        for t1 in &near1 {
            if t0.id == t1.id {
                continue;
            }
            let Some(path) = shortest_path(&view, t0.id, t1.id) else {
                continue;
            };
            let dist_fiber = t0.access_km + t1.access_km;
            let aggr = opts.stretch_aggr(dist_fiber, path.length_km, geo_dist_dc);
            if best.as_ref().map_or(true, |(_, _, _, current)| aggr < *current) {
                best = Some((*t0, *t1, path, aggr));
            }
        }
    }
    let Some((t0, t1, path, stretch_aggr)) = best else {
        return Ok(None);
    };

    let dist_fiber = t0.access_km + t1.access_km;
    let pair_chord = chord_distance_km(
        &graph.tower(t0.id)?.point,
        &graph.tower(t1.id)?.point,
    );
    let stretch = path.length_km / pair_chord;
    let hop_count = hop_distance(&view, t0.id, t1.id).unwrap_or(path.edge_count());

    let (link_lengths, link_freqs) = path_link_data(&view, path.edges());
    let median_link_len = lower_median(link_lengths.clone()).unwrap_or(0.0);
    let median_freq = lower_median(link_freqs.clone());

    let (simple_path_counter, redundant_edges) =
        count_low_stretch_paths(&view, t0.id, t1.id, dist_fiber, geo_dist_dc, opts);
    let (redundant_link_lengths, redundant_link_freqs) =
        path_link_data(&view, redundant_edges.iter().map(|key| key.endpoints()));

    let path_diversity =
        edge_removal_diversity(&view, &path, t0.id, t1.id, dist_fiber, geo_dist_dc, opts);

    Ok(Some(LatencyReport {
        tower0: t0.id,
        tower1: t1.id,
        geo_dist_dc,
        path_length: path.length_km,
        dist_fiber,
        stretch,
        stretch_aggr,
        simple_path_counter,
        hop_count,
        median_link_len,
        median_freq,
        path_diversity,
        path: path.nodes.clone(),
        link_lengths,
        link_freqs,
        redundant_link_lengths,
        redundant_link_freqs,
    }))
}

/// Collects every tower within the proximity radius of a site, in ascending
/// node id order.
pub fn proximity_towers(graph: &HopGraph, site: &Site, opts: &AnalysisOpts) -> Vec<ProximityTower> {
    let mut towers = Vec::new();
    for tower in graph.towers() {
        let access_km = chord_distance_km(&site.point, &tower.point);
        if access_km < opts.radius_km {
            towers.push(ProximityTower {
                id: tower.id,
                access_km,
            });
        }
    }
    towers
}

/// Counts leading simple paths whose aggregate stretch stays under the
/// threshold, returning the accepted paths' undirected edge set.
///
/// Paths arrive in non-decreasing length order, so enumeration stops at the
/// first failing path rather than filtering the full set.
fn count_low_stretch_paths(
    view: &UndirectedView,
    source: NodeId,
    target: NodeId,
    dist_fiber: f64,
    geo_dist_dc: f64,
    opts: &AnalysisOpts,
) -> (usize, BTreeSet<EdgeKey>) {
    let mut counter = 0;
    let mut edges = BTreeSet::new();
    for path in SimplePaths::new(view, source, target) {
        let aggr = opts.stretch_aggr(dist_fiber, path.length_km, geo_dist_dc);
        if aggr >= opts.stretch_threshold {
            break;
        }
        counter += 1;
        for (a, b) in path.edges() {
            edges.insert(EdgeKey::new(a, b));
        }
    }
    (counter, edges)
}

/// Single-edge-removal redundancy: the fraction of path edges whose removal
/// still leaves a low-stretch alternate route.
///
/// An edge whose removal disconnects the pair is simply not covered; that is
/// zero redundancy for the edge, not an error.
fn edge_removal_diversity(
    view: &UndirectedView,
    path: &WeightedPath,
    source: NodeId,
    target: NodeId,
    dist_fiber: f64,
    geo_dist_dc: f64,
    opts: &AnalysisOpts,
) -> f64 {
    let total = path.edge_count();
    if total == 0 {
        return 0.0;
    }
    let mut covered = 0;
    for (a, b) in path.edges() {
        let reduced = view.without_edge(a, b);
        let Some(alternate) = shortest_path(&reduced, source, target) else {
            continue;
        };
        let aggr = opts.stretch_aggr(dist_fiber, alternate.length_km, geo_dist_dc);
        if aggr < opts.stretch_threshold {
            covered += 1;
        }
    }
    covered as f64 / total as f64
}

fn path_link_data(
    view: &UndirectedView,
    edges: impl Iterator<Item = (NodeId, NodeId)>,
) -> (Vec<f64>, Vec<f64>) {
    let mut lengths = Vec::new();
    let mut freqs = Vec::new();
    for (a, b) in edges {
        let Some(link) = view.edge(a, b) else {
            continue;
        };
        lengths.push(link.length_km);
        freqs.extend(numeric_frequencies(link));
    }
    (lengths, freqs)
}

/// Interprets stored frequency entries numerically, stripping the quote
/// characters the upstream scraper leaves behind; non-numeric entries are
/// skipped.
fn numeric_frequencies(link: &HopLink) -> Vec<f64> {
    link.frequencies
        .iter()
        .filter_map(|entry| entry.replace(['\'', '"'], "").parse::<f64>().ok())
        .collect()
}

/// Lower median: the floor-index element of the ascending-sorted values.
fn lower_median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    values.get(values.len() / 2).copied()
}
