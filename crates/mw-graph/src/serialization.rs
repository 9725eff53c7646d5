use mw_core::errors::{ErrorInfo, MwError};
use mw_core::{GeoPoint, NodeId, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::hopgraph::{HopGraph, HopLink, Tower};

/// Serializes a graph to the YAML snapshot document format.
pub fn graph_to_yaml(graph: &HopGraph) -> Result<String, MwError> {
    let doc = SnapshotDoc::from_graph(graph);
    serde_yaml::to_string(&doc)
        .map_err(|err| MwError::Serde(ErrorInfo::new("serialize-yaml", err.to_string())))
}

/// Restores a graph from a YAML snapshot document.
pub fn graph_from_yaml(yaml: &str) -> Result<HopGraph, MwError> {
    let doc: SnapshotDoc = serde_yaml::from_str(yaml)
        .map_err(|err| MwError::Serde(ErrorInfo::new("deserialize-yaml", err.to_string())))?;
    doc.into_graph()
}

/// Serializes a graph to a JSON snapshot document.
pub fn graph_to_json(graph: &HopGraph) -> Result<String, MwError> {
    let doc = SnapshotDoc::from_graph(graph);
    serde_json::to_string_pretty(&doc)
        .map_err(|err| MwError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON snapshot document.
pub fn graph_from_json(json: &str) -> Result<HopGraph, MwError> {
    let doc: SnapshotDoc = serde_json::from_str(json)
        .map_err(|err| MwError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    doc.into_graph()
}

/// On-disk form of a snapshot graph.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDoc {
    schema_version: SchemaVersion,
    nodes: Vec<SnapshotNode>,
    edges: Vec<SnapshotEdge>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotNode {
    id: u64,
    lat_deg: f64,
    long_deg: f64,
    elevation: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEdge {
    source: u64,
    target: u64,
    length: f64,
    frequency_list: Vec<String>,
}

impl SnapshotDoc {
    fn from_graph(graph: &HopGraph) -> Self {
        let nodes = graph
            .towers()
            .map(|tower| SnapshotNode {
                id: tower.id.as_raw(),
                lat_deg: tower.point.lat_deg,
                long_deg: tower.point.lon_deg,
                elevation: tower.elevation.clone(),
            })
            .collect();
        let edges = graph
            .links()
            .map(|(tx, rx, link)| SnapshotEdge {
                source: tx.as_raw(),
                target: rx.as_raw(),
                length: link.length_km,
                frequency_list: link.frequencies.clone(),
            })
            .collect();
        Self {
            schema_version: SchemaVersion::default(),
            nodes,
            edges,
        }
    }

    fn into_graph(self) -> Result<HopGraph, MwError> {
        let mut nodes = self.nodes;
        nodes.sort_by_key(|node| node.id);
        let mut graph = HopGraph::new();
        for node in nodes {
            graph.restore_tower(Tower {
                id: NodeId::from_raw(node.id),
                point: GeoPoint::new(node.lat_deg, node.long_deg),
                elevation: node.elevation,
            })?;
        }
        for edge in self.edges {
            graph.restore_link(
                NodeId::from_raw(edge.source),
                NodeId::from_raw(edge.target),
                HopLink {
                    length_km: edge.length,
                    frequencies: edge.frequency_list,
                },
            )?;
        }
        Ok(graph)
    }
}
