use std::collections::BTreeMap;

use mw_core::errors::{ErrorInfo, MwError};
use mw_core::{chord_distance_km, CoordKey, GeoPoint, NodeId};
use serde::{Deserialize, Serialize};

/// A tower node with its first-sighted coordinates and elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    /// Identifier assigned on first sighting of the coordinate pair.
    pub id: NodeId,
    /// Location of the tower in decimal degrees.
    pub point: GeoPoint,
    /// Elevation as reported upstream; opaque text, often empty.
    pub elevation: String,
}

/// One sighting of a tower inside a hop record, before dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerSighting {
    /// Location in decimal degrees.
    pub point: GeoPoint,
    /// Elevation text carried along unmodified.
    pub elevation: String,
}

impl TowerSighting {
    /// Creates a sighting from a point and elevation text.
    pub fn new(point: GeoPoint, elevation: impl Into<String>) -> Self {
        Self {
            point,
            elevation: elevation.into(),
        }
    }
}

/// A directed transmitter-to-receiver link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopLink {
    /// Ground chord length in kilometers, computed once at creation.
    pub length_km: f64,
    /// Operating frequencies, append-only across merges.
    pub frequencies: Vec<String>,
}

/// Directed multigraph of microwave hops with coordinate-deduplicated nodes.
///
/// The builder owns its node index, id counter, and edge table; the graph is
/// append-only during construction and is never mutated afterwards except to
/// derive an [`UndirectedView`](crate::UndirectedView) for path queries.
#[derive(Debug, Clone, Default)]
pub struct HopGraph {
    towers: Vec<Tower>,
    index: BTreeMap<CoordKey, NodeId>,
    edges: BTreeMap<(NodeId, NodeId), HopLink>,
}

impl HopGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one hop, deduplicating endpoints and merging repeated links.
    ///
    /// An endpoint whose coordinate key is unseen gets the next sequential
    /// id. Re-adding an existing transmitter/receiver pair appends the new
    /// frequencies to the stored link; the length is not recomputed.
    pub fn add_hop(
        &mut self,
        transmitter: TowerSighting,
        receiver: TowerSighting,
        frequencies: Vec<String>,
    ) -> (NodeId, NodeId) {
        let length_km = chord_distance_km(&transmitter.point, &receiver.point);
        let tx = self.intern(transmitter);
        let rx = self.intern(receiver);
        match self.edges.get_mut(&(tx, rx)) {
            Some(link) => link.frequencies.extend(frequencies),
            None => {
                self.edges.insert(
                    (tx, rx),
                    HopLink {
                        length_km,
                        frequencies,
                    },
                );
            }
        }
        (tx, rx)
    }

    fn intern(&mut self, sighting: TowerSighting) -> NodeId {
        let key = sighting.point.key();
        if let Some(id) = self.index.get(&key) {
            return *id;
        }
        let id = NodeId::from_raw(self.towers.len() as u64);
        self.index.insert(key, id);
        self.towers.push(Tower {
            id,
            point: sighting.point,
            elevation: sighting.elevation,
        });
        id
    }

    /// Number of distinct towers.
    pub fn node_count(&self) -> usize {
        self.towers.len()
    }

    /// Number of directed links.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the tower with the given id.
    pub fn tower(&self, id: NodeId) -> Result<&Tower, MwError> {
        self.towers.get(id.as_raw() as usize).ok_or_else(|| {
            MwError::Graph(
                ErrorInfo::new("unknown-node", "node does not exist")
                    .with_context("node", id.as_raw()),
            )
        })
    }

    /// Looks up a tower id by coordinate key.
    pub fn lookup(&self, key: &CoordKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Iterates towers in ascending id order.
    pub fn towers(&self) -> impl Iterator<Item = &Tower> {
        self.towers.iter()
    }

    /// Iterates directed links in ascending (transmitter, receiver) order.
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId, &HopLink)> {
        self.edges
            .iter()
            .map(|((tx, rx), link)| (*tx, *rx, link))
    }

    /// Returns the directed link between two towers, if present.
    pub fn link(&self, tx: NodeId, rx: NodeId) -> Option<&HopLink> {
        self.edges.get(&(tx, rx))
    }

    pub(crate) fn restore_tower(&mut self, tower: Tower) -> Result<(), MwError> {
        if tower.id.as_raw() as usize != self.towers.len() {
            return Err(MwError::Graph(
                ErrorInfo::new("non-sequential-node", "node ids must be dense and ordered")
                    .with_context("node", tower.id.as_raw())
                    .with_context("expected", self.towers.len()),
            ));
        }
        self.index.insert(tower.point.key(), tower.id);
        self.towers.push(tower);
        Ok(())
    }

    pub(crate) fn restore_link(
        &mut self,
        tx: NodeId,
        rx: NodeId,
        link: HopLink,
    ) -> Result<(), MwError> {
        self.tower(tx)?;
        self.tower(rx)?;
        self.edges.insert((tx, rx), link);
        Ok(())
    }
}
