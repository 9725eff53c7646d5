use std::collections::{BTreeMap, BTreeSet};

use mw_core::NodeId;

use crate::hopgraph::{HopGraph, HopLink};

/// Canonical unordered node pair used to key undirected edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    lo: NodeId,
    hi: NodeId,
}

impl EdgeKey {
    /// Creates a key from two endpoints in either order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns the endpoints as an ordered (low, high) pair.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.lo, self.hi)
    }
}

/// Undirected projection of a [`HopGraph`] used for path queries.
///
/// Opposite directed links collapse into one undirected edge: the length of
/// the first directed link encountered wins and frequency lists are unioned.
#[derive(Debug, Clone, Default)]
pub struct UndirectedView {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edges: BTreeMap<EdgeKey, HopLink>,
}

impl UndirectedView {
    /// Builds the undirected view of a hop graph.
    pub fn from_graph(graph: &HopGraph) -> Self {
        let mut view = Self::default();
        for tower in graph.towers() {
            view.adjacency.entry(tower.id).or_default();
        }
        for (tx, rx, link) in graph.links() {
            let key = EdgeKey::new(tx, rx);
            match view.edges.get_mut(&key) {
                Some(existing) => existing
                    .frequencies
                    .extend(link.frequencies.iter().cloned()),
                None => {
                    view.edges.insert(key, link.clone());
                }
            }
            view.adjacency.entry(tx).or_default().insert(rx);
            view.adjacency.entry(rx).or_default().insert(tx);
        }
        view
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of a node in ascending id order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Returns the edge between two nodes, if present.
    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&HopLink> {
        self.edges.get(&EdgeKey::new(a, b))
    }

    /// Length of the edge between two nodes, if present.
    pub fn edge_length(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.edge(a, b).map(|link| link.length_km)
    }

    /// Iterates undirected edges in canonical key order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &HopLink)> {
        self.edges.iter().map(|(key, link)| (*key, link))
    }

    /// Returns a transient copy of the view with one edge removed.
    ///
    /// Used by the redundancy check; the copy is discarded after the
    /// recomputed shortest path is measured.
    pub fn without_edge(&self, a: NodeId, b: NodeId) -> Self {
        let key = EdgeKey::new(a, b);
        let mut reduced = self.clone();
        if reduced.edges.remove(&key).is_some() {
            let (lo, hi) = key.endpoints();
            if let Some(set) = reduced.adjacency.get_mut(&lo) {
                set.remove(&hi);
            }
            if let Some(set) = reduced.adjacency.get_mut(&hi) {
                set.remove(&lo);
            }
        }
        reduced
    }
}
