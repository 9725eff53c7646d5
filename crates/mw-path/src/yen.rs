use std::collections::BTreeSet;

use mw_core::NodeId;
use mw_graph::{EdgeKey, UndirectedView};

use crate::dijkstra::{shortest_path, shortest_path_masked, WeightedPath};

/// Enumerates simple paths between two nodes in non-decreasing length order
/// (Yen's algorithm).
///
/// Consumers that only need the leading low-stretch paths can stop pulling
/// from the iterator as soon as one path fails their acceptance rule; the
/// ordering guarantee makes that early exit sound.
pub struct SimplePaths<'a> {
    view: &'a UndirectedView,
    source: NodeId,
    target: NodeId,
    yielded: Vec<WeightedPath>,
    candidates: Vec<WeightedPath>,
    seen: BTreeSet<Vec<NodeId>>,
    started: bool,
}

impl<'a> SimplePaths<'a> {
    /// Creates the enumerator for a node pair.
    pub fn new(view: &'a UndirectedView, source: NodeId, target: NodeId) -> Self {
        Self {
            view,
            source,
            target,
            yielded: Vec::new(),
            candidates: Vec::new(),
            seen: BTreeSet::new(),
            started: false,
        }
    }

    fn spur_candidates(&mut self) {
        let previous = match self.yielded.last() {
            Some(path) => path.clone(),
            None => return,
        };
        for spur_idx in 0..previous.edge_count() {
            let spur_node = previous.nodes[spur_idx];
            let root = &previous.nodes[..=spur_idx];

            // Edges leaving the spur node along any already-yielded path that
            // shares this root must not be reused.
            let mut banned_edges: BTreeSet<EdgeKey> = BTreeSet::new();
            for path in &self.yielded {
                if path.nodes.len() > spur_idx + 1 && path.nodes[..=spur_idx] == *root {
                    banned_edges.insert(EdgeKey::new(path.nodes[spur_idx], path.nodes[spur_idx + 1]));
                }
            }
            // Root nodes other than the spur node are off limits to keep the
            // candidate simple.
            let banned_nodes: BTreeSet<NodeId> =
                root[..spur_idx].iter().copied().collect();

            let Some(spur_path) = shortest_path_masked(
                self.view,
                spur_node,
                self.target,
                &banned_nodes,
                &banned_edges,
            ) else {
                continue;
            };

            let mut nodes: Vec<NodeId> = root[..spur_idx].to_vec();
            nodes.extend(spur_path.nodes.iter().copied());
            let mut length_km = spur_path.length_km;
            for pair in nodes[..=spur_idx].windows(2) {
                match self.view.edge_length(pair[0], pair[1]) {
                    Some(len) => length_km += len,
                    None => continue,
                }
            }
            if self.seen.contains(&nodes) {
                continue;
            }
            self.seen.insert(nodes.clone());
            self.candidates.push(WeightedPath { nodes, length_km });
        }
    }

    fn pop_best_candidate(&mut self) -> Option<WeightedPath> {
        if self.candidates.is_empty() {
            return None;
        }
        let mut best = 0;
        for idx in 1..self.candidates.len() {
            let challenger = &self.candidates[idx];
            let incumbent = &self.candidates[best];
            if challenger.length_km < incumbent.length_km
                || (challenger.length_km == incumbent.length_km
                    && challenger.nodes < incumbent.nodes)
            {
                best = idx;
            }
        }
        Some(self.candidates.swap_remove(best))
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = WeightedPath;

    fn next(&mut self) -> Option<WeightedPath> {
        if !self.started {
            self.started = true;
            let first = shortest_path(self.view, self.source, self.target)?;
            self.seen.insert(first.nodes.clone());
            self.yielded.push(first.clone());
            return Some(first);
        }
        self.spur_candidates();
        let next = self.pop_best_candidate()?;
        self.yielded.push(next.clone());
        Some(next)
    }
}
