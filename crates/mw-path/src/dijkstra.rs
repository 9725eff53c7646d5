use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, VecDeque};

use mw_core::NodeId;
use mw_graph::{EdgeKey, UndirectedView};

/// A weighted path through the undirected view.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Node sequence from source to target inclusive.
    pub nodes: Vec<NodeId>,
    /// Sum of edge lengths along the path, in km.
    pub length_km: f64,
}

impl WeightedPath {
    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Iterates consecutive node pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

// Min-heap entry; BinaryHeap is a max-heap, so compare reversed. Distances
// are finite non-negative sums of edge lengths, ties broken by node id to
// keep settling order deterministic.
struct HeapEntry {
    dist: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Shortest weighted path between two nodes, or `None` when unreachable.
pub fn shortest_path(view: &UndirectedView, from: NodeId, to: NodeId) -> Option<WeightedPath> {
    shortest_path_masked(view, from, to, &BTreeSet::new(), &BTreeSet::new())
}

/// Dijkstra restricted to the subgraph excluding `banned_nodes` and
/// `banned_edges`. Used by the k-shortest-path spur searches.
pub(crate) fn shortest_path_masked(
    view: &UndirectedView,
    from: NodeId,
    to: NodeId,
    banned_nodes: &BTreeSet<NodeId>,
    banned_edges: &BTreeSet<EdgeKey>,
) -> Option<WeightedPath> {
    if banned_nodes.contains(&from) || banned_nodes.contains(&to) {
        return None;
    }
    let mut dist: BTreeMap<NodeId, f64> = BTreeMap::new();
    let mut prev: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut settled: BTreeSet<NodeId> = BTreeSet::new();
    let mut heap = BinaryHeap::new();
    dist.insert(from, 0.0);
    heap.push(HeapEntry {
        dist: 0.0,
        node: from,
    });

    while let Some(entry) = heap.pop() {
        if settled.contains(&entry.node) {
            continue;
        }
        settled.insert(entry.node);
        if entry.node == to {
            break;
        }
        for neighbor in view.neighbors(entry.node) {
            if settled.contains(&neighbor) || banned_nodes.contains(&neighbor) {
                continue;
            }
            if banned_edges.contains(&EdgeKey::new(entry.node, neighbor)) {
                continue;
            }
            let Some(length) = view.edge_length(entry.node, neighbor) else {
                continue;
            };
            let tentative = entry.dist + length;
            if dist
                .get(&neighbor)
                .map_or(true, |current| tentative < *current)
            {
                dist.insert(neighbor, tentative);
                prev.insert(neighbor, entry.node);
                heap.push(HeapEntry {
                    dist: tentative,
                    node: neighbor,
                });
            }
        }
    }

    if !settled.contains(&to) {
        return None;
    }
    let mut nodes = vec![to];
    let mut cursor = to;
    while cursor != from {
        cursor = *prev.get(&cursor)?;
        nodes.push(cursor);
    }
    nodes.reverse();
    Some(WeightedPath {
        nodes,
        length_km: dist.get(&to).copied()?,
    })
}

/// Unweighted hop distance between two nodes, or `None` when unreachable.
pub fn hop_distance(view: &UndirectedView, from: NodeId, to: NodeId) -> Option<usize> {
    let mut depth: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut queue = VecDeque::new();
    depth.insert(from, 0);
    queue.push_back(from);
    while let Some(node) = queue.pop_front() {
        let d = depth[&node];
        if node == to {
            return Some(d);
        }
        for neighbor in view.neighbors(node) {
            depth.entry(neighbor).or_insert_with(|| {
                queue.push_back(neighbor);
                d + 1
            });
        }
    }
    None
}
