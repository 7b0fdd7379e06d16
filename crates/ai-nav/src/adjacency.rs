use std::collections::BTreeMap;

use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One weighted edge as seen from its source node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Adjacency<K> {
    pub node: K,
    pub weight: i32,
}

/// Undirected weighted graph stored as per-node edge lists.
///
/// Every edge is kept in both endpoints' lists with the same weight. Keys are
/// ordered so iteration (and therefore search tie-breaking) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AdjacencyMatrix<K: Ord> {
    nodes: BTreeMap<K, Vec<Adjacency<K>>>,
}

impl<K: Ord> Default for AdjacencyMatrix<K> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<K> AdjacencyMatrix<K>
where
    K: Ord + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update the edge `node <-> adjacent`, creating either endpoint.
    ///
    /// Self-loops and negative weights are accepted as given; search over
    /// negative weights is not guaranteed to terminate early.
    pub fn add_adjacent(&mut self, node: K, adjacent: K, weight: i32) {
        if weight < 0 {
            warn!(weight, "negative edge weight added to adjacency matrix");
        }

        self.upsert(node.clone(), adjacent.clone(), weight);
        self.upsert(adjacent, node, weight);
    }

    /// Remove `node` and every edge that references it.
    ///
    /// Returns `false` when the node was not present.
    pub fn remove_node(&mut self, node: &K) -> bool {
        let existed = self.nodes.remove(node).is_some();
        for edges in self.nodes.values_mut() {
            edges.retain(|edge| edge.node != *node);
        }
        existed
    }

    /// Edges leaving `node`, in insertion order; empty for unknown nodes.
    pub fn adjacents(&self, node: &K) -> &[Adjacency<K>] {
        self.nodes.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &K) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.keys()
    }

    /// Number of undirected edges. Self-loops count once.
    pub fn edge_count(&self) -> usize {
        let mut directed = 0;
        let mut loops = 0;
        for (key, edges) in &self.nodes {
            directed += edges.len();
            loops += edges.iter().filter(|edge| edge.node == *key).count();
        }
        (directed - loops) / 2 + loops
    }

    /// Largest edge weight in the graph, `None` when there are no edges.
    pub fn heaviest_edge(&self) -> Option<i32> {
        self.nodes
            .values()
            .flat_map(|edges| edges.iter().map(|edge| edge.weight))
            .max()
    }

    fn upsert(&mut self, node: K, adjacent: K, weight: i32) {
        let edges = self.nodes.entry(node).or_default();
        match edges.iter_mut().find(|edge| edge.node == adjacent) {
            Some(edge) => edge.weight = weight,
            None => edges.push(Adjacency {
                node: adjacent,
                weight,
            }),
        }
    }
}

impl<K> Extend<(K, K, i32)> for AdjacencyMatrix<K>
where
    K: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = (K, K, i32)>>(&mut self, iter: I) {
        for (node, adjacent, weight) in iter {
            self.add_adjacent(node, adjacent, weight);
        }
    }
}

impl<K> FromIterator<(K, K, i32)> for AdjacencyMatrix<K>
where
    K: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, K, i32)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        matrix.extend(iter);
        matrix
    }
}
