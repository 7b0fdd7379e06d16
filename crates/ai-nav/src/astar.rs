use core::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use tracing::{trace, warn};

use crate::{AdjacencyMatrix, PathFinding};

#[derive(Debug)]
struct OpenNode<K> {
    cost: i64,
    tie: u64,
    node: K,
}

impl<K> OpenNode<K> {
    fn key(&self) -> (i64, u64) {
        (self.cost, self.tie)
    }
}

impl<K> PartialEq for OpenNode<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<K> Eq for OpenNode<K> {}

impl<K> PartialOrd for OpenNode<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for OpenNode<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        // Equal costs pop in insertion order.
        other.key().cmp(&self.key())
    }
}

/// Reusable scratch buffers for [`AStar`] queries.
#[derive(Debug)]
pub struct AStarQuery<K> {
    open: BinaryHeap<OpenNode<K>>,
    cost_so_far: BTreeMap<K, i64>,
    came_from: BTreeMap<K, K>,
    tie: u64,
}

impl<K> Default for AStarQuery<K> {
    fn default() -> Self {
        Self {
            open: BinaryHeap::new(),
            cost_so_far: BTreeMap::new(),
            came_from: BTreeMap::new(),
            tie: 0,
        }
    }
}

impl<K: Ord> AStarQuery<K> {
    fn reset(&mut self, capacity: usize) {
        self.open.clear();
        self.open.reserve(capacity);
        self.cost_so_far.clear();
        self.came_from.clear();
        self.tie = 0;
    }

    fn push(&mut self, node: K, cost: i64) {
        self.open.push(OpenNode {
            cost,
            tie: self.tie,
            node,
        });
        self.tie += 1;
    }
}

/// Uniform-cost search over an [`AdjacencyMatrix`].
///
/// The frontier is seeded at `end` and expanded until `start` is popped; the
/// path is then read forward from `start` through the recorded predecessors.
/// Searching backwards is only sound because every edge is stored in both
/// directions with the same weight.
#[derive(Debug, Clone)]
pub struct AStar<K: Ord> {
    matrix: AdjacencyMatrix<K>,
}

impl<K: Ord> Default for AStar<K> {
    fn default() -> Self {
        Self {
            matrix: AdjacencyMatrix::default(),
        }
    }
}

impl<K> AStar<K>
where
    K: Ord + Clone,
{
    pub fn new(matrix: AdjacencyMatrix<K>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &AdjacencyMatrix<K> {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut AdjacencyMatrix<K> {
        &mut self.matrix
    }

    /// Nodes to visit after `start` to reach `end`, ending with `end`.
    ///
    /// Empty when `end` is unreachable from `start`, and when `start == end`.
    pub fn path(&self, start: &K, end: &K) -> Vec<K> {
        let mut query = AStarQuery::default();
        let mut out = Vec::new();
        self.path_into(start, end, &mut query, &mut out);
        out
    }

    /// Allocation-reusing variant of [`AStar::path`]. Returns `!out.is_empty()`.
    pub fn path_into(
        &self,
        start: &K,
        end: &K,
        query: &mut AStarQuery<K>,
        out: &mut Vec<K>,
    ) -> bool {
        out.clear();
        query.reset(self.matrix.nodes_count());

        query.cost_so_far.insert(end.clone(), 0);
        query.push(end.clone(), 0);

        // With non-negative weights every node is expanded at most once.
        let max_expansions = self.matrix.nodes_count() + 1;
        let mut found = false;
        let mut expanded = 0usize;
        while let Some(current) = query.open.pop() {
            if current.node == *start {
                found = true;
                break;
            }

            let current_cost = query
                .cost_so_far
                .get(&current.node)
                .copied()
                .unwrap_or(current.cost);
            if current.cost > current_cost {
                // Stale heap entry.
                continue;
            }
            expanded += 1;
            if expanded > max_expansions {
                warn!(
                    max_expansions,
                    "search keeps improving costs; negative cycle? giving up"
                );
                break;
            }

            for next in self.matrix.adjacents(&current.node) {
                let new_cost = current_cost + i64::from(next.weight);
                let improves = query
                    .cost_so_far
                    .get(&next.node)
                    .map_or(true, |&known| new_cost < known);
                if improves {
                    query.cost_so_far.insert(next.node.clone(), new_cost);
                    query.push(next.node.clone(), new_cost);
                    query
                        .came_from
                        .insert(next.node.clone(), current.node.clone());
                }
            }
        }

        trace!(
            found,
            expanded,
            relaxed = query.came_from.len(),
            "backward search finished"
        );

        if found {
            Self::reconstruct(&query.came_from, start, end, out);
        }
        !out.is_empty()
    }

    fn reconstruct(came_from: &BTreeMap<K, K>, start: &K, end: &K, out: &mut Vec<K>) {
        if came_from.is_empty() {
            return;
        }
        if came_from.len() == 1 {
            out.push(end.clone());
            return;
        }

        // A well-formed predecessor chain never revisits a node.
        let max_steps = came_from.len();
        let mut current = start;
        while current != end {
            let Some(prev) = came_from.get(current) else {
                out.clear();
                return;
            };
            out.push(prev.clone());
            if out.len() > max_steps {
                warn!(
                    max_steps,
                    "predecessor chain does not reach the goal; negative weights?"
                );
                out.clear();
                return;
            }
            current = prev;
        }
    }
}

impl<K> PathFinding<K> for AStar<K>
where
    K: Ord + Clone,
{
    fn path(&self, start: &K, end: &K) -> Vec<K> {
        AStar::path(self, start, end)
    }
}
