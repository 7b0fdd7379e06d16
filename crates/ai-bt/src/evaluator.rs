use tracing::{trace, warn};

use crate::{NodeId, Tree};

/// Selects the current leaf of a tree.
///
/// Keeps the last selection between calls; a pass that satisfies no leaf
/// leaves it untouched.
#[derive(Debug, Default)]
pub struct TreeEvaluator {
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl TreeEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.stack.clear();
    }

    /// Walk `tree` depth-first, pre-order, and select the first leaf that
    /// evaluates to `true` along a path of nodes that all evaluate to `true`.
    ///
    /// Returns the newly selected leaf, or `None` when nothing was selected
    /// this pass. Remaining stack entries are abandoned once a leaf is found.
    pub fn evaluate<C: 'static>(&mut self, ctx: &C, tree: &Tree<C>) -> Option<NodeId> {
        self.stack.clear();
        self.stack.push(tree.root());

        while let Some(id) = self.stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };
            if !node.evaluate(ctx) {
                trace!(node = %id, "node rejected");
                continue;
            }

            let children = tree.children(id);
            if children.is_empty() {
                self.stack.clear();
                self.current = Some(id);
                return Some(id);
            }

            // Reverse push so the first child is popped next.
            self.stack.extend(children.iter().rev().copied());
        }

        warn!(
            current = ?self.current,
            "no leaf satisfied evaluation; keeping previous selection"
        );
        None
    }
}
