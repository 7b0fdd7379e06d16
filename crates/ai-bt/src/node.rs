/// A behavior tree node.
///
/// `evaluate` decides whether traversal descends into (or, for a leaf, selects)
/// this node. `execute` runs on the selected leaf every tick until the context
/// is invalidated; inner nodes are never executed.
pub trait Node<C>: 'static {
    fn evaluate(&self, ctx: &C) -> bool;

    fn execute(&mut self, ctx: &mut C);

    /// Only [`RootNode`] answers `true`; the validator requires it at the root.
    fn is_root_marker(&self) -> bool {
        false
    }
}

/// Sentinel node marking a well-formed tree root. Always passes evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootNode;

impl<C> Node<C> for RootNode {
    fn evaluate(&self, _ctx: &C) -> bool {
        true
    }

    fn execute(&mut self, _ctx: &mut C) {}

    fn is_root_marker(&self) -> bool {
        true
    }
}

/// Node built from a predicate and an action closure.
pub struct FnNode<E, X> {
    evaluate: E,
    execute: X,
}

impl<E, X> FnNode<E, X> {
    pub fn new(evaluate: E, execute: X) -> Self {
        Self { evaluate, execute }
    }
}

impl<C, E> FnNode<E, fn(&mut C)> {
    /// Guard-only node: evaluates `evaluate`, does nothing when executed.
    pub fn condition(evaluate: E) -> Self {
        Self {
            evaluate,
            execute: |_| {},
        }
    }
}

impl<C, E, X> Node<C> for FnNode<E, X>
where
    E: Fn(&C) -> bool + 'static,
    X: FnMut(&mut C) + 'static,
{
    fn evaluate(&self, ctx: &C) -> bool {
        (self.evaluate)(ctx)
    }

    fn execute(&mut self, ctx: &mut C) {
        (self.execute)(ctx)
    }
}
