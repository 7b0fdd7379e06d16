//! Reference "evade or wander" tree.
//!
//! ```text
//! Root
//! ├── EvadeNode   (selected while the strategy reports a threat)
//! └── MoveNode    (always satisfiable fallback)
//! ```

use std::time::Duration;

use ai_core::{EvadeStrategy, Movement, Vector};

use crate::{Node, RootNode, Tree, TreeContext, TreeState};

/// Context shared by the evade tree.
///
/// Positions are written by a host-side sensor every tick; the tree is only
/// reevaluated when one of them actually changes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvadeContext<V> {
    state: TreeState,
    pub time_in_movement: Duration,
    pub is_moving: bool,
    source_position: V,
    target_position: V,
}

impl<V: Vector> EvadeContext<V> {
    pub fn new() -> Self {
        Self {
            state: TreeState::default(),
            time_in_movement: Duration::ZERO,
            is_moving: false,
            source_position: V::ZERO,
            target_position: V::ZERO,
        }
    }

    /// Position of the agent running the tree.
    pub fn source_position(&self) -> V {
        self.source_position
    }

    pub fn set_source_position(&mut self, position: V) {
        if position != self.source_position {
            self.source_position = position;
            self.state.invalidate();
        }
    }

    /// Position of the threat being evaded.
    pub fn target_position(&self) -> V {
        self.target_position
    }

    pub fn set_target_position(&mut self, position: V) {
        if position != self.target_position {
            self.target_position = position;
            self.state.invalidate();
        }
    }
}

impl<V: Vector> Default for EvadeContext<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TreeContext for EvadeContext<V> {
    fn tree_state(&self) -> &TreeState {
        &self.state
    }

    fn tree_state_mut(&mut self) -> &mut TreeState {
        &mut self.state
    }
}

pub struct EvadeNode<S> {
    strategy: S,
}

impl<S> EvadeNode<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<V, S> Node<EvadeContext<V>> for EvadeNode<S>
where
    V: Vector,
    S: EvadeStrategy + 'static,
{
    fn evaluate(&self, ctx: &EvadeContext<V>) -> bool {
        self.strategy.need_to_evade(ctx.elapsed())
    }

    fn execute(&mut self, ctx: &mut EvadeContext<V>) {
        ctx.time_in_movement = Duration::ZERO;
        self.strategy.evade(ctx.elapsed());
    }
}

pub struct MoveNode<M> {
    movement: M,
}

impl<M> MoveNode<M> {
    pub fn new(movement: M) -> Self {
        Self { movement }
    }

    pub fn movement(&self) -> &M {
        &self.movement
    }
}

impl<V, M> Node<EvadeContext<V>> for MoveNode<M>
where
    V: Vector,
    M: Movement + 'static,
{
    fn evaluate(&self, _ctx: &EvadeContext<V>) -> bool {
        true
    }

    fn execute(&mut self, ctx: &mut EvadeContext<V>) {
        if !ctx.is_moving {
            ctx.time_in_movement = Duration::ZERO;
            ctx.is_moving = true;
        }
        let elapsed = ctx.elapsed();
        ctx.time_in_movement += elapsed;
        self.movement.move_by(elapsed);
    }
}

/// Build `Root -> [EvadeNode(evade), MoveNode(movement)]`.
pub fn evade_tree<V, S, M>(evade: S, movement: M) -> Tree<EvadeContext<V>>
where
    V: Vector,
    S: EvadeStrategy + 'static,
    M: Movement + 'static,
{
    Tree::new(RootNode)
        .with_child(EvadeNode::new(evade))
        .with_child(MoveNode::new(movement))
}
