use ai_bt::EvadeContext;
use ai_core::Vector;

use crate::SharedTransform;

/// Copies the agent's and the threat's positions into an [`EvadeContext`].
#[derive(Debug, Clone)]
pub struct EvadeSensor<V> {
    source: SharedTransform<V>,
    target: SharedTransform<V>,
}

impl<V: Vector> EvadeSensor<V> {
    pub fn new(source: SharedTransform<V>, target: SharedTransform<V>) -> Self {
        Self { source, target }
    }

    /// Unchanged positions leave the context's reevaluation flag alone.
    pub fn sample(&self, ctx: &mut EvadeContext<V>) {
        ctx.set_source_position(self.source.position());
        ctx.set_target_position(self.target.position());
    }
}
