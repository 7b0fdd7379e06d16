use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ai_bt::{evade_tree, EvadeContext, NodeId, TreeError, TreeExecutor};
use ai_core::{DeterministicRng, EvadeStrategy, Movement, Vector};
use tracing::debug;

use crate::{
    EvadeSensor, EvadeState, FleeStrategy, SharedTransform, SteeringConfig, WanderMovement,
};

/// An evade tree, its executor and the sensor that feeds it.
pub struct EvadeBrain<V> {
    executor: TreeExecutor<EvadeContext<V>>,
    sensor: Option<EvadeSensor<V>>,
}

impl<V: Vector> EvadeBrain<V> {
    pub fn new<S, M>(
        evade: S,
        movement: M,
        sensor: Option<EvadeSensor<V>>,
    ) -> Result<Self, TreeError>
    where
        S: EvadeStrategy + 'static,
        M: Movement + 'static,
    {
        let executor = TreeExecutor::with_tree(EvadeContext::new(), evade_tree(evade, movement))?;
        Ok(Self { executor, sensor })
    }

    /// Wander inside `config.movement`, flee from `threat` per `config.evade`.
    pub fn wander_or_flee<R>(
        transform: SharedTransform<V>,
        threat: Option<SharedTransform<V>>,
        config: &SteeringConfig<V>,
        rng: R,
    ) -> Result<Self, TreeError>
    where
        R: DeterministicRng + 'static,
    {
        let movement = Rc::new(RefCell::new(WanderMovement::new(
            transform.clone(),
            config.movement,
            rng,
        )));
        let mut flee = FleeStrategy::new(Rc::clone(&movement), config.evade);
        flee.set_threat(threat.clone());
        let sensor = threat.map(|threat| EvadeSensor::new(transform, threat));
        Self::new(flee, movement, sensor)
    }

    /// Sample the sensor, then run one executor tick.
    pub fn update(&mut self, elapsed: Duration) -> Option<NodeId> {
        if let Some(sensor) = &self.sensor {
            sensor.sample(self.executor.context_mut());
        }
        let before = self.behavior();
        let current = self.executor.execute(elapsed);
        let after = self.behavior();
        if before != after {
            debug!(from = ?before, to = ?after, "evade brain switched behavior");
        }
        current
    }

    /// Which branch of the evade tree is currently selected.
    pub fn behavior(&self) -> Option<EvadeState> {
        let current = self.executor.current()?;
        let tree = self.executor.tree()?;
        match tree.children(tree.root()).iter().position(|&id| id == current) {
            Some(0) => Some(EvadeState::Evading),
            Some(_) => Some(EvadeState::Moving),
            None => None,
        }
    }

    pub fn context(&self) -> &EvadeContext<V> {
        self.executor.context()
    }

    pub fn executor(&self) -> &TreeExecutor<EvadeContext<V>> {
        &self.executor
    }
}
