use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ai_core::{DeterministicRng, EvadeStrategy, SplitMix64, Vector};

use crate::{EvadeConfig, SharedTransform, WanderMovement};

/// Run straight away from the threat while it is within `distance`.
///
/// The wander heading is redirected too, so the agent keeps drifting away
/// once the threat is out of range.
#[derive(Debug, Clone)]
pub struct FleeStrategy<V, R = SplitMix64> {
    transform: SharedTransform<V>,
    threat: Option<SharedTransform<V>>,
    movement: Rc<RefCell<WanderMovement<V, R>>>,
    config: EvadeConfig,
}

impl<V, R> FleeStrategy<V, R>
where
    V: Vector,
    R: DeterministicRng,
{
    pub fn new(movement: Rc<RefCell<WanderMovement<V, R>>>, config: EvadeConfig) -> Self {
        let transform = movement.borrow().transform().clone();
        Self {
            transform,
            threat: None,
            movement,
            config,
        }
    }

    pub fn with_threat(mut self, threat: SharedTransform<V>) -> Self {
        self.threat = Some(threat);
        self
    }

    pub fn set_threat(&mut self, threat: Option<SharedTransform<V>>) {
        self.threat = threat;
    }

    pub fn threat(&self) -> Option<&SharedTransform<V>> {
        self.threat.as_ref()
    }

    pub fn config(&self) -> &EvadeConfig {
        &self.config
    }
}

impl<V, R> EvadeStrategy for FleeStrategy<V, R>
where
    V: Vector,
    R: DeterministicRng,
{
    fn need_to_evade(&self, _elapsed: Duration) -> bool {
        self.threat.as_ref().is_some_and(|threat| {
            self.transform.position().distance(threat.position()) < self.config.distance
        })
    }

    fn evade(&mut self, _elapsed: Duration) {
        let Some(threat) = &self.threat else {
            return;
        };
        let position = self.transform.position();
        let away = (position - threat.position()).normalized();
        let velocity = self.config.velocity;

        let mut movement = self.movement.borrow_mut();
        movement.set_direction(away);
        let turn = movement.config().turn_factor * velocity;
        movement.look_to(position + away, turn);
        drop(movement);

        self.transform.translate(away * velocity);
    }
}
