use std::time::Duration;

use ai_core::{ChaseStrategy, Vector};

use crate::{turn_towards, ChaseConfig, SharedTransform};

/// Head straight for the target while it is within `detection_radius`.
#[derive(Debug, Clone)]
pub struct PursueStrategy<V> {
    transform: SharedTransform<V>,
    target: Option<SharedTransform<V>>,
    config: ChaseConfig,
    turn_factor: f32,
}

impl<V: Vector> PursueStrategy<V> {
    pub fn new(transform: SharedTransform<V>, config: ChaseConfig) -> Self {
        Self {
            transform,
            target: None,
            config,
            turn_factor: 0.15,
        }
    }

    pub fn with_target(mut self, target: SharedTransform<V>) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_turn_factor(mut self, turn_factor: f32) -> Self {
        self.turn_factor = turn_factor;
        self
    }

    pub fn set_target(&mut self, target: Option<SharedTransform<V>>) {
        self.target = target;
    }

    pub fn target(&self) -> Option<&SharedTransform<V>> {
        self.target.as_ref()
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }
}

impl<V: Vector> ChaseStrategy for PursueStrategy<V> {
    fn target_detected(&self, _elapsed: Duration) -> bool {
        self.target.as_ref().is_some_and(|target| {
            self.transform.position().distance(target.position()) < self.config.detection_radius
        })
    }

    fn chase(&mut self, _elapsed: Duration) {
        let Some(target) = &self.target else {
            return;
        };
        let position = self.transform.position();
        let goal = target.position();
        let velocity = self.config.follow_velocity;
        turn_towards(&self.transform, goal, self.turn_factor * velocity);

        // Never overshoot the target.
        let offset = goal - position;
        let step = offset.length().min(velocity);
        self.transform.translate(offset.normalized() * step);
    }
}
