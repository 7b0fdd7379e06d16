use std::time::Duration;

use ai_core::math::wrap_angle;
use ai_core::{DeterministicRng, Movement, SplitMix64, Vector};
use tracing::trace;

use crate::{MovementConfig, SharedTransform};

/// Rotate `transform` towards `face_position` by at most `turn_speed` radians.
///
/// Vectors without a planar heading (3D, or a zero offset) and a NaN turn
/// speed leave the rotation untouched.
pub fn turn_towards<V: Vector>(transform: &SharedTransform<V>, face_position: V, turn_speed: f32) {
    if turn_speed.is_nan() {
        return;
    }
    let Some(desired) = (face_position - transform.position()).heading() else {
        return;
    };
    let turn = turn_speed.abs();
    let rotation = transform.rotation();
    let difference = wrap_angle(desired - rotation).clamp(-turn, turn);
    transform.set_rotation(wrap_angle(rotation + difference));
}

/// Wandering movement: keep a heading, jitter it periodically, stay in bounds.
#[derive(Debug, Clone)]
pub struct WanderMovement<V, R = SplitMix64> {
    transform: SharedTransform<V>,
    config: MovementConfig<V>,
    direction: V,
    since_jitter: Duration,
    rng: R,
}

impl<V, R> WanderMovement<V, R>
where
    V: Vector,
    R: DeterministicRng,
{
    pub fn new(transform: SharedTransform<V>, config: MovementConfig<V>, mut rng: R) -> Self {
        let direction = V::ZERO.map(|_| (rng.next_i32() as f32).cos());
        Self {
            transform,
            config,
            direction,
            since_jitter: Duration::ZERO,
            rng,
        }
    }

    pub fn transform(&self) -> &SharedTransform<V> {
        &self.transform
    }

    pub fn config(&self) -> &MovementConfig<V> {
        &self.config
    }

    pub fn direction(&self) -> V {
        self.direction
    }

    /// Override the heading, e.g. after fleeing so wandering continues away.
    pub fn set_direction(&mut self, direction: V) {
        self.direction = direction;
        self.since_jitter = Duration::ZERO;
    }

    pub fn look_to(&self, face_position: V, turn_speed: f32) {
        turn_towards(&self.transform, face_position, turn_speed);
    }

    fn jitter(&mut self) {
        let jitter = self.config.wander_jitter.abs();
        let rng = &mut self.rng;
        self.direction = self
            .direction
            .map(|c| c + rng.next_f32_range(-jitter, jitter));
    }

    fn keep_within_bounds(&mut self) {
        let Some(bounds) = self.config.bounds else {
            return;
        };
        let position = self.transform.position();
        if !position.within(bounds.min, bounds.max) {
            let center = (bounds.min + bounds.max) * 0.5;
            self.direction = (center - position).normalized();
            trace!(?position, "wandered out of bounds; heading back");
        }
    }
}

impl<V, R> Movement for WanderMovement<V, R>
where
    V: Vector,
    R: DeterministicRng,
{
    fn move_by(&mut self, elapsed: Duration) {
        self.since_jitter += elapsed;
        if self.since_jitter >= self.config.wander_interval() {
            self.since_jitter = Duration::ZERO;
            self.jitter();
        }

        self.direction = self.direction.normalized();
        let velocity = self.config.velocity;
        let position = self.transform.position();
        self.look_to(position + self.direction, self.config.turn_factor * velocity);
        self.keep_within_bounds();
        self.transform.translate(self.direction * velocity);
    }
}
