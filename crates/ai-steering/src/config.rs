//! Tuning parameters for the reference strategies.
//!
//! Velocities are distances per update call, not per second.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned box an agent is steered back into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<V> {
    pub min: V,
    pub max: V,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig<V> {
    pub velocity: f32,
    /// Max per-axis change applied to the heading at each jitter.
    pub wander_jitter: f32,
    /// Seconds of movement between two jitters.
    pub wander_interval_secs: f32,
    /// Turn rate as a fraction of the velocity (radians per update).
    pub turn_factor: f32,
    pub bounds: Option<Bounds<V>>,
}

impl<V> Default for MovementConfig<V> {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            wander_jitter: 1.0,
            wander_interval_secs: 2.0,
            turn_factor: 0.15,
            bounds: None,
        }
    }
}

impl<V> MovementConfig<V> {
    /// Negative and NaN intervals jitter every call; values too large for a
    /// [`Duration`] never jitter.
    pub fn wander_interval(&self) -> Duration {
        Duration::try_from_secs_f32(self.wander_interval_secs.max(0.0)).unwrap_or(Duration::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvadeConfig {
    /// Threats closer than this trigger evasion.
    pub distance: f32,
    pub velocity: f32,
}

impl Default for EvadeConfig {
    fn default() -> Self {
        Self {
            distance: 200.0,
            velocity: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChaseConfig {
    /// Targets closer than this are pursued.
    pub detection_radius: f32,
    pub follow_velocity: f32,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            detection_radius: 250.0,
            follow_velocity: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringConfig<V> {
    pub movement: MovementConfig<V>,
    pub evade: EvadeConfig,
    pub chase: ChaseConfig,
}

impl<V> Default for SteeringConfig<V> {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            evade: EvadeConfig::default(),
            chase: ChaseConfig::default(),
        }
    }
}
