//! Reference steering strategies for the evade/chase behaviors.
//!
//! Everything here is a host-side collaborator of `ai-bt`: agents live in
//! [`SharedTransform`]s, strategies move them, and [`EvadeBrain`] wires a
//! wander/flee pair into an evade tree fed by an [`EvadeSensor`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod brain;
pub mod config;
pub mod flee;
pub mod movement;
pub mod pursue;
pub mod sensor;
pub mod transform;

pub use behavior::{ChaseState, ChasingBehavior, EvadeState, EvadingBehavior};
pub use brain::EvadeBrain;
pub use config::{Bounds, ChaseConfig, EvadeConfig, MovementConfig, SteeringConfig};
pub use flee::FleeStrategy;
pub use movement::{turn_towards, WanderMovement};
pub use pursue::PursueStrategy;
pub use sensor::EvadeSensor;
pub use transform::{SharedTransform, Transform};
