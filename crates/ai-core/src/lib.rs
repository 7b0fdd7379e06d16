//! Deterministic, engine-agnostic primitives for game AI.
//!
//! Small vector math, a seedable RNG, and the strategy capabilities that
//! behavior-tree leaves call into (movement, evasion, pursuit).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod math;
pub mod rng;
pub mod strategy;

pub use math::{Vec2, Vec3, Vector};
pub use rng::{DeterministicRng, SplitMix64};
pub use strategy::{ChaseStrategy, EvadeStrategy, Movement};
