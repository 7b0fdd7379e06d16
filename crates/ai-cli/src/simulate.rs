//! Headless chase: a wandering evader brain against a pursuer.

use std::fmt;
use std::time::Duration;

use ai_core::{SplitMix64, Vec2, Vector};
use ai_steering::{
    ChaseState, ChasingBehavior, EvadeBrain, EvadeState, PursueStrategy, SharedTransform,
    SteeringConfig, WanderMovement,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const EVADER_STREAM: u64 = 0;
const PURSUER_STREAM: u64 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub steering: SteeringConfig<Vec2>,
    pub evader: Vec2,
    pub pursuer: Vec2,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steering: SteeringConfig::default(),
            evader: Vec2::ZERO,
            pursuer: Vec2::new(300.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub ticks: u32,
    pub evading_ticks: u32,
    pub chasing_ticks: u32,
    pub closest_distance: f32,
    pub evader: Vec2,
    pub pursuer: Vec2,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ticks:            {}", self.ticks)?;
        writeln!(f, "evading ticks:    {}", self.evading_ticks)?;
        writeln!(f, "chasing ticks:    {}", self.chasing_ticks)?;
        writeln!(f, "closest distance: {:.2}", self.closest_distance)?;
        writeln!(f, "evader:           ({:.2}, {:.2})", self.evader.x, self.evader.y)?;
        write!(f, "pursuer:          ({:.2}, {:.2})", self.pursuer.x, self.pursuer.y)
    }
}

pub fn run(
    config: &SimulationConfig,
    ticks: u32,
    dt: Duration,
    seed: u64,
) -> Result<SimulationReport> {
    let evader = SharedTransform::at(config.evader);
    let pursuer = SharedTransform::at(config.pursuer);
    let steering = &config.steering;

    let mut brain = EvadeBrain::wander_or_flee(
        evader.clone(),
        Some(pursuer.clone()),
        steering,
        SplitMix64::for_stream(seed, EVADER_STREAM, 0),
    )
    .context("failed to assemble the evader brain")?;

    let pursue = PursueStrategy::new(pursuer.clone(), steering.chase)
        .with_target(evader.clone())
        .with_turn_factor(steering.movement.turn_factor);
    let wander = WanderMovement::new(
        pursuer.clone(),
        steering.movement,
        SplitMix64::for_stream(seed, PURSUER_STREAM, 0),
    );
    let mut chaser = ChasingBehavior::new(pursue, wander);

    let mut report = SimulationReport {
        ticks,
        evading_ticks: 0,
        chasing_ticks: 0,
        closest_distance: evader.position().distance(pursuer.position()),
        evader: evader.position(),
        pursuer: pursuer.position(),
    };

    for tick in 0..ticks {
        brain.update(dt);
        let chase = chaser.update(dt);
        let behavior = brain.behavior();

        if behavior == Some(EvadeState::Evading) {
            report.evading_ticks += 1;
        }
        if chase == ChaseState::Chasing {
            report.chasing_ticks += 1;
        }
        let distance = evader.position().distance(pursuer.position());
        report.closest_distance = report.closest_distance.min(distance);

        debug!(
            tick,
            evader = ?behavior,
            pursuer = ?chase,
            distance,
            "tick"
        );
    }

    report.evader = evader.position();
    report.pursuer = pursuer.position();
    Ok(report)
}
