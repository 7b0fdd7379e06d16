//! Two-state behaviors driving a strategy pair without a tree.

use std::time::Duration;

use ai_core::{ChaseStrategy, EvadeStrategy, Movement};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvadeState {
    #[default]
    Moving,
    Evading,
}

/// Evade while the strategy reports a threat, otherwise move.
#[derive(Debug)]
pub struct EvadingBehavior<S, M> {
    strategy: S,
    movement: M,
    state: EvadeState,
}

impl<S, M> EvadingBehavior<S, M>
where
    S: EvadeStrategy,
    M: Movement,
{
    pub fn new(strategy: S, movement: M) -> Self {
        Self {
            strategy,
            movement,
            state: EvadeState::default(),
        }
    }

    pub fn state(&self) -> EvadeState {
        self.state
    }

    pub fn update(&mut self, elapsed: Duration) -> EvadeState {
        let next = if self.strategy.need_to_evade(elapsed) {
            EvadeState::Evading
        } else {
            EvadeState::Moving
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "evading behavior changed state");
            self.state = next;
        }

        match self.state {
            EvadeState::Evading => self.strategy.evade(elapsed),
            EvadeState::Moving => self.movement.move_by(elapsed),
        }
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChaseState {
    #[default]
    Moving,
    Chasing,
}

/// Chase while the strategy detects a target, otherwise move.
#[derive(Debug)]
pub struct ChasingBehavior<S, M> {
    strategy: S,
    movement: M,
    state: ChaseState,
}

impl<S, M> ChasingBehavior<S, M>
where
    S: ChaseStrategy,
    M: Movement,
{
    pub fn new(strategy: S, movement: M) -> Self {
        Self {
            strategy,
            movement,
            state: ChaseState::default(),
        }
    }

    pub fn state(&self) -> ChaseState {
        self.state
    }

    pub fn update(&mut self, elapsed: Duration) -> ChaseState {
        let next = if self.strategy.target_detected(elapsed) {
            ChaseState::Chasing
        } else {
            ChaseState::Moving
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "chasing behavior changed state");
            self.state = next;
        }

        match self.state {
            ChaseState::Chasing => self.strategy.chase(elapsed),
            ChaseState::Moving => self.movement.move_by(elapsed),
        }
        self.state
    }
}
