//! Seedable RNG for wander jitter and initial headings.
//!
//! Not cryptographic. Identical seeds replay identical simulations.

use crate::math::lerp;

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)` using the top 24 bits.
    fn next_f32_unit(&mut self) -> f32 {
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    /// Uniform in `[lo, hi)`.
    fn next_f32_range(&mut self, lo: f32, hi: f32) -> f32 {
        lerp(lo, hi, self.next_f32_unit())
    }

    fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent stream for one agent, derived from a shared simulation seed.
    pub fn for_stream(seed: u64, agent: u64, stream: u64) -> Self {
        Self::new(derive_seed(seed, agent, stream))
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

pub fn derive_seed(seed: u64, agent: u64, stream: u64) -> u64 {
    let x = seed ^ mix64(agent.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream);
    mix64(x)
}
