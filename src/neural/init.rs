use std::ops::RangeInclusive;

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A reproducible source of initial weight values.
pub trait Initializer {
    fn next_weight(&mut self) -> f64;
}

/// 31-bit linear congruential generator producing values in `[0, 1]`.
///
/// Each draw returns the current state scaled by `2^31 - 1` (in single
/// precision), then advances the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub const DEFAULT_SEED: u32 = 1_103_527_590;

    const MULTIPLIER: u64 = 1_103_515_245;
    const INCREMENT: u64 = 12_345;
    const MODULUS: u64 = 1 << 31;
    const MAX: f32 = 0x7fff_ffff as f32;

    pub fn new(seed: u32) -> Self {
        Self {
            state: seed as u64 % Self::MODULUS,
        }
    }

    pub fn next_unit(&mut self) -> f64 {
        let val = (self.state as f32 / Self::MAX) as f64;
        self.state = (Self::MULTIPLIER * self.state + Self::INCREMENT) % Self::MODULUS;
        val
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl Initializer for Lcg {
    fn next_weight(&mut self) -> f64 {
        self.next_unit()
    }
}

/// Draws weights uniformly from a range using any `rand` generator.
pub struct UniformInit<R: Rng> {
    rng: R,
    die: Uniform<f64>,
}

impl<R: Rng> UniformInit<R> {
    pub fn new(rng: R, init_range: RangeInclusive<f64>) -> Self {
        Self {
            rng,
            die: Uniform::from(init_range),
        }
    }
}

impl<R: Rng> Initializer for UniformInit<R> {
    fn next_weight(&mut self) -> f64 {
        self.die.sample(&mut self.rng)
    }
}
