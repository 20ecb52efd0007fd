//! Synthetic Bernoulli reward source.
//!
//! [`BernoulliArms`] holds the hidden true click probability of each arm and
//! answers one stochastic yes/no query per display. It is **seedable** so
//! whole simulations can be reproduced in tests; like the other stochastic
//! pieces of this crate, default construction uses a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Error;

/// A fixed set of arms, each with a hidden true click probability.
///
/// The probability vector is immutable after construction; only the internal
/// RNG advances.
#[derive(Debug, Clone)]
pub struct BernoulliArms {
    probabilities: Vec<f64>,
    rng: StdRng,
}

impl BernoulliArms {
    /// Create a reward source with a deterministic fixed seed (0).
    ///
    /// Fails if `probabilities` is empty or any value is not a finite number
    /// in `[0, 1]`.
    pub fn new(probabilities: Vec<f64>) -> Result<Self, Error> {
        Self::with_seed(probabilities, 0)
    }

    /// Create a reward source with an explicit seed (reproducible).
    pub fn with_seed(probabilities: Vec<f64>, seed: u64) -> Result<Self, Error> {
        if probabilities.is_empty() {
            return Err(Error::NoArms);
        }
        for &p in &probabilities {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(Error::ProbabilityOutOfRange { value: p });
            }
        }
        Ok(Self {
            probabilities,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Create from percentage values in `[0, 100]`, the unit external input
    /// widgets typically use.
    pub fn from_percent(percent: &[f64], seed: u64) -> Result<Self, Error> {
        let probabilities: Vec<f64> = percent.iter().map(|p| p / 100.0).collect();
        Self::with_seed(probabilities, seed)
    }

    /// Number of arms.
    pub fn num_arms(&self) -> usize {
        self.probabilities.len()
    }

    /// The hidden true probabilities (simulation-side knowledge; strategies
    /// never see these).
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Resolve one display of `arm`: returns `true` (clicked) with the arm's
    /// true probability.
    pub fn resolve(&mut self, arm: usize) -> Result<bool, Error> {
        let p = *self
            .probabilities
            .get(arm)
            .ok_or(Error::ArmOutOfRange {
                index: arm,
                num_arms: self.probabilities.len(),
            })?;
        let draw: f64 = self.rng.random();
        Ok(draw < p)
    }
}
