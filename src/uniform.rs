//! Uniform-random baseline policy.
//!
//! Ignores all evidence and picks any arm with equal probability. Useful as
//! the no-learning control line next to the adaptive policies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ArmStats, Error, Strategy};

/// Uniformly random arm selection.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    stats: ArmStats,
    rng: StdRng,
}

impl UniformRandom {
    /// Create with a deterministic fixed seed (0).
    pub fn new(num_arms: usize) -> Result<Self, Error> {
        Self::with_seed(num_arms, 0)
    }

    /// Create with an explicit seed (reproducible).
    pub fn with_seed(num_arms: usize, seed: u64) -> Result<Self, Error> {
        if num_arms == 0 {
            return Err(Error::NoArms);
        }
        Ok(Self {
            stats: ArmStats::new(num_arms),
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl Strategy for UniformRandom {
    fn select_arm(&mut self) -> usize {
        self.rng.random_range(0..self.stats.num_arms())
    }

    fn stats(&self) -> &ArmStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut ArmStats {
        &mut self.stats
    }

    fn name(&self) -> &'static str {
        "UniformRandom"
    }
}
