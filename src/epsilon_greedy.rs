//! Epsilon-greedy policy.
//!
//! With probability `epsilon` explore uniformly; otherwise exploit among the
//! arms currently tied at the maximum running CTR. The tie set uses `>=` on
//! the maximum, so at cold start (all CTRs 0.0) exploitation degenerates to
//! a uniform pick over all arms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ArmStats, Error, Strategy};

/// Epsilon-greedy arm selection.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    stats: ArmStats,
    rng: StdRng,
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Create with a deterministic fixed seed (0).
    ///
    /// `epsilon` must be a finite value in `[0, 1]`.
    pub fn new(num_arms: usize, epsilon: f64) -> Result<Self, Error> {
        Self::with_seed(num_arms, epsilon, 0)
    }

    /// Create with an explicit seed (reproducible).
    pub fn with_seed(num_arms: usize, epsilon: f64, seed: u64) -> Result<Self, Error> {
        if num_arms == 0 {
            return Err(Error::NoArms);
        }
        if !epsilon.is_finite() || !(0.0..=1.0).contains(&epsilon) {
            return Err(Error::EpsilonOutOfRange { value: epsilon });
        }
        Ok(Self {
            stats: ArmStats::new(num_arms),
            rng: StdRng::seed_from_u64(seed),
            epsilon,
        })
    }

    /// The configured exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Strategy for EpsilonGreedy {
    fn select_arm(&mut self) -> usize {
        let num_arms = self.stats.num_arms();
        let draw: f64 = self.rng.random();
        if draw < self.epsilon {
            // Explore.
            return self.rng.random_range(0..num_arms);
        }
        // Exploit: uniform pick among the arms tied at the maximum CTR.
        let ctr = self.stats.running_ctr();
        let max_ctr = ctr.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<usize> = (0..num_arms).filter(|&i| ctr[i] >= max_ctr).collect();
        tied[self.rng.random_range(0..tied.len())]
    }

    fn stats(&self) -> &ArmStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut ArmStats {
        &mut self.stats
    }

    fn name(&self) -> &'static str {
        "EpsilonGreedy"
    }
}
