//! Thompson sampling policy.
//!
//! Each arm's click rate is modelled as a Beta posterior with shared priors
//! `(alpha, beta)`: after `s` clicks in `d` displays the posterior is
//! `Beta(alpha + s, beta + d - s)`. Selection draws one sample per arm and
//! plays the argmax, which explores exactly in proportion to posterior
//! uncertainty.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Beta, Distribution};

use crate::{ArmStats, Error, Strategy};

/// Seedable Thompson-sampling arm selection.
#[derive(Debug, Clone)]
pub struct ThompsonSampling {
    stats: ArmStats,
    rng: StdRng,
    alpha: f64,
    beta: f64,
}

impl ThompsonSampling {
    /// Create with a deterministic fixed seed (0).
    ///
    /// Both priors must be finite and strictly positive; non-positive values
    /// would silently corrupt the posterior, so they are rejected here.
    pub fn new(num_arms: usize, alpha: f64, beta: f64) -> Result<Self, Error> {
        Self::with_seed(num_arms, alpha, beta, 0)
    }

    /// Create with an explicit seed (reproducible).
    pub fn with_seed(num_arms: usize, alpha: f64, beta: f64, seed: u64) -> Result<Self, Error> {
        if num_arms == 0 {
            return Err(Error::NoArms);
        }
        if !alpha.is_finite() || !beta.is_finite() || alpha <= 0.0 || beta <= 0.0 {
            return Err(Error::NonPositivePrior { alpha, beta });
        }
        Ok(Self {
            stats: ArmStats::new(num_arms),
            rng: StdRng::seed_from_u64(seed),
            alpha,
            beta,
        })
    }

    /// The shared prior `(alpha, beta)`.
    pub fn priors(&self) -> (f64, f64) {
        (self.alpha, self.beta)
    }

    fn sample_posterior(&mut self, successes: u64, displays: u64) -> f64 {
        let a = self.alpha + successes as f64;
        let b = self.beta + (displays - successes) as f64;
        // Parameters are always positive given the validated priors, but a
        // neutral fallback keeps selection total if the distribution ever
        // rejects them.
        match Beta::new(a, b) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0.5,
        }
    }
}

impl Strategy for ThompsonSampling {
    fn select_arm(&mut self) -> usize {
        let num_arms = self.stats.num_arms();
        let mut best_arm = 0usize;
        let mut best_sample = 0.0f64;
        for arm in 0..num_arms {
            let successes = self.stats.successes()[arm];
            let displays = self.stats.displays()[arm];
            let theta = self.sample_posterior(successes, displays);
            // Strict comparison: the first arm to beat the running best wins,
            // and arm 0 stands when nothing exceeds the initial 0.0.
            if theta > best_sample {
                best_sample = theta;
                best_arm = arm;
            }
        }
        best_arm
    }

    fn stats(&self) -> &ArmStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut ArmStats {
        &mut self.stats
    }

    fn name(&self) -> &'static str {
        "ThompsonSampling"
    }
}
