//! The [`Strategy`] trait and the [`StrategySpec`] configuration enum.
//!
//! A strategy is exactly one selection decision ([`Strategy::select_arm`])
//! over a concrete owned [`ArmStats`]. The display/reward bookkeeping and the
//! overall-CTR query are provided methods shared by every policy, so the
//! per-policy modules contain policy logic only.

use crate::{
    ArmStats, EpsilonGreedy, Error, ThompsonSampling, Ucb1, Ucb1Tuned, UniformRandom,
};

/// Common interface for bandit selection strategies.
///
/// Implementors provide `select_arm` plus accessors to their owned
/// [`ArmStats`]; everything else is shared provided code.
///
/// `select_arm` is a pure policy decision over the current stats: it may
/// draw from the strategy's own RNG but must not touch the counters, and it
/// must return an index in `[0, num_arms)`. All counter mutation goes
/// through [`Strategy::display`] and [`Strategy::reward`].
pub trait Strategy {
    /// Decide which arm to show next, based on the current stats.
    fn select_arm(&mut self) -> usize;

    /// The per-arm counters owned by this strategy instance.
    fn stats(&self) -> &ArmStats;

    /// Mutable access to the owned counters (used by the provided methods).
    fn stats_mut(&mut self) -> &mut ArmStats;

    /// Short policy name, used in display labels.
    fn name(&self) -> &'static str;

    /// Select an arm and count the display. The only display-side mutation
    /// entry point.
    fn display(&mut self) -> Result<usize, Error> {
        let arm = self.select_arm();
        self.stats_mut().record_display(arm)?;
        Ok(arm)
    }

    /// Feed back the reward outcome for a displayed arm.
    fn reward(&mut self, arm: usize, clicked: bool) -> Result<(), Error> {
        self.stats_mut().record_reward(arm, clicked)
    }

    /// Overall CTR across all arms so far (`0.0` before the first display).
    fn overall_ctr(&self) -> f64 {
        self.stats().overall_ctr()
    }

    /// Zero the learned counters so the next trial starts cold. The RNG is
    /// not reseeded; successive trials draw fresh randomness.
    fn reset(&mut self) {
        self.stats_mut().reset();
    }
}

/// Configuration-side description of one strategy slot.
///
/// This is what an external collaborator hands over: a policy name plus its
/// own parameters. [`StrategySpec::build`] validates the parameters and
/// produces the boxed strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategySpec {
    /// Pick any arm uniformly at random.
    UniformRandom,
    /// Explore with probability `epsilon`, otherwise exploit the best
    /// running CTR.
    EpsilonGreedy { epsilon: f64 },
    /// Sample each arm's Beta posterior and pick the largest sample.
    ThompsonSampling { alpha: f64, beta: f64 },
    /// Upper confidence bound, `sqrt(2 ln N / n_i)` exploration bonus.
    Ucb1,
    /// UCB1 with an empirical-variance-tightened bonus.
    Ucb1Tuned,
}

impl StrategySpec {
    /// Short policy name, matching [`Strategy::name`] of the built instance.
    pub fn name(&self) -> &'static str {
        match self {
            StrategySpec::UniformRandom => "UniformRandom",
            StrategySpec::EpsilonGreedy { .. } => "EpsilonGreedy",
            StrategySpec::ThompsonSampling { .. } => "ThompsonSampling",
            StrategySpec::Ucb1 => "UCB1",
            StrategySpec::Ucb1Tuned => "UCB1Tuned",
        }
    }

    /// Build the strategy for `num_arms` arms, validating parameters.
    ///
    /// `seed` feeds the strategy's internal RNG where the policy is
    /// stochastic; the deterministic UCB policies ignore it.
    pub fn build(&self, num_arms: usize, seed: u64) -> Result<Box<dyn Strategy>, Error> {
        Ok(match *self {
            StrategySpec::UniformRandom => Box::new(UniformRandom::with_seed(num_arms, seed)?),
            StrategySpec::EpsilonGreedy { epsilon } => {
                Box::new(EpsilonGreedy::with_seed(num_arms, epsilon, seed)?)
            }
            StrategySpec::ThompsonSampling { alpha, beta } => {
                Box::new(ThompsonSampling::with_seed(num_arms, alpha, beta, seed)?)
            }
            StrategySpec::Ucb1 => Box::new(Ucb1::new(num_arms)?),
            StrategySpec::Ucb1Tuned => Box::new(Ucb1Tuned::new(num_arms)?),
        })
    }
}
