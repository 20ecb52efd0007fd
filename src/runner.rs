//! Simulation runner: drives each configured strategy through repeated
//! independent trials against the Bernoulli reward source and averages the
//! overall-CTR trajectories.
//!
//! Trial semantics: one strategy instance is built per configured slot and
//! its counters are reset at the start of every trial, so trials are fully
//! independent replays — no warm-start bias accumulates across trials. Only
//! the RNG streams advance between trials.

use tracing::debug;

use crate::{BernoulliArms, Error, Strategy, StrategySpec};

/// Seed-mixing constant (splitmix64 increment), used to derive independent
/// per-slot RNG streams from the configured master seed.
const SEED_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// One averaged CTR-over-time line for a chart: a display label plus the
/// per-step mean overall CTR across trials, in percent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategySeries {
    /// Display label, `Alg#<ordinal> (<policy>)`.
    pub label: String,
    /// Length `num_steps`; each value in `[0, 100]`.
    pub percent_ctr: Vec<f64>,
}

/// Full simulation configuration as supplied by the external collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// True per-arm click probabilities in `[0, 1]`.
    pub probabilities: Vec<f64>,
    /// One entry per strategy slot.
    pub strategies: Vec<StrategySpec>,
    /// Time steps per trial.
    pub num_steps: usize,
    /// Independent trials averaged per strategy.
    pub num_trials: usize,
    /// Master seed; all per-slot RNG streams derive from it.
    pub seed: u64,
}

impl SimulationConfig {
    /// Fail-fast validation of the whole configuration.
    ///
    /// Checks everything the trial loop relies on: non-empty arm set with
    /// in-range probabilities, at least one strategy with valid parameters,
    /// and non-zero step/trial counts.
    pub fn validate(&self) -> Result<(), Error> {
        if self.probabilities.is_empty() {
            return Err(Error::NoArms);
        }
        for &p in &self.probabilities {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(Error::ProbabilityOutOfRange { value: p });
            }
        }
        if self.strategies.is_empty() {
            return Err(Error::NoStrategies);
        }
        if self.num_steps == 0 {
            return Err(Error::ZeroSteps);
        }
        if self.num_trials == 0 {
            return Err(Error::ZeroTrials);
        }
        // Surface bad strategy parameters before any trial runs.
        for spec in &self.strategies {
            spec.build(self.probabilities.len(), 0)?;
        }
        Ok(())
    }

    /// Run the full simulation: every strategy slot, `num_trials` trials of
    /// `num_steps` steps each, averaged per step and scaled to percent.
    ///
    /// Strategies are fully independent; the result order matches the
    /// configured slot order.
    pub fn run(&self) -> Result<Vec<StrategySeries>, Error> {
        self.validate()?;
        let num_arms = self.probabilities.len();
        let mut series = Vec::with_capacity(self.strategies.len());
        for (slot, spec) in self.strategies.iter().enumerate() {
            let slot_seed = self.seed ^ (slot as u64).wrapping_mul(SEED_GAMMA);
            let mut strategy = spec.build(num_arms, slot_seed)?;
            // Separate stream for the reward draws of this slot.
            let mut arms =
                BernoulliArms::with_seed(self.probabilities.clone(), slot_seed ^ 0x4152_4D53)?; // "ARMS"
            let percent_ctr = run_trials(
                strategy.as_mut(),
                &mut arms,
                self.num_steps,
                self.num_trials,
            )?
            .into_iter()
            .map(|mean_ctr| mean_ctr * 100.0)
            .collect::<Vec<f64>>();

            let label = format!("Alg#{slot} ({})", spec.name());
            debug!(
                %label,
                final_percent_ctr = percent_ctr.last().copied().unwrap_or(0.0),
                "strategy series complete"
            );
            series.push(StrategySeries { label, percent_ctr });
        }
        Ok(series)
    }
}

/// Drive one strategy through `num_trials` independent trials of
/// `num_steps` steps each against `arms`, resetting the strategy's counters
/// before every trial.
///
/// Returns the per-step mean overall CTR across trials as fractions in
/// `[0, 1]` (callers scale to percent for display).
pub fn run_trials(
    strategy: &mut dyn Strategy,
    arms: &mut BernoulliArms,
    num_steps: usize,
    num_trials: usize,
) -> Result<Vec<f64>, Error> {
    if num_steps == 0 {
        return Err(Error::ZeroSteps);
    }
    if num_trials == 0 {
        return Err(Error::ZeroTrials);
    }
    let mut sums = vec![0.0f64; num_steps];
    for _ in 0..num_trials {
        strategy.reset();
        for sum in sums.iter_mut() {
            let arm = strategy.display()?;
            let clicked = arms.resolve(arm)?;
            strategy.reward(arm, clicked)?;
            *sum += strategy.overall_ctr();
        }
    }
    let trials = num_trials as f64;
    Ok(sums.into_iter().map(|s| s / trials).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> SimulationConfig {
        SimulationConfig {
            probabilities: vec![0.1, 0.5, 0.9],
            strategies: vec![StrategySpec::Ucb1],
            num_steps: 50,
            num_trials: 3,
            seed: 42,
        }
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        let mut cfg = base_config();
        cfg.probabilities.clear();
        assert_eq!(cfg.validate(), Err(Error::NoArms));

        let mut cfg = base_config();
        cfg.probabilities[1] = 1.5;
        assert_eq!(
            cfg.validate(),
            Err(Error::ProbabilityOutOfRange { value: 1.5 })
        );

        let mut cfg = base_config();
        cfg.strategies.clear();
        assert_eq!(cfg.validate(), Err(Error::NoStrategies));

        let mut cfg = base_config();
        cfg.num_steps = 0;
        assert_eq!(cfg.validate(), Err(Error::ZeroSteps));

        let mut cfg = base_config();
        cfg.num_trials = 0;
        assert_eq!(cfg.validate(), Err(Error::ZeroTrials));
    }

    #[test]
    fn validate_surfaces_bad_strategy_parameters() {
        let mut cfg = base_config();
        cfg.strategies = vec![StrategySpec::ThompsonSampling {
            alpha: 0.0,
            beta: 1.0,
        }];
        assert_eq!(
            cfg.validate(),
            Err(Error::NonPositivePrior {
                alpha: 0.0,
                beta: 1.0
            })
        );
    }

    #[test]
    fn run_emits_one_series_per_slot_in_order() {
        let mut cfg = base_config();
        cfg.strategies = vec![
            StrategySpec::UniformRandom,
            StrategySpec::EpsilonGreedy { epsilon: 0.1 },
        ];
        let series = cfg.run().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Alg#0 (UniformRandom)");
        assert_eq!(series[1].label, "Alg#1 (EpsilonGreedy)");
        for s in &series {
            assert_eq!(s.percent_ctr.len(), cfg.num_steps);
            assert!(s
                .percent_ctr
                .iter()
                .all(|&v| (0.0..=100.0).contains(&v)));
        }
    }

    #[test]
    fn run_is_reproducible_for_the_same_seed() {
        let cfg = base_config();
        assert_eq!(cfg.run().unwrap(), cfg.run().unwrap());
    }

    #[test]
    fn different_seeds_change_the_series() {
        let a = base_config();
        let mut b = base_config();
        b.seed = 43;
        assert_ne!(a.run().unwrap(), b.run().unwrap());
    }

    #[test]
    fn trials_start_cold_each_time() {
        // With p=1.0 everywhere, every step clicks, so the first step of
        // every trial contributes CTR exactly 1.0. A warm-started second
        // trial could not change that, but a strategy carrying stats over
        // would: run_trials resets, so the averaged first step is 1.0.
        let mut strategy = StrategySpec::UniformRandom.build(2, 0).unwrap();
        let mut arms = BernoulliArms::with_seed(vec![1.0, 1.0], 0).unwrap();
        let series = run_trials(strategy.as_mut(), &mut arms, 10, 4).unwrap();
        assert!(series.iter().all(|&v| v == 1.0));
        // After 4 trials of 10 steps, the last trial's counters only hold
        // that trial's 10 displays.
        assert_eq!(strategy.stats().total_displays(), 10);
    }
}
