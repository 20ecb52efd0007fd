//! `banditlab`: multi-armed bandit strategies simulated against synthetic
//! Bernoulli click-through traffic.
//!
//! The crate models the classic "which ad do I show next" problem: a small
//! set of arms, each with a hidden true click-through rate, and a selection
//! strategy that must learn which arms to favor while it is still collecting
//! evidence. Everything here is simulation-side — rewards come from
//! [`BernoulliArms`], a seedable synthetic source, never from real traffic.
//!
//! **Pieces:**
//! - [`BernoulliArms`]: per-arm true probabilities + a stochastic yes/no
//!   reward query.
//! - [`ArmStats`]: the shared per-arm counters (displays, successes, running
//!   CTR) that every strategy reads and updates.
//! - [`Strategy`]: the selection-policy trait. One required decision method;
//!   display/reward bookkeeping is shared provided code.
//! - Policies: [`UniformRandom`], [`EpsilonGreedy`], [`ThompsonSampling`],
//!   [`Ucb1`], [`Ucb1Tuned`].
//! - [`StrategySpec`] + [`SimulationConfig`]: validated configuration from an
//!   external collaborator, and the trial loop that averages overall-CTR
//!   trajectories across independent trials into one percent-scaled series
//!   per strategy.
//!
//! **Goals:**
//! - **Reproducible by default**: every stochastic component owns a seedable
//!   RNG with a fixed default seed; no implicit global generator.
//! - **Policy-only strategies**: shared counters live in a concrete
//!   [`ArmStats`] owned by each strategy instance, so a policy is exactly one
//!   `select_arm` implementation.
//! - **Fail fast**: degenerate configurations (zero arms, zero steps,
//!   non-positive Beta priors, out-of-range probabilities) are rejected
//!   before the simulation starts.
//!
//! **Non-goals:**
//! - No persistence, no distributed execution, no real traffic.
//! - No chart rendering or input widgets — display is an external
//!   collaborator that consumes the per-strategy series.
//!
//! # Example
//!
//! ```rust
//! use banditlab::{SimulationConfig, StrategySpec};
//!
//! let cfg = SimulationConfig {
//!     probabilities: vec![0.1, 0.5, 0.9],
//!     strategies: vec![StrategySpec::Ucb1, StrategySpec::UniformRandom],
//!     num_steps: 200,
//!     num_trials: 5,
//!     seed: 42,
//! };
//! let series = cfg.run().unwrap();
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].percent_ctr.len(), 200);
//! ```

#![forbid(unsafe_code)]

mod arms;
pub use arms::*;

mod stats;
pub use stats::*;

mod strategy;
pub use strategy::*;

mod uniform;
pub use uniform::*;

mod epsilon_greedy;
pub use epsilon_greedy::*;

mod thompson;
pub use thompson::*;

mod ucb;
pub use ucb::*;

mod runner;
pub use runner::*;

/// Errors produced by construction-time validation and by arm-indexed
/// operations.
///
/// All validation is front-loaded: once a [`SimulationConfig`] passes
/// [`SimulationConfig::validate`], the trial loop itself cannot produce
/// `ArmOutOfRange` (strategies only emit indices in `[0, num_arms)`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// An arm index outside `[0, num_arms)` was passed to a reward source or
    /// to the per-arm counters.
    #[error("arm index {index} out of range for {num_arms} arms")]
    ArmOutOfRange { index: usize, num_arms: usize },

    /// A success was reported for an arm with no matching display, which
    /// would push `successes[i]` past `displays[i]`.
    #[error("reward for arm {index} has no matching display")]
    RewardWithoutDisplay { index: usize },

    /// A per-arm probability was not a finite value in `[0, 1]`.
    #[error("arm probability {value} is not in [0, 1]")]
    ProbabilityOutOfRange { value: f64 },

    /// The arm set was empty.
    #[error("at least one arm is required")]
    NoArms,

    /// EpsilonGreedy exploration rate outside `[0, 1]`.
    #[error("epsilon {value} is not in [0, 1]")]
    EpsilonOutOfRange { value: f64 },

    /// Thompson sampling requires strictly positive Beta priors.
    #[error("Beta priors must be positive, got alpha={alpha}, beta={beta}")]
    NonPositivePrior { alpha: f64, beta: f64 },

    /// `num_steps` was zero.
    #[error("num_steps must be at least 1")]
    ZeroSteps,

    /// `num_trials` was zero.
    #[error("num_trials must be at least 1")]
    ZeroTrials,

    /// The strategy list was empty.
    #[error("at least one strategy is required")]
    NoStrategies,
}
