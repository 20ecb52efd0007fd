//! Shared per-arm counters that every selection strategy reads and updates.
//!
//! [`ArmStats`] is deliberately policy-free: it owns the three parallel
//! per-arm sequences (displays, successes, running CTR) and the bookkeeping
//! rules, so each strategy type is exactly one selection decision on top of
//! a concrete owned `ArmStats`.

use crate::Error;

/// Per-arm display/success counters plus the derived running CTR.
///
/// Invariants (hold after every record call):
/// - `successes[i] <= displays[i]`
/// - `running_ctr[i] == successes[i] / displays[i]` when `displays[i] > 0`,
///   else `0.0`
///
/// The running CTR is recomputed unconditionally on every record call,
/// misses included, so it can never go stale relative to the counters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmStats {
    displays: Vec<u64>,
    successes: Vec<u64>,
    running_ctr: Vec<f64>,
}

impl ArmStats {
    /// Create zeroed counters for `num_arms` arms.
    pub fn new(num_arms: usize) -> Self {
        Self {
            displays: vec![0; num_arms],
            successes: vec![0; num_arms],
            running_ctr: vec![0.0; num_arms],
        }
    }

    /// Number of arms tracked.
    pub fn num_arms(&self) -> usize {
        self.displays.len()
    }

    /// Per-arm display counts.
    pub fn displays(&self) -> &[u64] {
        &self.displays
    }

    /// Per-arm success (click) counts.
    pub fn successes(&self) -> &[u64] {
        &self.successes
    }

    /// Per-arm running CTR (`successes / displays`, `0.0` when undisplayed).
    pub fn running_ctr(&self) -> &[f64] {
        &self.running_ctr
    }

    fn check_arm(&self, arm: usize) -> Result<(), Error> {
        if arm >= self.displays.len() {
            return Err(Error::ArmOutOfRange {
                index: arm,
                num_arms: self.displays.len(),
            });
        }
        Ok(())
    }

    fn recompute_ctr(&mut self, arm: usize) {
        self.running_ctr[arm] = if self.displays[arm] == 0 {
            0.0
        } else {
            (self.successes[arm] as f64) / (self.displays[arm] as f64)
        };
    }

    /// Count one display of `arm` and refresh its running CTR.
    pub fn record_display(&mut self, arm: usize) -> Result<(), Error> {
        self.check_arm(arm)?;
        self.displays[arm] += 1;
        self.recompute_ctr(arm);
        Ok(())
    }

    /// Record the reward outcome for a previously displayed `arm`.
    ///
    /// The running CTR is refreshed on misses too, not only on clicks.
    /// A success with no matching display is rejected: accepting it would
    /// push `successes[arm]` past `displays[arm]` and corrupt every rate
    /// derived from the counters.
    pub fn record_reward(&mut self, arm: usize, success: bool) -> Result<(), Error> {
        self.check_arm(arm)?;
        if success {
            if self.successes[arm] >= self.displays[arm] {
                return Err(Error::RewardWithoutDisplay { index: arm });
            }
            self.successes[arm] += 1;
        }
        self.recompute_ctr(arm);
        Ok(())
    }

    /// Overall CTR across all arms: total successes / total displays.
    ///
    /// Returns exactly `0.0` before the first display.
    pub fn overall_ctr(&self) -> f64 {
        let total_displays: u64 = self.displays.iter().sum();
        if total_displays == 0 {
            return 0.0;
        }
        let total_successes: u64 = self.successes.iter().sum();
        (total_successes as f64) / (total_displays as f64)
    }

    /// Total displays across all arms.
    pub fn total_displays(&self) -> u64 {
        self.displays.iter().sum()
    }

    /// Zero all counters, returning to the freshly constructed state.
    ///
    /// Used by the runner between independent trials.
    pub fn reset(&mut self) {
        self.displays.fill(0);
        self.successes.fill(0);
        self.running_ctr.fill(0.0);
    }
}
