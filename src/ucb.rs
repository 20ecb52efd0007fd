//! UCB1 and UCB1-Tuned policies.
//!
//! Both are deterministic: no internal RNG, so identical stats always yield
//! the identical choice. Both share the cold-start rule — any arm that has
//! never been displayed is played immediately, lowest index first — which
//! guarantees `total displays >= num_arms` before any confidence bound is
//! computed, keeping `ln(N)` well-defined.

use crate::{ArmStats, Error, Strategy};

/// First arm with zero displays, lowest index first.
fn cold_start_arm(stats: &ArmStats) -> Option<usize> {
    stats.displays().iter().position(|&d| d == 0)
}

/// Strict-`>` argmax over per-arm scores, running best starting at
/// `(arm 0, 0.0)` so ties keep the first index seen.
fn argmax_strict<F>(num_arms: usize, mut score: F) -> usize
where
    F: FnMut(usize) -> f64,
{
    let mut best_arm = 0usize;
    let mut best_score = 0.0f64;
    for arm in 0..num_arms {
        let s = score(arm);
        if s > best_score {
            best_score = s;
            best_arm = arm;
        }
    }
    best_arm
}

/// UCB1: mean plus a `sqrt(2 ln N / n_i)` exploration bonus.
#[derive(Debug, Clone)]
pub struct Ucb1 {
    stats: ArmStats,
}

impl Ucb1 {
    pub fn new(num_arms: usize) -> Result<Self, Error> {
        if num_arms == 0 {
            return Err(Error::NoArms);
        }
        Ok(Self {
            stats: ArmStats::new(num_arms),
        })
    }
}

impl Strategy for Ucb1 {
    fn select_arm(&mut self) -> usize {
        if let Some(arm) = cold_start_arm(&self.stats) {
            return arm;
        }
        let displays = self.stats.displays();
        let successes = self.stats.successes();
        // Cold start above guarantees total >= num_arms >= 1.
        let log_total = (self.stats.total_displays() as f64).ln();
        argmax_strict(self.stats.num_arms(), |arm| {
            let d = displays[arm] as f64;
            let mean = successes[arm] as f64 / d;
            mean + (2.0 * log_total / d).sqrt()
        })
    }

    fn stats(&self) -> &ArmStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut ArmStats {
        &mut self.stats
    }

    fn name(&self) -> &'static str {
        "UCB1"
    }
}

/// UCB1-Tuned: the exploration bonus is capped by an empirical-variance
/// bound, which tightens it for low-variance arms.
#[derive(Debug, Clone)]
pub struct Ucb1Tuned {
    stats: ArmStats,
}

impl Ucb1Tuned {
    pub fn new(num_arms: usize) -> Result<Self, Error> {
        if num_arms == 0 {
            return Err(Error::NoArms);
        }
        Ok(Self {
            stats: ArmStats::new(num_arms),
        })
    }
}

impl Strategy for Ucb1Tuned {
    fn select_arm(&mut self) -> usize {
        if let Some(arm) = cold_start_arm(&self.stats) {
            return arm;
        }
        let displays = self.stats.displays();
        let successes = self.stats.successes();
        let log_total = (self.stats.total_displays() as f64).ln();
        argmax_strict(self.stats.num_arms(), |arm| {
            let d = displays[arm] as f64;
            let s = successes[arm] as f64;
            let mean = s / d;
            let variance_bound = (s * (d - s)) / (d * d) + (2.0 * log_total / d).sqrt();
            mean + (log_total / d).sqrt().min(variance_bound)
        })
    }

    fn stats(&self) -> &ArmStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut ArmStats {
        &mut self.stats
    }

    fn name(&self) -> &'static str {
        "UCB1Tuned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive_cold_start<S: Strategy>(s: &mut S) {
        let order: Vec<usize> = (0..3)
            .map(|_| {
                let arm = s.display().unwrap();
                s.reward(arm, false).unwrap();
                arm
            })
            .collect();
        assert_eq!(order, vec![0, 1, 2], "cold start must run 0,1,2 in order");
    }

    #[test]
    fn ucb1_cold_start_priority_is_index_order() {
        let mut s = Ucb1::new(3).unwrap();
        drive_cold_start(&mut s);
    }

    #[test]
    fn ucb1_tuned_cold_start_priority_is_index_order() {
        let mut s = Ucb1Tuned::new(3).unwrap();
        drive_cold_start(&mut s);
    }

    #[test]
    fn ucb1_converges_to_the_better_arm() {
        let mut s = Ucb1::new(2).unwrap();
        // Deterministic feedback: arm 1 always clicks, arm 0 never.
        let mut picks_of_1 = 0;
        for _ in 0..500 {
            let arm = s.display().unwrap();
            s.reward(arm, arm == 1).unwrap();
            if arm == 1 {
                picks_of_1 += 1;
            }
        }
        assert!(picks_of_1 > 400, "arm 1 picked only {picks_of_1}/500 times");
    }

    #[test]
    fn ucb1_tuned_converges_to_the_better_arm() {
        let mut s = Ucb1Tuned::new(2).unwrap();
        let mut picks_of_1 = 0;
        for _ in 0..500 {
            let arm = s.display().unwrap();
            s.reward(arm, arm == 1).unwrap();
            if arm == 1 {
                picks_of_1 += 1;
            }
        }
        assert!(picks_of_1 > 400, "arm 1 picked only {picks_of_1}/500 times");
    }

    #[test]
    fn identical_stats_yield_identical_choice() {
        // Deterministic policies: two instances driven identically agree.
        let mut a = Ucb1::new(3).unwrap();
        let mut b = Ucb1::new(3).unwrap();
        for step in 0..100 {
            let arm_a = a.display().unwrap();
            let arm_b = b.display().unwrap();
            assert_eq!(arm_a, arm_b);
            let clicked = step % 3 == 0;
            a.reward(arm_a, clicked).unwrap();
            b.reward(arm_b, clicked).unwrap();
        }
    }

    #[test]
    fn zero_arms_is_rejected() {
        assert_eq!(Ucb1::new(0).unwrap_err(), Error::NoArms);
        assert_eq!(Ucb1Tuned::new(0).unwrap_err(), Error::NoArms);
    }
}
