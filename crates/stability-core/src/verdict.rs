//! Comparative study: run both policies and decide which produced more reward.
//!
//! The comparison is strict: the constrained policy wins only if its total
//! reward is greater than the greedy total. A tie goes to greedy.

use serde::Serialize;
use stability_types::{EpisodeResult, PolicyKind};
use tracing::info;

use crate::config::SimulationConfig;
use crate::rollout::{RolloutCallback, RolloutError, run_simulation};

const CONSTRAINED_LINES: &[&str] = &[
    "RESULT: Negentropic Constraint PREVENTS System Collapse.",
    "The Bodhisattva Protocol is mathematically superior.",
];

const STANDARD_LINES: &[&str] = &["RESULT: Standard Model is superior."];

/// Outcome of comparing the two total rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The constrained policy produced strictly more reward.
    ConstrainedSuperior,
    /// The greedy policy produced at least as much reward.
    StandardSuperior,
}

impl Verdict {
    /// Decide the verdict from the two totals.
    pub fn from_rewards(greedy_reward: f64, constrained_reward: f64) -> Self {
        if constrained_reward > greedy_reward {
            Self::ConstrainedSuperior
        } else {
            Self::StandardSuperior
        }
    }

    /// The policy family that won.
    pub const fn winner(self) -> PolicyKind {
        match self {
            Self::ConstrainedSuperior => PolicyKind::Constrained,
            Self::StandardSuperior => PolicyKind::Greedy,
        }
    }

    /// Report lines announcing this verdict.
    pub const fn lines(self) -> &'static [&'static str] {
        match self {
            Self::ConstrainedSuperior => CONSTRAINED_LINES,
            Self::StandardSuperior => STANDARD_LINES,
        }
    }
}

/// Both episodes of a comparative study and their verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// The greedy policy's episode.
    pub greedy: EpisodeResult,
    /// The constrained policy's episode.
    pub constrained: EpisodeResult,
    /// Which policy produced more reward.
    pub verdict: Verdict,
}

impl Comparison {
    /// Build a comparison from two finished episodes.
    pub fn new(greedy: EpisodeResult, constrained: EpisodeResult) -> Self {
        let verdict = Verdict::from_rewards(greedy.total_reward, constrained.total_reward);
        Self {
            greedy,
            constrained,
            verdict,
        }
    }
}

/// Run the greedy policy, then the constrained policy, each on its own
/// environment, and compare their totals.
///
/// # Errors
///
/// Returns [`RolloutError`] if either rollout fails.
pub fn run_comparison(
    config: &SimulationConfig,
    callback: &mut dyn RolloutCallback,
) -> Result<Comparison, RolloutError> {
    let greedy = run_simulation(PolicyKind::Greedy, config, callback)?;
    let constrained = run_simulation(PolicyKind::Constrained, config, callback)?;
    let comparison = Comparison::new(greedy, constrained);

    info!(
        greedy_reward = comparison.greedy.total_reward,
        constrained_reward = comparison.constrained.total_reward,
        winner = %comparison.verdict.winner(),
        "Comparison complete"
    );

    Ok(comparison)
}
