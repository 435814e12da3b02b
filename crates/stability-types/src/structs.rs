//! Core entity structs for the Stability simulation.
//!
//! [`EnvironmentState`] is the only persistent entity; everything else is a
//! transient record produced by a step or a rollout.

use serde::{Deserialize, Serialize};

use crate::enums::{EpisodeStatus, PolicyKind, TerminalCause};

/// The two-dimensional state of the environment plus its liveness flag.
///
/// Invariants after every update: `0 <= resources <= R_MAX` and
/// `0 <= health <= H_MAX`. Once `alive` is false it never becomes true again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    /// Extractable resource stock.
    pub resources: f64,
    /// Biosphere health.
    pub health: f64,
    /// False once a terminal condition has been reached.
    pub alive: bool,
}

impl EnvironmentState {
    /// Starting resource stock of a fresh environment.
    pub const INITIAL_RESOURCES: f64 = 500.0;
    /// Starting health of a fresh environment.
    pub const INITIAL_HEALTH: f64 = 100.0;

    /// Create a live state with the given stock and health.
    pub const fn new(resources: f64, health: f64) -> Self {
        Self {
            resources,
            health,
            alive: true,
        }
    }
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self::new(Self::INITIAL_RESOURCES, Self::INITIAL_HEALTH)
    }
}

/// Efforts chosen by a policy for one step.
///
/// Both efforts are nominally in `[0, 1]`. The environment does not enforce
/// the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Extraction intensity.
    pub extraction_effort: f64,
    /// Restoration intensity.
    pub regen_effort: f64,
}

impl Action {
    /// Build an action from its two efforts.
    pub const fn new(extraction_effort: f64, regen_effort: f64) -> Self {
        Self {
            extraction_effort,
            regen_effort,
        }
    }
}

/// Outcome of a single call to the environment's step operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// State after the step (unchanged when the environment was already dead).
    pub state: EnvironmentState,
    /// Extraction yield minus any terminal penalty.
    pub reward: f64,
    /// Whether the environment is terminal after this step.
    pub done: bool,
    /// Resource units actually extracted.
    pub extracted: f64,
    /// Biosphere-driven regeneration added this step.
    pub regeneration: f64,
    /// Post-update health fell below the critical threshold.
    pub collapse_trap: bool,
    /// Set on the step that made the environment terminal.
    pub cause: Option<TerminalCause>,
}

impl StepResult {
    /// The result returned for any step on an already-terminal environment.
    pub const fn terminal_noop(state: EnvironmentState) -> Self {
        Self {
            state,
            reward: 0.0,
            done: true,
            extracted: 0.0,
            regeneration: 0.0,
            collapse_trap: false,
            cause: None,
        }
    }
}

/// Record of one complete rollout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Policy that produced the episode.
    pub policy: PolicyKind,
    /// Resources after each executed step, in step order.
    pub resource_history: Vec<f64>,
    /// Sum of per-step rewards.
    pub total_reward: f64,
    /// Index of the terminating step on collapse, or the horizon on completion.
    pub final_step: u32,
    /// Terminal status of the episode state machine.
    pub status: EpisodeStatus,
    /// Why the environment collapsed, if it did.
    pub cause: Option<TerminalCause>,
    /// Environment state when the rollout stopped.
    pub final_state: EnvironmentState,
    /// True iff the horizon completed without collapse.
    pub success: bool,
}

impl EpisodeResult {
    /// Total reward truncated toward zero, as printed in reports.
    pub fn truncated_reward(&self) -> i64 {
        // Rewards are bounded by the horizon times the per-step yield.
        #[allow(clippy::cast_possible_truncation)]
        let truncated = self.total_reward.trunc() as i64;
        truncated
    }

    /// Number of steps actually executed.
    pub fn steps_executed(&self) -> usize {
        self.resource_history.len()
    }
}
