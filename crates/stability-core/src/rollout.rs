//! Episode rollout driver.
//!
//! [`run_episode`] walks the episode state machine:
//!
//! ```text
//! Running --(step reports done)--------> TerminatedByCollapse
//! Running --(horizon steps, never done)-> CompletedHorizon
//! ```
//!
//! Each step reads the environment state, asks the decision rule for an
//! action, applies it, accumulates the reward, and records the resulting
//! resource stock. [`run_simulation`] is the entry point for one policy: it
//! builds a fresh environment per call, so no state is shared between runs.

use stability_agents::{DecisionRule, decision_rule};
use stability_types::{EpisodeResult, EpisodeStatus, PolicyKind, StepResult};
use stability_world::{StabilityEnvironment, WorldError};
use tracing::{debug, info};

use crate::config::SimulationConfig;

/// Steps per episode absent earlier termination.
pub const DEFAULT_HORIZON: u32 = 500;

/// Errors that can occur during a rollout.
#[derive(Debug, thiserror::Error)]
pub enum RolloutError {
    /// The environment rejected a step or could not be built.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

/// Observer of rollout progress.
///
/// All methods default to doing nothing.
pub trait RolloutCallback {
    /// Called once before the first step.
    fn on_start(&mut self, _policy: PolicyKind, _horizon: u32) {}

    /// Called after every executed step, including the terminating one.
    fn on_step(&mut self, _step: u32, _result: &StepResult) {}

    /// Called once with the finished episode.
    fn on_episode_end(&mut self, _result: &EpisodeResult) {}
}

/// A callback that ignores everything.
pub struct NoOpCallback;

impl RolloutCallback for NoOpCallback {}

/// Run one episode of `rule` against `env` for at most `horizon` steps.
///
/// # Errors
///
/// Returns [`RolloutError::World`] if the environment rejects a step.
pub fn run_episode(
    env: &mut StabilityEnvironment,
    rule: &dyn DecisionRule,
    horizon: u32,
    callback: &mut dyn RolloutCallback,
) -> Result<EpisodeResult, RolloutError> {
    let policy = rule.kind();
    let mut status = EpisodeStatus::Running;
    let mut final_step = horizon;
    let mut cause = None;
    let mut total_reward = 0.0_f64;
    let mut resource_history = Vec::with_capacity(usize::try_from(horizon).unwrap_or(0));

    info!(%policy, horizon, "Rollout starting");
    callback.on_start(policy, horizon);

    for step in 0..horizon {
        let observation = env.state();
        let action = rule.decide(&observation);
        let result = env.apply(action)?;

        total_reward += result.reward;
        resource_history.push(result.state.resources);

        debug!(
            step,
            extraction = action.extraction_effort,
            regen = action.regen_effort,
            resources = result.state.resources,
            health = result.state.health,
            reward = result.reward,
            "Step complete"
        );
        callback.on_step(step, &result);

        if result.done {
            status = EpisodeStatus::TerminatedByCollapse;
            final_step = step;
            cause = result.cause;
            break;
        }
    }

    if status == EpisodeStatus::Running {
        status = EpisodeStatus::CompletedHorizon;
    }

    let episode = EpisodeResult {
        policy,
        resource_history,
        total_reward,
        final_step,
        status,
        cause,
        final_state: env.state(),
        success: status == EpisodeStatus::CompletedHorizon,
    };

    info!(
        %policy,
        ?status,
        final_step,
        total_reward,
        "Rollout finished"
    );
    callback.on_episode_end(&episode);

    Ok(episode)
}

/// Run one episode of `policy` on a freshly built environment.
///
/// # Errors
///
/// Returns [`RolloutError::World`] if the configured environment is invalid
/// or rejects a step.
pub fn run_simulation(
    policy: PolicyKind,
    config: &SimulationConfig,
    callback: &mut dyn RolloutCallback,
) -> Result<EpisodeResult, RolloutError> {
    let mut env = config.build_environment()?;
    let rule = decision_rule(policy);
    run_episode(&mut env, rule.as_ref(), config.rollout.horizon, callback)
}
