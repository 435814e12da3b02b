//! The state-transition engine.
//!
//! [`StabilityEnvironment`] owns an [`EnvironmentState`] and advances it one
//! step at a time. The order of operations inside [`step`] is fixed:
//!
//! 1. Terminal environments return a no-op result
//! 2. Extraction, capped at the current stock
//! 3. Health update (damage, healing, clamp)
//! 4. Collapse-trap check on the new health
//! 5. Resource update (extraction, regeneration, restoration cost, clamp)
//! 6. Reward = extracted units
//! 7. Termination: starvation first, otherwise ecocide
//! 8. State overwrite
//!
//! [`step`]: StabilityEnvironment::step

use stability_types::{Action, EnvironmentState, StepResult, TerminalCause};
use tracing::{debug, info};

use crate::error::WorldError;
use crate::physics::PhysicsConfig;
use crate::{biosphere, resource};

/// A single resource stock coupled to a single biosphere.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityEnvironment {
    physics: PhysicsConfig,
    state: EnvironmentState,
}

impl Default for StabilityEnvironment {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            state: EnvironmentState::default(),
        }
    }
}

impl StabilityEnvironment {
    /// Create an environment with default physics and the standard start
    /// state (`resources = 500`, `health = 100`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment with explicit physics and starting state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConstant`] if `physics` fails validation,
    /// or [`WorldError::InitialStateOutOfRange`] if the start state violates
    /// the clamp invariants.
    pub fn with_physics(
        physics: PhysicsConfig,
        resources: f64,
        health: f64,
    ) -> Result<Self, WorldError> {
        physics.validate()?;
        if !physics.contains(resources, health) {
            return Err(WorldError::InitialStateOutOfRange { resources, health });
        }
        Ok(Self {
            physics,
            state: EnvironmentState::new(resources, health),
        })
    }

    /// Current state.
    pub const fn state(&self) -> EnvironmentState {
        self.state
    }

    /// Physics constants this environment was built with.
    pub const fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Whether the environment can still change.
    pub const fn is_alive(&self) -> bool {
        self.state.alive
    }

    /// Advance one step with the efforts carried by `action`.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn apply(&mut self, action: Action) -> Result<StepResult, WorldError> {
        self.step(action.extraction_effort, action.regen_effort)
    }

    /// Advance one step.
    ///
    /// Efforts are trusted to be non-negative; values outside `[0, 1]` are
    /// not rejected and are only bounded by the state clamps. Calling this on
    /// a terminal environment returns [`StepResult::terminal_noop`] and
    /// leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NonFiniteEffort`] if either effort is `NaN` or
    /// infinite, or [`WorldError::NonFiniteState`] if finite efforts still
    /// overflow an intermediate quantity. The state is not modified in either
    /// case.
    pub fn step(
        &mut self,
        extraction_effort: f64,
        regen_effort: f64,
    ) -> Result<StepResult, WorldError> {
        if !self.state.alive {
            return Ok(StepResult::terminal_noop(self.state));
        }

        check_effort("extraction", extraction_effort)?;
        check_effort("regeneration", regen_effort)?;

        let physics = &self.physics;
        let current = self.state;

        let extracted = resource::extract(current.resources, extraction_effort)?;

        let new_health =
            biosphere::next_health(current.health, extracted, regen_effort, physics)?;

        let collapse_trap = biosphere::in_collapse_trap(new_health, physics);
        let regeneration = resource::regenerate(new_health, physics);
        if collapse_trap {
            debug!(health = new_health, "Biosphere in collapse trap, regeneration suppressed");
        }

        let new_resources = resource::next_resources(
            current.resources,
            extracted,
            regeneration,
            regen_effort,
            physics,
        )?;

        let mut reward = extracted;
        let cause = if new_resources <= 0.0 {
            Some(TerminalCause::Starvation)
        } else if new_health <= 0.0 {
            Some(TerminalCause::Ecocide)
        } else {
            None
        };

        if let Some(cause) = cause {
            reward -= cause.penalty();
            info!(
                %cause,
                resources = new_resources,
                health = new_health,
                "Environment reached a terminal state"
            );
        }

        self.state = EnvironmentState {
            resources: new_resources,
            health: new_health,
            alive: cause.is_none(),
        };

        Ok(StepResult {
            state: self.state,
            reward,
            done: cause.is_some(),
            extracted,
            regeneration,
            collapse_trap,
            cause,
        })
    }
}

fn check_effort(which: &'static str, value: f64) -> Result<(), WorldError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WorldError::NonFiniteEffort { which, value })
    }
}
