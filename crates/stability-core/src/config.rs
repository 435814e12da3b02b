//! Configuration loading and typed config structures for the Stability
//! simulation.
//!
//! The configuration lives in `stability-config.yaml`. Every field has a
//! default equal to the standard study parameters, so an empty or missing
//! file reproduces the reference run exactly.

use std::path::Path;

use serde::Deserialize;
use stability_types::EnvironmentState;
use stability_world::{PhysicsConfig, StabilityEnvironment, WorldError};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// Physics constants or the initial state are out of range.
    #[error("invalid world configuration: {source}")]
    World {
        /// The underlying validation error.
        #[from]
        source: WorldError,
    },

    /// The rollout horizon must be at least one step.
    #[error("rollout horizon must be positive")]
    ZeroHorizon,
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `stability-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Physical constants of the environment.
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// Starting state of every environment instance.
    #[serde(default)]
    pub initial: InitialStateConfig,

    /// Rollout bounds.
    #[serde(default)]
    pub rollout: RolloutConfig,
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or a
    /// validation error from [`validate`](Self::validate).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or a
    /// validation error from [`validate`](Self::validate).
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a valid environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::World`] for bad constants or start state, and
    /// [`ConfigError::ZeroHorizon`] for an empty horizon.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rollout.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        self.build_environment()?;
        Ok(())
    }

    /// A fresh environment with this configuration's physics and start state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the physics or start state are invalid.
    pub fn build_environment(&self) -> Result<StabilityEnvironment, WorldError> {
        StabilityEnvironment::with_physics(
            self.physics,
            self.initial.resources,
            self.initial.health,
        )
    }
}

/// Starting state configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct InitialStateConfig {
    /// Starting resource stock.
    #[serde(default = "default_initial_resources")]
    pub resources: f64,

    /// Starting biosphere health.
    #[serde(default = "default_initial_health")]
    pub health: f64,
}

impl Default for InitialStateConfig {
    fn default() -> Self {
        Self {
            resources: default_initial_resources(),
            health: default_initial_health(),
        }
    }
}

/// Rollout bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RolloutConfig {
    /// Maximum number of steps per episode.
    #[serde(default = "default_horizon")]
    pub horizon: u32,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
        }
    }
}

const fn default_initial_resources() -> f64 {
    EnvironmentState::INITIAL_RESOURCES
}

const fn default_initial_health() -> f64 {
    EnvironmentState::INITIAL_HEALTH
}

const fn default_horizon() -> u32 {
    crate::rollout::DEFAULT_HORIZON
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SimulationConfig::parse("").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.rollout.horizon, 500);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "
physics:
  toxicity: 1.5
rollout:
  horizon: 50
";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert!((config.physics.toxicity - 1.5).abs() < f64::EPSILON);
        assert!((config.physics.h_crit - 20.0).abs() < f64::EPSILON);
        assert!((config.initial.resources - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.rollout.horizon, 50);
    }

    #[test]
    fn zero_horizon_rejected() {
        let err = SimulationConfig::parse("rollout:\n  horizon: 0\n");
        assert!(matches!(err, Err(ConfigError::ZeroHorizon)));
    }

    #[test]
    fn initial_state_out_of_range_rejected() {
        let err = SimulationConfig::parse("initial:\n  health: 150.0\n");
        assert!(matches!(
            err,
            Err(ConfigError::World {
                source: WorldError::InitialStateOutOfRange { .. }
            })
        ));
    }

    #[test]
    fn malformed_yaml_rejected() {
        let err = SimulationConfig::parse("physics: [not, a, map");
        assert!(matches!(err, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_file(Path::new("/nonexistent/stability-config.yaml"));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn built_environment_uses_initial_state() {
        let config = SimulationConfig {
            initial: InitialStateConfig {
                resources: 250.0,
                health: 75.0,
            },
            ..SimulationConfig::default()
        };
        let env = config.build_environment().unwrap();
        assert!((env.state().resources - 250.0).abs() < f64::EPSILON);
        assert!((env.state().health - 75.0).abs() < f64::EPSILON);
    }
}
