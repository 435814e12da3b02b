//! Physics constants for the environment and the clamp that enforces the
//! state invariants.
//!
//! The five tunables live in [`PhysicsConfig`]; they are fixed for the life
//! of an environment. The per-step coefficients that shape extraction,
//! healing, and restoration cost are crate constants, not configuration.

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Resource units extracted per unit of extraction effort.
pub const EXTRACTION_SCALE: f64 = 10.0;

/// Health restored per unit of regeneration effort.
pub const HEALING_SCALE: f64 = 8.0;

/// Resource units consumed per unit of regeneration effort.
pub const RESTORATION_COST: f64 = 2.0;

/// Clamp `value` into `[0, upper]`.
///
/// Every mutation of resources or health goes through this function. A `NaN`
/// input collapses to `0.0`.
pub fn clamp_range(value: f64, upper: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(upper)
}

/// Pass `value` through if finite, otherwise report which quantity overflowed.
///
/// # Errors
///
/// Returns [`WorldError::NonFiniteState`] if `value` is `NaN` or infinite.
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, WorldError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorldError::NonFiniteState { quantity, value })
    }
}

/// Constants of the simulated physical system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Maximum biosphere health (`H_MAX`).
    #[serde(default = "default_h_max")]
    pub h_max: f64,

    /// Health below which biosphere regeneration stops (`H_CRIT`).
    #[serde(default = "default_h_crit")]
    pub h_crit: f64,

    /// Maximum resource stock (`R_MAX`).
    #[serde(default = "default_r_max")]
    pub r_max: f64,

    /// Regeneration per step at full health (`REGEN_RATE`).
    #[serde(default = "default_regen_rate")]
    pub regen_rate: f64,

    /// Health damage per extracted unit (`TOXICITY`).
    #[serde(default = "default_toxicity")]
    pub toxicity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            h_max: default_h_max(),
            h_crit: default_h_crit(),
            r_max: default_r_max(),
            regen_rate: default_regen_rate(),
            toxicity: default_toxicity(),
        }
    }
}

impl PhysicsConfig {
    /// Check that every constant is finite and the thresholds are ordered.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConstant`] naming the first bad field.
    pub fn validate(&self) -> Result<(), WorldError> {
        let fields = [
            ("h_max", self.h_max),
            ("h_crit", self.h_crit),
            ("r_max", self.r_max),
            ("regen_rate", self.regen_rate),
            ("toxicity", self.toxicity),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(WorldError::InvalidConstant {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(WorldError::InvalidConstant {
                    name,
                    value,
                    reason: "must be non-negative",
                });
            }
        }

        if self.h_max <= 0.0 {
            return Err(WorldError::InvalidConstant {
                name: "h_max",
                value: self.h_max,
                reason: "must be positive",
            });
        }

        if self.h_crit > self.h_max {
            return Err(WorldError::InvalidConstant {
                name: "h_crit",
                value: self.h_crit,
                reason: "must not exceed h_max",
            });
        }

        Ok(())
    }

    /// Whether `(resources, health)` satisfies the state invariants.
    pub fn contains(&self, resources: f64, health: f64) -> bool {
        (0.0..=self.r_max).contains(&resources) && (0.0..=self.h_max).contains(&health)
    }
}

const fn default_h_max() -> f64 {
    100.0
}

const fn default_h_crit() -> f64 {
    20.0
}

const fn default_r_max() -> f64 {
    1000.0
}

const fn default_regen_rate() -> f64 {
    5.0
}

const fn default_toxicity() -> f64 {
    1.2
}
