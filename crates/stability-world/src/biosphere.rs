//! Biosphere health dynamics.
//!
//! Health falls by `extracted * TOXICITY` and rises by
//! `regen_effort * HEALING_SCALE`, then is clamped into `[0, H_MAX]`.
//! A post-update health strictly below `H_CRIT` puts the biosphere in the
//! collapse trap for that step.

use crate::error::WorldError;
use crate::physics::{HEALING_SCALE, PhysicsConfig, clamp_range, ensure_finite};

/// Health lost to extracting `extracted` units.
pub fn damage(extracted: f64, physics: &PhysicsConfig) -> f64 {
    extracted * physics.toxicity
}

/// Health restored by the given regeneration effort.
pub fn healing(regen_effort: f64) -> f64 {
    regen_effort * HEALING_SCALE
}

/// Health after one step of damage and healing, clamped to `[0, H_MAX]`.
///
/// # Errors
///
/// Returns [`WorldError::NonFiniteState`] if the unclamped health overflows.
pub fn next_health(
    current: f64,
    extracted: f64,
    regen_effort: f64,
    physics: &PhysicsConfig,
) -> Result<f64, WorldError> {
    let raw = ensure_finite(
        "health",
        current - damage(extracted, physics) + healing(regen_effort),
    )?;
    Ok(clamp_range(raw, physics.h_max))
}

/// Whether `health` is below the collapse threshold.
pub fn in_collapse_trap(health: f64, physics: &PhysicsConfig) -> bool {
    health < physics.h_crit
}
