//! Resource stock dynamics: extraction, biosphere regeneration, and the
//! per-step stock update.
//!
//! Regeneration scales linearly with the health fraction and is suppressed
//! entirely while the biosphere is in the collapse trap. Regeneration effort
//! costs resources whether or not the trap is active.

use crate::biosphere::in_collapse_trap;
use crate::error::WorldError;
use crate::physics::{
    EXTRACTION_SCALE, PhysicsConfig, RESTORATION_COST, clamp_range, ensure_finite,
};

/// Units extracted for the given effort, never more than `available`.
///
/// # Errors
///
/// Returns [`WorldError::NonFiniteState`] if the scaled effort overflows.
pub fn extract(available: f64, extraction_effort: f64) -> Result<f64, WorldError> {
    ensure_finite(
        "extraction",
        (extraction_effort * EXTRACTION_SCALE).min(available),
    )
}

/// Biosphere-driven regeneration at the given (post-update) health.
///
/// Returns exactly `0.0` while `health < H_CRIT`.
pub fn regenerate(health: f64, physics: &PhysicsConfig) -> f64 {
    if in_collapse_trap(health, physics) {
        return 0.0;
    }
    physics.regen_rate * (health / physics.h_max)
}

/// Resources consumed by spending `regen_effort` on restoration.
pub fn restoration_cost(regen_effort: f64) -> f64 {
    regen_effort * RESTORATION_COST
}

/// Resource stock after one step, clamped to `[0, R_MAX]`.
///
/// # Errors
///
/// Returns [`WorldError::NonFiniteState`] if the unclamped stock overflows.
pub fn next_resources(
    current: f64,
    extracted: f64,
    regeneration: f64,
    regen_effort: f64,
    physics: &PhysicsConfig,
) -> Result<f64, WorldError> {
    let raw = ensure_finite(
        "resources",
        current - extracted + regeneration - restoration_cost(regen_effort),
    )?;
    Ok(clamp_range(raw, physics.r_max))
}
