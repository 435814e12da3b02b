//! Resource and biosphere dynamics for the Stability simulation.
//!
//! This crate models the physical system under study: a single resource
//! stock coupled to a single biosphere-health value. Extraction yields reward
//! but damages health; once health falls below the critical threshold the
//! biosphere stops regenerating resources (the collapse trap).
//!
//! # Modules
//!
//! - [`physics`] -- [`PhysicsConfig`] constants and the shared clamp.
//! - [`resource`] -- Extraction, regeneration, and the resource update.
//! - [`biosphere`] -- Damage, healing, and the collapse-trap check.
//! - [`environment`] -- [`StabilityEnvironment`], the state-transition engine.
//! - [`error`] -- Error types for step validation.

pub mod biosphere;
pub mod environment;
pub mod error;
pub mod physics;
pub mod resource;

// Re-export primary types at crate root.
pub use environment::StabilityEnvironment;
pub use error::WorldError;
pub use physics::{PhysicsConfig, clamp_range};
