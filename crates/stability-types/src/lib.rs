//! Shared type definitions for the Stability simulation.
//!
//! This crate is the single source of truth for the data that flows between
//! the environment, the decision rules, and the rollout driver. It holds no
//! behavior beyond small constructors and conversions.
//!
//! # Modules
//!
//! - [`enums`] -- Policy identifiers, terminal causes, and episode status.
//! - [`structs`] -- Environment state, actions, per-step and per-episode results.

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EpisodeStatus, PolicyKind, PolicyParseError, TerminalCause};
pub use structs::{Action, EnvironmentState, EpisodeResult, StepResult};
