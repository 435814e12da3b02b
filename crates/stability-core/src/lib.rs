//! Episode rollout, policy comparison, and configuration for the Stability
//! simulation.
//!
//! This crate drives the environment with a decision rule for a bounded
//! horizon and compares the two policies under study. It performs no I/O of
//! its own; progress reaches the outside world through [`RolloutCallback`].
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `stability-config.yaml` into
//!   strongly-typed structs.
//! - [`rollout`] -- The episode state machine and [`run_simulation`].
//! - [`verdict`] -- Running both policies and deciding which wins.
//!
//! [`RolloutCallback`]: rollout::RolloutCallback
//! [`run_simulation`]: rollout::run_simulation

pub mod config;
pub mod rollout;
pub mod verdict;
