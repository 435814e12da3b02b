//! Decision rules for the Stability simulation.
//!
//! Each policy is a pure function of the observed environment state. Both
//! shipped policies read only `health`; `resources` is observed but ignored.
//!
//! # Modules
//!
//! - [`decision`] -- [`DecisionRule`] trait, [`GreedyPolicy`],
//!   [`ConstrainedPolicy`], and [`decision_rule`] dispatch from a
//!   [`PolicyKind`].
//!
//! [`DecisionRule`]: decision::DecisionRule
//! [`GreedyPolicy`]: decision::GreedyPolicy
//! [`ConstrainedPolicy`]: decision::ConstrainedPolicy
//! [`decision_rule`]: decision::decision_rule
//! [`PolicyKind`]: stability_types::PolicyKind

pub mod decision;

pub use decision::{ConstrainedPolicy, DecisionRule, GreedyPolicy, decision_rule};
