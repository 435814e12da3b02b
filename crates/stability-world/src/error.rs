//! Error types for the `stability-world` crate.

/// Errors that can occur while advancing or building the environment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    /// An effort value was `NaN` or infinite.
    #[error("non-finite {which} effort: {value}")]
    NonFiniteEffort {
        /// Which effort was rejected (`extraction` or `regeneration`).
        which: &'static str,
        /// The offending value.
        value: f64,
    },

    /// An intermediate quantity of a step overflowed to `NaN` or infinity.
    #[error("non-finite {quantity} during step: {value}")]
    NonFiniteState {
        /// Which quantity overflowed.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A physics constant is out of its valid domain.
    #[error("invalid physics constant {name}: {value} ({reason})")]
    InvalidConstant {
        /// Field name of the constant.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The initial state lies outside `[0, R_MAX] x [0, H_MAX]`.
    #[error("initial state out of range: resources={resources}, health={health}")]
    InitialStateOutOfRange {
        /// Requested starting resources.
        resources: f64,
        /// Requested starting health.
        health: f64,
    },
}
