//! Error types for the comparative study binary.
//!
//! [`EngineError`] wraps every failure mode so `main` can propagate with `?`.

use stability_types::PolicyParseError;

/// Top-level error for the study binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: stability_core::config::ConfigError,
    },

    /// A rollout failed.
    #[error("rollout error: {source}")]
    Rollout {
        /// The underlying rollout error.
        #[from]
        source: stability_core::rollout::RolloutError,
    },

    /// The command-line policy identifier was not recognized.
    #[error("argument error: {source}")]
    Policy {
        /// The underlying parse error.
        #[from]
        source: PolicyParseError,
    },

    /// Writing the report failed.
    #[error("report output error: {source}")]
    Report {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
