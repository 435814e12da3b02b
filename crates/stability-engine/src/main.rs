//! Comparative study binary for the Stability simulation.
//!
//! Runs the greedy and constrained policies against independent environment
//! instances and reports which produced the higher total reward. Passing a
//! policy identifier as the first argument runs that policy alone.
//!
//! ```text
//! stability-engine              # full comparative study
//! stability-engine greedy       # single rollout
//! stability-engine constrained  # single rollout
//! ```
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, stderr)
//! 2. Load configuration from `stability-config.yaml` or `STABILITY_CONFIG`
//! 3. Parse the optional policy argument
//! 4. Run the rollout(s), writing the report to stdout
//! 5. Flush the report

mod error;
mod report;

use std::io;
use std::path::{Path, PathBuf};

use stability_core::config::SimulationConfig;
use stability_core::rollout::run_simulation;
use stability_core::verdict::run_comparison;
use stability_types::PolicyKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::report::TextReporter;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "stability-config.yaml";

/// Environment variable naming an explicit configuration file.
const CONFIG_PATH_VAR: &str = "STABILITY_CONFIG";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, argument parsing, a rollout, or
/// writing the report fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!("stability-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        horizon = config.rollout.horizon,
        resources = config.initial.resources,
        health = config.initial.health,
        h_crit = config.physics.h_crit,
        toxicity = config.physics.toxicity,
        "Configuration loaded"
    );

    // 3. Parse the optional policy argument.
    let policy = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<PolicyKind>())
        .transpose()
        .map_err(EngineError::from)?;

    // 4-5. Run and report.
    run_study(&config, policy)?;

    info!("stability-engine finished");
    Ok(())
}

/// Run either the single requested policy or the full comparison, writing
/// the text report to stdout.
fn run_study(config: &SimulationConfig, policy: Option<PolicyKind>) -> Result<(), EngineError> {
    let mut reporter = TextReporter::new(io::stdout().lock());

    if let Some(policy) = policy {
        let episode = run_simulation(policy, config, &mut reporter)?;
        info!(
            %policy,
            success = episode.success,
            total_reward = episode.total_reward,
            "Single rollout complete"
        );
    } else {
        reporter.study_banner();
        let comparison = run_comparison(config, &mut reporter)?;
        reporter.verdict(&comparison);
    }

    reporter.finish()?;
    Ok(())
}

/// Load the simulation configuration.
///
/// An explicit `STABILITY_CONFIG` path must exist. The default
/// `stability-config.yaml` is optional; defaults are used when it is absent.
fn load_config() -> Result<SimulationConfig, EngineError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
        let path = PathBuf::from(path);
        info!(path = %path.display(), "Loading config from STABILITY_CONFIG");
        return Ok(SimulationConfig::from_file(&path)?);
    }

    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        Ok(SimulationConfig::from_file(config_path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(SimulationConfig::default())
    }
}
