//! End-to-end scenarios for the comparative study.
//!
//! These run the real environment and both decision rules through the
//! rollout driver with the default configuration.

#![allow(clippy::unwrap_used)]

use stability_core::config::SimulationConfig;
use stability_core::rollout::{NoOpCallback, RolloutCallback, run_simulation};
use stability_core::verdict::{Verdict, run_comparison};
use stability_types::{EpisodeResult, EpisodeStatus, PolicyKind, StepResult, TerminalCause};
use stability_world::StabilityEnvironment;

/// Checks the clamp and trap invariants on every step it observes.
#[derive(Default)]
struct InvariantCheck {
    steps: u32,
    trapped_steps: u32,
    violations: Vec<String>,
}

impl RolloutCallback for InvariantCheck {
    fn on_step(&mut self, step: u32, result: &StepResult) {
        self.steps = self.steps.saturating_add(1);
        let state = result.state;
        if !(0.0..=1000.0).contains(&state.resources) {
            self.violations
                .push(format!("step {step}: resources {}", state.resources));
        }
        if !(0.0..=100.0).contains(&state.health) {
            self.violations
                .push(format!("step {step}: health {}", state.health));
        }
        if result.collapse_trap {
            self.trapped_steps = self.trapped_steps.saturating_add(1);
            if result.regeneration.abs() > f64::EPSILON {
                self.violations
                    .push(format!("step {step}: regeneration {} in trap", result.regeneration));
            }
        }
    }
}

fn run(policy: PolicyKind) -> EpisodeResult {
    run_simulation(policy, &SimulationConfig::default(), &mut NoOpCallback).unwrap()
}

#[test]
fn greedy_drives_health_into_trap_then_ecocide() {
    let mut check = InvariantCheck::default();
    let episode =
        run_simulation(PolicyKind::Greedy, &SimulationConfig::default(), &mut check).unwrap();

    assert!(check.violations.is_empty(), "{:?}", check.violations);
    assert!(check.trapped_steps > 0);
    assert_eq!(episode.status, EpisodeStatus::TerminatedByCollapse);
    assert_eq!(episode.cause, Some(TerminalCause::Ecocide));
    assert_eq!(episode.final_step, 8);
    // Nine steps of 10 units, then the ecocide penalty.
    assert!((episode.total_reward - (-4910.0)).abs() < 1e-6);
    assert_eq!(episode.truncated_reward(), -4910);
}

#[test]
fn constrained_completes_full_horizon() {
    let mut check = InvariantCheck::default();
    let episode =
        run_simulation(PolicyKind::Constrained, &SimulationConfig::default(), &mut check).unwrap();

    assert!(check.violations.is_empty(), "{:?}", check.violations);
    assert_eq!(check.steps, 500);
    assert_eq!(check.trapped_steps, 0);
    assert!(episode.success);
    assert!(episode.final_state.alive);
    assert_eq!(episode.final_step, 500);
    assert_eq!(episode.truncated_reward(), 1817);
}

#[test]
fn constrained_settles_at_low_stock_and_healthy_biosphere() {
    let episode = run(PolicyKind::Constrained);
    // Stock runs down until extraction is limited by what regenerates.
    let last = episode.resource_history.last().copied().unwrap();
    assert!(last > 0.0 && last < 10.0);
    assert!(episode.final_state.health > 60.0);
}

#[test]
fn comparison_picks_constrained() {
    let comparison = run_comparison(&SimulationConfig::default(), &mut NoOpCallback).unwrap();
    assert_eq!(comparison.verdict, Verdict::ConstrainedSuperior);
    assert!(comparison.constrained.total_reward > comparison.greedy.total_reward);
}

#[test]
fn rollouts_are_deterministic() {
    assert_eq!(run(PolicyKind::Greedy), run(PolicyKind::Greedy));
    assert_eq!(run(PolicyKind::Constrained), run(PolicyKind::Constrained));
}

#[test]
fn terminated_environment_stays_terminated() {
    let mut env = StabilityEnvironment::new();
    let mut last = None;
    for _ in 0..20 {
        let result = env.step(1.0, 0.0).unwrap();
        if result.done {
            last = Some(result);
            break;
        }
    }
    let terminal = last.unwrap();
    assert!(terminal.reward < -4000.0);

    let after = env.step(0.0, 1.0).unwrap();
    assert!(after.done);
    assert!(after.reward.abs() < f64::EPSILON);
    assert_eq!(after.state, terminal.state);
}

#[test]
fn yaml_overrides_change_the_outcome() {
    // With no toxicity, greedy never damages the biosphere and survives.
    let config = SimulationConfig::parse("physics:\n  toxicity: 0.0\nrollout:\n  horizon: 40\n")
        .unwrap();
    let episode = run_simulation(PolicyKind::Greedy, &config, &mut NoOpCallback).unwrap();
    assert!(episode.success);
    assert!((episode.total_reward - 400.0).abs() < 1e-6);
}
