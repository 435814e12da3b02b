//! Decision rule trait and the two fixed policies under study.
//!
//! The rollout driver only ever sees a `&dyn DecisionRule`. Adding a policy
//! means adding a [`PolicyKind`] variant and an implementation here; the
//! driver does not change.

use stability_types::{Action, EnvironmentState, PolicyKind};
use tracing::trace;

/// A source of actions for a single-environment rollout.
pub trait DecisionRule {
    /// The policy this rule implements.
    fn kind(&self) -> PolicyKind;

    /// Choose the efforts for the next step from the current state.
    fn decide(&self, observation: &EnvironmentState) -> Action;
}

/// Always extracts at full effort and never restores.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// The only action this policy emits.
    pub const ACTION: Action = Action::new(1.0, 0.0);

    /// Create the greedy policy.
    pub const fn new() -> Self {
        Self
    }
}

impl DecisionRule for GreedyPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Greedy
    }

    fn decide(&self, _observation: &EnvironmentState) -> Action {
        Self::ACTION
    }
}

/// Throttles extraction and prioritizes healing while health is low.
///
/// Below [`HEALTH_THRESHOLD`](Self::HEALTH_THRESHOLD) it emits
/// [`RECOVERY`](Self::RECOVERY), otherwise [`BALANCED`](Self::BALANCED).
/// The threshold and both effort pairs are fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedPolicy;

impl ConstrainedPolicy {
    /// Health below which the policy switches to recovery.
    pub const HEALTH_THRESHOLD: f64 = 60.0;

    /// Action while health is below the threshold.
    pub const RECOVERY: Action = Action::new(0.2, 0.8);

    /// Action while health is at or above the threshold.
    pub const BALANCED: Action = Action::new(0.5, 0.5);

    /// Create the constrained policy.
    pub const fn new() -> Self {
        Self
    }
}

impl DecisionRule for ConstrainedPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Constrained
    }

    fn decide(&self, observation: &EnvironmentState) -> Action {
        if observation.health < Self::HEALTH_THRESHOLD {
            trace!(health = observation.health, "Recovery mode");
            Self::RECOVERY
        } else {
            Self::BALANCED
        }
    }
}

/// The decision rule for a policy identifier.
pub fn decision_rule(kind: PolicyKind) -> Box<dyn DecisionRule> {
    match kind {
        PolicyKind::Greedy => Box::new(GreedyPolicy::new()),
        PolicyKind::Constrained => Box::new(ConstrainedPolicy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe(resources: f64, health: f64) -> EnvironmentState {
        EnvironmentState::new(resources, health)
    }

    #[test]
    fn greedy_ignores_health() {
        let policy = GreedyPolicy::new();
        for health in [100.0, 59.0, 19.0, 0.0] {
            assert_eq!(policy.decide(&observe(500.0, health)), Action::new(1.0, 0.0));
        }
    }

    #[test]
    fn constrained_recovers_below_threshold() {
        let policy = ConstrainedPolicy::new();
        assert_eq!(policy.decide(&observe(500.0, 58.0)), Action::new(0.2, 0.8));
        assert_eq!(policy.decide(&observe(500.0, 0.0)), Action::new(0.2, 0.8));
    }

    #[test]
    fn constrained_balanced_at_threshold() {
        let policy = ConstrainedPolicy::new();
        assert_eq!(policy.decide(&observe(500.0, 60.0)), Action::new(0.5, 0.5));
        assert_eq!(policy.decide(&observe(500.0, 100.0)), Action::new(0.5, 0.5));
    }

    #[test]
    fn constrained_ignores_resources() {
        let policy = ConstrainedPolicy::new();
        assert_eq!(
            policy.decide(&observe(0.5, 80.0)),
            policy.decide(&observe(999.0, 80.0))
        );
    }

    #[test]
    fn dispatch_matches_kind() {
        for kind in PolicyKind::ALL {
            assert_eq!(decision_rule(kind).kind(), kind);
        }
    }

    #[test]
    fn policies_stay_in_unit_range() {
        for kind in PolicyKind::ALL {
            let rule = decision_rule(kind);
            for health in [0.0, 20.0, 59.9, 60.0, 100.0] {
                let action = rule.decide(&observe(500.0, health));
                assert!((0.0..=1.0).contains(&action.extraction_effort));
                assert!((0.0..=1.0).contains(&action.regen_effort));
            }
        }
    }
}
