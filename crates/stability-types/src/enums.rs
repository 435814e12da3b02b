//! Enumeration types for the Stability simulation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Identifies one of the fixed decision rules under study.
///
/// The set is closed: the rollout driver never branches on this value, it
/// only hands it to the agents crate to obtain a decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Maximal extraction, zero restoration, regardless of health.
    Greedy,
    /// Health-aware throttling ("Bodhisattva" protocol).
    Constrained,
}

impl PolicyKind {
    /// Both policies in the order the comparative study runs them.
    pub const ALL: [Self; 2] = [Self::Greedy, Self::Constrained];

    /// The agent tag printed in run banners.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Greedy => "AGENT_A_GREEDY",
            Self::Constrained => "AGENT_B_BODHISATTVA",
        }
    }
}

impl core::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a policy identifier does not name a known policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy identifier: {0:?} (expected greedy or constrained)")]
pub struct PolicyParseError(pub String);

impl FromStr for PolicyKind {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "agent_a_greedy" => Ok(Self::Greedy),
            "constrained" | "bodhisattva" | "agent_b_bodhisattva" => Ok(Self::Constrained),
            _ => Err(PolicyParseError(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Termination
// ---------------------------------------------------------------------------

/// Why an environment became terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalCause {
    /// Resources reached zero.
    Starvation,
    /// Biosphere health reached zero.
    Ecocide,
}

impl TerminalCause {
    /// Reward deducted on the step that triggers this cause.
    ///
    /// Ecocide is strictly worse than starvation.
    pub const fn penalty(self) -> f64 {
        match self {
            Self::Starvation => 1000.0,
            Self::Ecocide => 5000.0,
        }
    }
}

impl core::fmt::Display for TerminalCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Starvation => write!(f, "starvation"),
            Self::Ecocide => write!(f, "ecocide"),
        }
    }
}

/// Position of a rollout in its episode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    /// Steps remain and the environment is alive.
    Running,
    /// A step reported `done`; the rollout stopped early.
    TerminatedByCollapse,
    /// Every step of the horizon ran without termination.
    CompletedHorizon,
}

impl EpisodeStatus {
    /// Whether the rollout has stopped.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_and_tagged_names() {
        assert_eq!("greedy".parse::<PolicyKind>(), Ok(PolicyKind::Greedy));
        assert_eq!("AGENT_A_GREEDY".parse::<PolicyKind>(), Ok(PolicyKind::Greedy));
        assert_eq!(" Constrained ".parse::<PolicyKind>(), Ok(PolicyKind::Constrained));
        assert_eq!("bodhisattva".parse::<PolicyKind>(), Ok(PolicyKind::Constrained));
        assert_eq!(
            "AGENT_B_BODHISATTVA".parse::<PolicyKind>(),
            Ok(PolicyKind::Constrained)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "random".parse::<PolicyKind>();
        assert_eq!(err, Err(PolicyParseError(String::from("random"))));

        assert!("a".parse::<PolicyKind>().is_err());
        assert!("b".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn display_uses_agent_tag() {
        assert_eq!(PolicyKind::Greedy.to_string(), "AGENT_A_GREEDY");
        assert_eq!(PolicyKind::Constrained.to_string(), "AGENT_B_BODHISATTVA");
    }

    #[test]
    fn ecocide_penalty_exceeds_starvation() {
        assert!(TerminalCause::Ecocide.penalty() > TerminalCause::Starvation.penalty());
    }

    #[test]
    fn running_is_not_terminal() {
        assert!(!EpisodeStatus::Running.is_terminal());
        assert!(EpisodeStatus::TerminatedByCollapse.is_terminal());
        assert!(EpisodeStatus::CompletedHorizon.is_terminal());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&EpisodeStatus::CompletedHorizon).ok();
        assert_eq!(json.as_deref(), Some("\"completed_horizon\""));
    }
}
