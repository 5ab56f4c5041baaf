// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface that all automated players implement
//
// Agents receive a `PlayerView` (not raw GameState), so they never see
// the order of the face-down deck. Every agent must return one of
// `view.legal_actions`; the runner treats anything else as a bug.
// ═══════════════════════════════════════════════════════════════════════

use crate::{HeuristicAgent, RandomAgent};
use scoundrel_engine::engine::Action;
use scoundrel_engine::visibility::PlayerView;
use serde::{Deserialize, Serialize};

pub trait Agent: Send {
    /// Human-readable name for this agent (e.g., "Random").
    fn name(&self) -> &str;

    /// Pick the next action. Only called while the run is in progress.
    fn decide(&mut self, view: &PlayerView) -> Action;
}

/// The built-in agents, selectable by name from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Heuristic,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::Random, AgentKind::Heuristic];

    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
            AgentKind::Heuristic => Box::new(HeuristicAgent::new(seed)),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Random => write!(f, "random"),
            AgentKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "heuristic" => Ok(AgentKind::Heuristic),
            other => Err(format!("unknown agent '{}' (expected random or heuristic)", other)),
        }
    }
}
