// ═══════════════════════════════════════════════════════════════════════
// Game Runner — plays one complete headless run with an agent
// ═══════════════════════════════════════════════════════════════════════

use scoundrel_agents::Agent;
use scoundrel_engine::engine::{apply_action, Action};
use scoundrel_engine::errors::Rejection;
use scoundrel_engine::random::SeededRandom;
use scoundrel_engine::setup::initialize;
use scoundrel_engine::types::*;
use scoundrel_engine::visibility::player_view;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("run with seed {seed} exceeded {limit} decisions without finishing")]
    DecisionLimit { seed: u64, limit: usize },
    #[error("agent {agent} chose {action}, which the engine rejected: {reason}")]
    IllegalAction { agent: String, action: Action, reason: Rejection },
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub seed: u64,
    pub agent_name: String,
    pub outcome: RunOutcome,
    pub final_health: i32,
    pub decisions: usize,
    pub flees: usize,
    pub resolved: usize,
    pub final_state: GameState,
}

/// Run a complete game. The deck is shuffled from `seed`; the agent keeps
/// its own generator.
pub fn run_game(
    agent: &mut dyn Agent,
    seed: u64,
    max_decisions: usize, // safety limit for misbehaving agents
) -> Result<GameResult, SimError> {
    let state = initialize(&mut SeededRandom::new(seed));
    run_from_state(agent, state, seed, max_decisions)
}

/// Play `state` out to the end. `seed` only labels the result and logs.
pub fn run_from_state(
    agent: &mut dyn Agent,
    mut state: GameState,
    seed: u64,
    max_decisions: usize,
) -> Result<GameResult, SimError> {
    let mut decisions = 0;
    let mut flees = 0;

    while !state.is_over() {
        if decisions >= max_decisions {
            return Err(SimError::DecisionLimit { seed, limit: max_decisions });
        }

        let view = player_view(&state);
        let action = agent.decide(&view);
        let transition = apply_action(&state, action);

        if let Some(reason) = transition.result.rejection {
            return Err(SimError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                reason,
            });
        }

        if action == Action::Flee {
            flees += 1;
        }
        decisions += 1;
        state = transition.state;
        debug!(seed, decisions, %action, health = state.health, "decision applied");
    }

    let outcome = state.outcome();
    info!(seed, agent = agent.name(), %outcome, health = state.health, decisions, "run finished");

    Ok(GameResult {
        seed,
        agent_name: agent.name().to_string(),
        outcome,
        final_health: state.health,
        decisions,
        flees,
        resolved: state.resolved.len(),
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoundrel_agents::{HeuristicAgent, RandomAgent};

    /// Never does anything but flee.
    struct Coward;

    impl Agent for Coward {
        fn name(&self) -> &str { "Coward" }
        fn decide(&mut self, _view: &scoundrel_engine::visibility::PlayerView) -> Action {
            Action::Flee
        }
    }

    /// Always picks slot 0, potion or not.
    struct Stubborn;

    impl Agent for Stubborn {
        fn name(&self) -> &str { "Stubborn" }
        fn decide(&mut self, _view: &scoundrel_engine::visibility::PlayerView) -> Action {
            Action::SelectCard(0)
        }
    }

    #[test]
    fn test_random_runs_finish() {
        for seed in 0..20u64 {
            let mut agent = RandomAgent::new(seed);
            let result = run_game(&mut agent, seed, 10_000).unwrap();
            assert_ne!(result.outcome, RunOutcome::InProgress);
            assert!(result.final_state.is_over());
            assert_eq!(result.resolved + result.final_state.deck.len() + result.final_state.room.len(), DECK_SIZE);
        }
    }

    #[test]
    fn test_heuristic_runs_finish() {
        for seed in 0..20u64 {
            let mut agent = HeuristicAgent::new(seed);
            let result = run_game(&mut agent, seed, 10_000).unwrap();
            assert_ne!(result.outcome, RunOutcome::InProgress);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = run_game(&mut RandomAgent::new(3), 77, 10_000).unwrap();
        let b = run_game(&mut RandomAgent::new(3), 77, 10_000).unwrap();
        assert_eq!(a.final_state, b.final_state);
        assert_eq!(a.decisions, b.decisions);
    }

    #[test]
    fn test_fleeing_forever_dies() {
        // Each flee costs 1 health, so 20 flees end the run.
        let result = run_game(&mut Coward, 5, 100).unwrap();
        assert_eq!(result.outcome, RunOutcome::Slain);
        assert_eq!(result.flees, 20);
        assert_eq!(result.final_health, 0);
    }

    #[test]
    fn test_decision_limit() {
        let err = run_game(&mut Coward, 5, 10).unwrap_err();
        assert_eq!(err, SimError::DecisionLimit { seed: 5, limit: 10 });
    }

    #[test]
    fn test_rejected_action_is_reported() {
        // Slot 0 drinks hearts 3, then hearts 4 slides into slot 0.
        let state = GameState {
            deck: vec![Card::new(Suit::Spades, 9), Card::new(Suit::Clubs, 7)],
            room: vec![
                Card::new(Suit::Hearts, 3),
                Card::new(Suit::Hearts, 4),
                Card::new(Suit::Clubs, 2),
                Card::new(Suit::Clubs, 5),
            ],
            health: 15,
            weapon: None,
            last_potion: false,
            resolved: Vec::new(),
        };
        let err = run_from_state(&mut Stubborn, state, 9, 100).unwrap_err();
        assert_eq!(
            err,
            SimError::IllegalAction {
                agent: "Stubborn".to_string(),
                action: Action::SelectCard(0),
                reason: Rejection::ConsecutivePotion,
            }
        );
    }

    #[test]
    fn test_run_from_state_plays_out_crafted_room() {
        let state = GameState {
            deck: Vec::new(),
            room: vec![Card::new(Suit::Clubs, 2), Card::new(Suit::Spades, 3)],
            health: 10,
            weapon: None,
            last_potion: false,
            resolved: Vec::new(),
        };
        let result = run_from_state(&mut Stubborn, state, 0, 100).unwrap();
        assert_eq!(result.outcome, RunOutcome::Cleared);
        assert_eq!(result.final_health, 5);
        assert_eq!(result.decisions, 2);
    }
}
