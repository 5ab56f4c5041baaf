// ═══════════════════════════════════════════════════════════════════════
// Heuristic Agent — greedy one-step scoring over the legal actions.
// Significantly stronger than RandomAgent.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scoundrel_engine::cards::classify;
use scoundrel_engine::engine::Action;
use scoundrel_engine::types::*;
use scoundrel_engine::visibility::PlayerView;

/// Anything scored this low loses the run outright.
const FATAL: i32 = -1000;

/// Fleeing costs a point of health and gains nothing from the room.
const FLEE_SCORE: i32 = -8;

/// Above this health the agent only flees a room that would kill it.
const LOW_HEALTH: i32 = 8;

/// Flee score while healthy: below any survivable fight, above FATAL.
const HEALTHY_FLEE_SCORE: i32 = -100;

pub struct HeuristicAgent {
    rng: ChaCha8Rng,
}

impl HeuristicAgent {
    pub fn new(seed: u64) -> Self {
        HeuristicAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Higher is better.
    fn score(&self, view: &PlayerView, action: Action) -> i32 {
        let card = match action {
            Action::Flee => {
                return if view.health <= 1 {
                    FATAL
                } else if view.health <= LOW_HEALTH {
                    FLEE_SCORE
                } else {
                    HEALTHY_FLEE_SCORE
                };
            }
            Action::SelectCard(i) => match view.room.get(i) {
                Some(card) => *card,
                None => return FATAL,
            },
        };

        let value = card.value as i32;
        let weapon_value = view.weapon_value();

        match classify(&card) {
            CardType::Monster => {
                let damage = (value - weapon_value).max(0);
                if damage >= view.health {
                    FATAL
                } else if damage == 0 {
                    2
                } else {
                    -damage * 2
                }
            }
            CardType::Weapon => {
                if value > weapon_value {
                    (value - weapon_value) * 2
                } else {
                    -(weapon_value - value) * 2 - 1
                }
            }
            CardType::Potion => {
                let heal = value.min(MAX_HEALTH - view.health);
                if heal <= 0 {
                    -3
                } else if view.health <= LOW_HEALTH {
                    heal * 3
                } else {
                    heal * 2
                }
            }
        }
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str { "Heuristic" }

    fn decide(&mut self, view: &PlayerView) -> Action {
        let scored: Vec<(Action, i32)> = view.legal_actions.iter()
            .map(|&a| (a, self.score(view, a)))
            .collect();
        let Some(best) = scored.iter().map(|(_, s)| *s).max() else {
            return Action::Flee;
        };

        // Break ties randomly so equal rooms don't always resolve left to right
        let top: Vec<Action> = scored.iter()
            .filter(|(_, s)| *s == best)
            .map(|(a, _)| *a)
            .collect();
        *top.choose(&mut self.rng).unwrap_or(&Action::Flee)
    }
}
