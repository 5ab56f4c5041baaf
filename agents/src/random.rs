// ═══════════════════════════════════════════════════════════════════════
// Random Agent — picks uniformly among the legal actions.
// Serves as baseline and for testing engine stability.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scoundrel_engine::engine::Action;
use scoundrel_engine::visibility::PlayerView;

pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str { "Random" }

    fn decide(&mut self, view: &PlayerView) -> Action {
        // An empty list only happens once the run is over; Flee is then
        // rejected harmlessly.
        view.legal_actions.choose(&mut self.rng).copied().unwrap_or(Action::Flee)
    }
}
