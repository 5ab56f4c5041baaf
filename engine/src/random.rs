// ═══════════════════════════════════════════════════════════════════════
// Random source: the only non-determinism the engine accepts.
// Always passed in by the caller; the engine never reaches for a global
// generator.
// ═══════════════════════════════════════════════════════════════════════

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces a float in `[0, 1)` on each call.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// ChaCha8-backed source. Same seed, same run.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Platform-seeded generator for interactive play.
    pub fn from_entropy() -> Self {
        SeededRandom { rng: ChaCha8Rng::from_entropy() }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
