// ═══════════════════════════════════════════════════════════════════════
// Batch — many independent runs in parallel, summarized in memory
// ═══════════════════════════════════════════════════════════════════════

use crate::runner::{run_game, GameResult};
use rayon::prelude::*;
use scoundrel_agents::AgentKind;
use scoundrel_engine::types::RunOutcome;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: u32,
    pub cleared: u32,
    pub slain: u32,
    pub errors: u32,
    /// Mean final health over the runs that finished.
    pub mean_final_health: f64,
    pub mean_decisions: f64,
    /// Highest final health among cleared runs.
    pub best_health: Option<i32>,
}

impl BatchSummary {
    pub fn clear_rate(&self) -> f64 {
        let finished = self.cleared + self.slain;
        if finished == 0 { 0.0 } else { self.cleared as f64 / finished as f64 }
    }

    fn from_results(games: u32, results: &[GameResult], errors: u32) -> Self {
        let finished = results.len() as f64;
        let mut summary = BatchSummary { games, errors, ..Default::default() };
        for r in results {
            match r.outcome {
                RunOutcome::Cleared => {
                    summary.cleared += 1;
                    summary.best_health = Some(summary.best_health.map_or(r.final_health, |b| b.max(r.final_health)));
                }
                RunOutcome::Slain => summary.slain += 1,
                RunOutcome::InProgress => {}
            }
        }
        if finished > 0.0 {
            summary.mean_final_health = results.iter().map(|r| r.final_health as f64).sum::<f64>() / finished;
            summary.mean_decisions = results.iter().map(|r| r.decisions as f64).sum::<f64>() / finished;
        }
        summary
    }
}

/// Run one game per seed, each with a fresh agent seeded from the run seed.
pub fn run_batch(kind: AgentKind, seeds: &[u64], max_decisions: usize) -> BatchSummary {
    let outcomes: Vec<_> = seeds.par_iter()
        .map(|&seed| {
            let mut agent = kind.build(seed);
            run_game(agent.as_mut(), seed, max_decisions)
        })
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut errors = 0u32;
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                errors += 1;
                warn!(error = %e, "run failed");
            }
        }
    }
    BatchSummary::from_results(seeds.len() as u32, &results, errors)
}
