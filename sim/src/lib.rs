pub mod runner;
pub mod batch;

pub use runner::{run_from_state, run_game, GameResult, SimError};
pub use batch::{run_batch, BatchSummary};
