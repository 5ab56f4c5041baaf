pub mod types;
pub mod errors;
pub mod cards;
pub mod random;
pub mod setup;
pub mod engine;
pub mod visibility;
pub mod store;


pub use types::*;
pub use errors::Rejection;
pub use cards::{classify, create_deck};
pub use random::{RandomSource, SeededRandom};
pub use setup::{fill_room, initialize, initialize_default, shuffle_deck};
pub use engine::{apply_action, flee, legal_actions, select_card, Action, Transition};
