use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the resolver refused an action. The display text is the message
/// shown to the player.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Run is already over.")]
    RunOver,
    #[error("Pick a card in the room.")]
    InvalidIndex,
    #[error("No cards to flee from.")]
    EmptyRoom,
    #[error("No consecutive potions.")]
    ConsecutivePotion,
}
