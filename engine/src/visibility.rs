// ═══════════════════════════════════════════════════════════════════════
// Visibility / Information Model
//
// At the table the player sees:
//   PUBLIC  : the room, their health, the equipped weapon, how many cards
//             are left in the deck, and what has already been resolved
//   HIDDEN  : the order of the face-down deck, including where fled rooms
//             ended up
//
// Agents MUST only receive PlayerView, never the raw GameState.
// ═══════════════════════════════════════════════════════════════════════

use crate::engine::{legal_actions, Action};
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub room: Vec<Card>,
    pub health: i32,
    pub weapon: Option<Card>,
    pub last_potion: bool,
    pub deck_size: usize,
    /// Face-up history: every card taken out of the room so far.
    pub resolved: Vec<Card>,
    pub outcome: RunOutcome,
    pub legal_actions: Vec<Action>,
}

impl PlayerView {
    pub fn weapon_value(&self) -> i32 {
        self.weapon.map_or(0, |w| w.value as i32)
    }
}

pub fn player_view(state: &GameState) -> PlayerView {
    PlayerView {
        room: state.room.clone(),
        health: state.health,
        weapon: state.weapon,
        last_potion: state.last_potion,
        deck_size: state.deck.len(),
        resolved: state.resolved.clone(),
        outcome: state.outcome(),
        legal_actions: legal_actions(state),
    }
}
