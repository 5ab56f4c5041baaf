// ═══════════════════════════════════════════════════════════════════════
// Game Engine — action resolution
//
// Architecture:
//   The engine is a pure state machine. It never does I/O and never
//   mutates its input: every call takes the current GameState and returns
//   a Transition holding the next state plus an ActionResult.
//
//   Rejected actions are not errors. They come back with success=false,
//   a player-facing message, and a state equal to the one passed in.
//
// Flow:
//   1. Caller holds the authoritative GameState
//   2. Caller picks an Action (room slot or flee)
//   3. `apply_action(&state, action)` → Transition
//   4. Caller replaces its state with `transition.state`
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::classify;
use crate::errors::Rejection;
use crate::setup::fill_room;
use crate::types::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a player can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Resolve the room card at this position.
    SelectCard(usize),
    /// Send the whole room to the bottom of the deck for 1 health.
    Flee,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectCard(index) => write!(f, "select {}", index),
            Action::Flee => write!(f, "flee"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub state: GameState,
    pub result: ActionResult,
}

impl Transition {
    fn accepted(state: GameState) -> Transition {
        Transition { state, result: ActionResult::accepted() }
    }

    fn rejected(state: &GameState, reason: Rejection) -> Transition {
        debug!(?reason, "action rejected");
        Transition { state: state.clone(), result: ActionResult::rejected(reason) }
    }
}

pub fn apply_action(state: &GameState, action: Action) -> Transition {
    match action {
        Action::SelectCard(index) => select_card(state, index),
        Action::Flee => flee(state),
    }
}

/// Resolve the room card at `index` by its role.
pub fn select_card(state: &GameState, index: usize) -> Transition {
    if state.is_over() {
        return Transition::rejected(state, Rejection::RunOver);
    }

    let Some(&chosen) = state.room.get(index) else {
        return Transition::rejected(state, Rejection::InvalidIndex);
    };

    let card_type = classify(&chosen);
    if card_type == CardType::Potion && state.last_potion {
        return Transition::rejected(state, Rejection::ConsecutivePotion);
    }

    let mut health = state.health;
    let mut weapon = state.weapon;
    let last_potion = card_type == CardType::Potion;

    match card_type {
        CardType::Monster => {
            let damage = (chosen.value as i32 - state.weapon_value()).max(0);
            health -= damage;
        }
        CardType::Weapon => {
            weapon = Some(chosen);
        }
        CardType::Potion => {
            health = (health + chosen.value as i32).min(MAX_HEALTH);
        }
    }

    // Remove by position: the same value can sit in the room under two suits.
    let mut remaining_room = state.room.clone();
    remaining_room.remove(index);
    let (deck, room) = fill_room(&state.deck, &remaining_room);

    let mut resolved = Vec::with_capacity(state.resolved.len() + 1);
    resolved.extend_from_slice(&state.resolved);
    resolved.push(chosen);

    debug!(card = %chosen.id, role = %card_type, health, room = room.len(), "card resolved");

    Transition::accepted(GameState {
        deck,
        room,
        health,
        weapon,
        last_potion,
        resolved,
    })
}

/// Put the room back under the deck in room order, pay 1 health, redraw.
pub fn flee(state: &GameState) -> Transition {
    if state.is_over() {
        return Transition::rejected(state, Rejection::RunOver);
    }
    if state.room.is_empty() {
        return Transition::rejected(state, Rejection::EmptyRoom);
    }

    let mut combined = Vec::with_capacity(state.deck.len() + state.room.len());
    combined.extend_from_slice(&state.deck);
    combined.extend_from_slice(&state.room);
    let (deck, room) = fill_room(&combined, &[]);
    let health = state.health - 1;

    debug!(health, deck = deck.len(), "fled room");

    Transition::accepted(GameState {
        deck,
        room,
        health,
        weapon: state.weapon,
        last_potion: false,
        resolved: state.resolved.clone(),
    })
}

/// Every action `apply_action` would accept in this state.
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.is_over() {
        return Vec::new();
    }
    let mut actions: Vec<Action> = state.room.iter()
        .enumerate()
        .filter(|(_, card)| !(state.last_potion && classify(card) == CardType::Potion))
        .map(|(i, _)| Action::SelectCard(i))
        .collect();
    if !state.room.is_empty() {
        actions.push(Action::Flee);
    }
    actions
}
