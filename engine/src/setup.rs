// ═══════════════════════════════════════════════════════════════════════
// Game setup — shuffling, room refills, and the initial GameState
// ═══════════════════════════════════════════════════════════════════════

use crate::cards;
use crate::random::{RandomSource, SeededRandom};
use crate::types::*;
use tracing::{debug, trace};

/// Fisher–Yates over a copy of `cards`. Draws exactly `len - 1` numbers
/// from `random`, walking the index down from the back.
pub fn shuffle_deck<R: RandomSource + ?Sized>(cards: &[Card], random: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    for index in (1..shuffled.len()).rev() {
        let swap_index = (random.next_f64() * (index + 1) as f64).floor() as usize;
        // Clamped: a source returning 1.0 would otherwise land on index + 1.
        shuffled.swap(index, swap_index.min(index));
    }
    shuffled
}

/// Move cards from the front of `deck` to the back of `room` until the room
/// holds ROOM_SIZE cards or the deck runs out.
pub fn fill_room(deck: &[Card], room: &[Card]) -> (Vec<Card>, Vec<Card>) {
    let needed = ROOM_SIZE.saturating_sub(room.len()).min(deck.len());
    let mut new_room = Vec::with_capacity(ROOM_SIZE);
    new_room.extend_from_slice(room);
    new_room.extend_from_slice(&deck[..needed]);
    let new_deck = deck[needed..].to_vec();
    trace!(drawn = needed, deck_left = new_deck.len(), "room refilled");
    (new_deck, new_room)
}

/// Fresh run: canonical deck, shuffled with `random`, first room dealt.
pub fn initialize<R: RandomSource + ?Sized>(random: &mut R) -> GameState {
    let shuffled = shuffle_deck(&cards::create_deck(), random);
    let (deck, room) = fill_room(&shuffled, &[]);
    debug!(deck = deck.len(), room = room.len(), "new run dealt");
    GameState {
        deck,
        room,
        health: MAX_HEALTH,
        weapon: None,
        last_potion: false,
        resolved: Vec::new(),
    }
}

/// `initialize` with a platform-seeded generator.
pub fn initialize_default() -> GameState {
    initialize(&mut SeededRandom::from_entropy())
}
