// ═══════════════════════════════════════════════════════════════════════
// Terminal rendering — display strings live here, never in the engine
// ═══════════════════════════════════════════════════════════════════════

use scoundrel_engine::cards::classify;
use scoundrel_engine::types::*;
use std::fmt::Write;

pub fn rank_label(value: u8) -> String {
    match value {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        v => v.to_string(),
    }
}

pub fn suit_glyph(suit: Suit) -> char {
    match suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    }
}

/// "Q♠"
pub fn card_label(card: &Card) -> String {
    format!("{}{}", rank_label(card.value), suit_glyph(card.suit))
}

pub fn render_state(state: &GameState, message: Option<&str>) -> String {
    let mut out = String::new();
    let weapon = state.weapon.as_ref().map_or_else(|| "None".to_string(), card_label);
    let _ = writeln!(out, "Health {:>3}/{}   Weapon {:<4}  Deck {:>2}", state.health, MAX_HEALTH, weapon, state.deck.len());

    if state.room.is_empty() {
        let _ = writeln!(out, "  (the room is empty)");
    }
    for (i, card) in state.room.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {:<4} {}", i + 1, card_label(card), classify(card));
    }

    match state.outcome() {
        RunOutcome::InProgress => {}
        RunOutcome::Cleared => { let _ = writeln!(out, "The dungeon is cleared. You survive with {} health.", state.health); }
        RunOutcome::Slain => { let _ = writeln!(out, "You have been slain."); }
    }
    if let Some(msg) = message {
        let _ = writeln!(out, "! {}", msg);
    }
    out
}
