// ═══════════════════════════════════════════════════════════════════════
// The 52-card deck and card roles — static data
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;

// ── Deck ───────────────────────────────────────────────────────────────

/// All 13 values of each suit, suits in `Suit::ALL` order.
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in 1..=13u8 {
            cards.push(Card::new(suit, value));
        }
    }
    cards
}

// ── Roles ──────────────────────────────────────────────────────────────

pub fn classify(card: &Card) -> CardType {
    match card.suit {
        Suit::Hearts => CardType::Potion,
        Suit::Diamonds => CardType::Weapon,
        Suit::Clubs | Suit::Spades => CardType::Monster,
    }
}
