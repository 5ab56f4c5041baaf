// ═══════════════════════════════════════════════════════════════════════
// Core types — cards, roles, and the game state
// ═══════════════════════════════════════════════════════════════════════

use crate::errors::Rejection;
use serde::{Deserialize, Serialize};

/// Health never rises above this, and every run starts here.
pub const MAX_HEALTH: i32 = 20;

/// Number of face-up cards the room is refilled to.
pub const ROOM_SIZE: usize = 4;

/// Cards in a standard deck; nothing is created or destroyed after the deal.
pub const DECK_SIZE: usize = 52;

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Canonical deck order.
    pub const ALL: [Suit; 4] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Spades,
    ];

    fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suit::Hearts => write!(f, "hearts"),
            Suit::Diamonds => write!(f, "diamonds"),
            Suit::Clubs => write!(f, "clubs"),
            Suit::Spades => write!(f, "spades"),
        }
    }
}

/// Semantic role of a card. Derived from the suit, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Monster,
    Weapon,
    Potion,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Monster => write!(f, "monster"),
            CardType::Weapon => write!(f, "weapon"),
            CardType::Potion => write!(f, "potion"),
        }
    }
}

// ── Card ID ────────────────────────────────────────────────────────────
// suit_index * 13 + (value - 1), so the full deck covers 0..52 exactly once.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct CardId(pub u8);

impl CardId {
    pub fn of(suit: Suit, value: u8) -> CardId {
        CardId(suit.index() * 13 + (value - 1))
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / 13) as usize]
    }

    pub fn value(self) -> u8 {
        self.0 % 13 + 1
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.suit(), self.value())
    }
}

// ── Card ───────────────────────────────────────────────────────────────

/// A playing card. Value 1 is the Ace, 11..=13 are Jack, Queen, King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    pub fn new(suit: Suit, value: u8) -> Card {
        debug_assert!((1..=13).contains(&value), "card value out of range: {}", value);
        Card { id: CardId::of(suit, value), suit, value }
    }
}

// ── Run outcome ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    InProgress,
    /// Deck and room both exhausted with health left.
    Cleared,
    /// Health dropped to zero or below.
    Slain,
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::InProgress => write!(f, "in progress"),
            RunOutcome::Cleared => write!(f, "cleared"),
            RunOutcome::Slain => write!(f, "slain"),
        }
    }
}

// ── Game State ─────────────────────────────────────────────────────────

/// The single unit of truth. Transitions build a new value; nothing here
/// is mutated in place by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Remaining face-down cards, front is drawn next.
    pub deck: Vec<Card>,
    /// Face-up cards, at most ROOM_SIZE.
    pub room: Vec<Card>,
    pub health: i32,
    pub weapon: Option<Card>,
    /// True only right after a potion was drunk.
    pub last_potion: bool,
    /// Cards taken out of the room by accepted selections, oldest first.
    pub resolved: Vec<Card>,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.health <= 0 || (self.deck.is_empty() && self.room.is_empty())
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.health <= 0 {
            RunOutcome::Slain
        } else if self.deck.is_empty() && self.room.is_empty() {
            RunOutcome::Cleared
        } else {
            RunOutcome::InProgress
        }
    }

    /// Value of the equipped weapon, 0 when bare-handed.
    pub fn weapon_value(&self) -> i32 {
        self.weapon.map_or(0, |w| w.value as i32)
    }
}

// ── Action Result ──────────────────────────────────────────────────────

/// Outcome descriptor of a single transition. A failed result always comes
/// with the unchanged input state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: Option<String>,
    pub rejection: Option<Rejection>,
}

impl ActionResult {
    pub fn accepted() -> ActionResult {
        ActionResult { success: true, message: None, rejection: None }
    }

    pub fn rejected(reason: Rejection) -> ActionResult {
        ActionResult {
            success: false,
            message: Some(reason.to_string()),
            rejection: Some(reason),
        }
    }
}
