//! Card identity, suits, and ranks.
//!
//! A card's identity is its id string (`"q-hearts"`, `"joker-black"`,
//! `"fool"`); two cards are equal exactly when their ids match. Cards are
//! immutable values created once at catalog-build time.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A card suit. The four standard suits carry the coverage and
/// suit-uniqueness rules; `Black`, `Red`, and `Multi` belong to the jokers
/// and the Fool and are exempt from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// Clubs (intellectual).
    Clubs,
    /// Diamonds (physical).
    Diamonds,
    /// Hearts (social).
    Hearts,
    /// Spades (spiritual).
    Spades,
    /// The black joker's suit.
    Black,
    /// The red joker's suit.
    Red,
    /// The Fool's suit.
    Multi,
}

impl Suit {
    /// The four standard suits in catalog order.
    pub fn standard() -> &'static [Self] {
        &[Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades]
    }

    /// Returns true for clubs, diamonds, hearts, and spades.
    pub fn is_standard(self) -> bool {
        matches!(
            self,
            Self::Clubs | Self::Diamonds | Self::Hearts | Self::Spades
        )
    }

    /// Capitalized display name ("Clubs", "Black", ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Multi => "Multi",
        }
    }

    /// Lowercase key used in card ids ("clubs", "black", ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
            Self::Black => "black",
            Self::Red => "red",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A card rank, ace high, with the jokers and the Fool above the ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Two, the lowest rank.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace, high.
    Ace,
    /// Joker, above the ace.
    Joker,
    /// The Fool, highest of all.
    Fool,
}

impl Rank {
    /// The thirteen standard ranks in ascending order.
    pub fn standard() -> &'static [Self] {
        &[
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
            Self::Ace,
        ]
    }

    /// Rank-order value: 2 through 14 for the standard ranks, 15 for the
    /// jokers, 16 for the Fool.
    pub fn value(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
            Self::Joker => 15,
            Self::Fool => 16,
        }
    }

    /// Short lowercase key used in card ids ("2".."10", "j", "q", "k", "a").
    pub fn key(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "j",
            Self::Queen => "q",
            Self::King => "k",
            Self::Ace => "a",
            Self::Joker => "joker",
            Self::Fool => "fool",
        }
    }

    /// Display label ("2".."10", "Jack", "Queen", "King", "Ace", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
            Self::Joker => "Joker",
            Self::Fool => "Fool",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unique identifier of a card within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable card value. Equality and hashing go by id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, derived from rank and suit.
    pub id: CardId,
    /// The card's rank.
    pub rank: Rank,
    /// The card's suit.
    pub suit: Suit,
}

impl Card {
    /// Create a standard-suited card with its conventional id
    /// (`"q-hearts"`, `"10-clubs"`).
    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId(format!("{}-{}", rank.key(), suit.key())),
            rank,
            suit,
        }
    }

    /// The black joker.
    pub fn black_joker() -> Self {
        Self {
            id: CardId("joker-black".to_string()),
            rank: Rank::Joker,
            suit: Suit::Black,
        }
    }

    /// The red joker.
    pub fn red_joker() -> Self {
        Self {
            id: CardId("joker-red".to_string()),
            rank: Rank::Joker,
            suit: Suit::Red,
        }
    }

    /// The Fool.
    pub fn fool() -> Self {
        Self {
            id: CardId("fool".to_string()),
            rank: Rank::Fool,
            suit: Suit::Multi,
        }
    }

    /// Rank-order value of this card.
    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    /// Display label ("Queen of Hearts", "Black Joker", "Fool Card").
    pub fn label(&self) -> String {
        match self.rank {
            Rank::Joker => format!("{} Joker", self.suit.name()),
            Rank::Fool => "Fool Card".to_string(),
            _ => format!("{} of {}", self.rank.label(), self.suit.name()),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
