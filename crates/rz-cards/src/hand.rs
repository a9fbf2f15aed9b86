//! The ten-card hand drawn for one character-creation session.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, Suit};
use crate::error::{DrawError, DrawResult};

/// Number of cards in a drawn hand.
pub const HAND_SIZE: usize = 10;

/// Exactly ten distinct cards covering all four standard suits.
///
/// The coverage invariant holds at creation time; allocation removes cards
/// from the hand's pool afterwards, which is the ledger's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Build a hand from drawn cards, validating the size, distinctness,
    /// and suit-coverage invariants.
    pub fn new(cards: Vec<Card>) -> DrawResult<Self> {
        if cards.len() != HAND_SIZE {
            return Err(DrawError::WrongHandSize {
                expected: HAND_SIZE,
                got: cards.len(),
            });
        }
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.clone()) {
                return Err(DrawError::DuplicateCard(card.id.clone()));
            }
        }
        for suit in Suit::standard() {
            if !cards.iter().any(|c| c.suit == *suit) {
                return Err(DrawError::MissingSuit(*suit));
            }
        }
        Ok(Self { cards })
    }

    /// The cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consume the hand, yielding its cards.
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Number of cards (always [`HAND_SIZE`] for a valid hand).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns true if the hand contains a card with the given id.
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|c| &c.id == id)
    }

    /// Look up a card by id.
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Returns true if every standard suit is represented.
    pub fn covers_standard_suits(&self) -> bool {
        Suit::standard()
            .iter()
            .all(|s| self.cards.iter().any(|c| c.suit == *s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;
    use crate::catalog::catalog;

    fn first_ten() -> Vec<Card> {
        // 2..Jack of clubs: ten distinct cards, one suit only
        catalog().into_iter().take(HAND_SIZE).collect()
    }

    fn covering_ten() -> Vec<Card> {
        let mut cards: Vec<Card> = Suit::standard()
            .iter()
            .flat_map(|s| {
                [
                    Card::standard(Rank::Two, *s),
                    Card::standard(Rank::Three, *s),
                ]
            })
            .collect();
        cards.push(Card::standard(Rank::Ace, Suit::Spades));
        cards.push(Card::fool());
        cards
    }

    #[test]
    fn valid_hand() {
        let hand = Hand::new(covering_ten()).unwrap();
        assert_eq!(hand.len(), HAND_SIZE);
        assert!(!hand.is_empty());
        assert!(hand.covers_standard_suits());
        assert!(hand.contains(&CardId::from("fool")));
        assert!(hand.get(&CardId::from("a-spades")).is_some());
        assert!(hand.get(&CardId::from("k-hearts")).is_none());
    }

    #[test]
    fn wrong_size_rejected() {
        let err = Hand::new(vec![Card::fool()]).unwrap_err();
        assert!(matches!(err, DrawError::WrongHandSize { expected: 10, got: 1 }));
    }

    #[test]
    fn duplicate_rejected() {
        let mut cards = covering_ten();
        cards[9] = cards[0].clone();
        let err = Hand::new(cards).unwrap_err();
        assert!(matches!(err, DrawError::DuplicateCard(_)));
    }

    #[test]
    fn missing_suit_rejected() {
        let err = Hand::new(first_ten()).unwrap_err();
        assert!(matches!(err, DrawError::MissingSuit(_)));
    }

    #[test]
    fn serde_roundtrip() {
        let hand = Hand::new(covering_ten()).unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        let hand2: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, hand2);
    }
}
