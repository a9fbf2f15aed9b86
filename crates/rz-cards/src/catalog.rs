//! The fixed 55-card catalog.
//!
//! 52 standard cards (thirteen ranks in each of four suits), two jokers,
//! and the Fool, in a deterministic order: suits in catalog order, ranks
//! ascending within each suit, then black joker, red joker, Fool.

use crate::card::{Card, Rank, Suit};

/// Total number of cards in the catalog.
pub const CATALOG_SIZE: usize = 55;

/// Build the full catalog. Pure and deterministic; calling it twice yields
/// identical sequences.
pub fn catalog() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CATALOG_SIZE);
    for suit in Suit::standard() {
        for rank in Rank::standard() {
            cards.push(Card::standard(*rank, *suit));
        }
    }
    cards.push(Card::black_joker());
    cards.push(Card::red_joker());
    cards.push(Card::fool());
    cards
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn has_55_cards() {
        assert_eq!(catalog().len(), CATALOG_SIZE);
    }

    #[test]
    fn ids_are_unique() {
        let cards = catalog();
        let ids: HashSet<_> = cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), CATALOG_SIZE);
    }

    #[test]
    fn thirteen_per_standard_suit() {
        let cards = catalog();
        for suit in Suit::standard() {
            let count = cards.iter().filter(|c| c.suit == *suit).count();
            assert_eq!(count, 13, "{suit}");
        }
    }

    #[test]
    fn specials_at_the_end() {
        let cards = catalog();
        assert_eq!(cards[52].id.as_str(), "joker-black");
        assert_eq!(cards[53].id.as_str(), "joker-red");
        assert_eq!(cards[54].id.as_str(), "fool");
    }

    #[test]
    fn deterministic_order() {
        assert_eq!(catalog(), catalog());
        assert_eq!(catalog()[0].id.as_str(), "2-clubs");
        assert_eq!(catalog()[12].id.as_str(), "a-clubs");
        assert_eq!(catalog()[13].id.as_str(), "2-diamonds");
    }
}
