//! Stat derivation from allocated cards.
//!
//! Once every card is allocated, the attribute cards set the four attribute
//! ranks and the skills and gear cards seed the point pools. The lookup is
//! direct: a card contributes its rank-order value. A standard-suited
//! attribute card feeds the attribute of its suit; jokers and the Fool feed
//! the attributes their suits leave unset, in declaration order.

use rz_cards::{Card, Suit};
use rz_core::{AttributeKind, Attributes};

/// The attribute an allocated card of this suit feeds, if it is a
/// standard suit.
pub fn attribute_for_suit(suit: Suit) -> Option<AttributeKind> {
    match suit {
        Suit::Diamonds => Some(AttributeKind::Physical),
        Suit::Hearts => Some(AttributeKind::Social),
        Suit::Spades => Some(AttributeKind::Spiritual),
        Suit::Clubs => Some(AttributeKind::Intellectual),
        Suit::Black | Suit::Red | Suit::Multi => None,
    }
}

/// Derive the four attribute ranks from the cards allocated to the
/// attributes category.
///
/// Standard-suited cards set their suit's attribute first; wild cards then
/// fill whatever attributes are still unset, in declaration order. With a
/// fully allocated hand the category holds exactly four cards and every
/// attribute ends up set.
pub fn derive_attributes(cards: &[Card]) -> Attributes {
    let mut attributes = Attributes::new();
    for card in cards {
        if let Some(kind) = attribute_for_suit(card.suit) {
            attributes.set_rank(kind, card.value());
        }
    }
    for card in cards {
        if attribute_for_suit(card.suit).is_none()
            && let Some(kind) = AttributeKind::all().iter().find(|k| attributes.rank(**k) == 0)
        {
            attributes.set_rank(*kind, card.value());
        }
    }
    attributes
}

/// Total points a category's cards are worth.
pub fn point_total(cards: &[Card]) -> u32 {
    cards.iter().map(Card::value).sum()
}
