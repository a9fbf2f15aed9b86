//! The constrained random draw.
//!
//! A hand is ten cards containing at least one of each standard suit. The
//! draw shuffles the catalog and takes the top ten, retrying up to a bound
//! when coverage fails. If the bound is exhausted it falls back to a
//! constructive draw: one random card of each standard suit, then six
//! uniform picks from the remainder. The retry path is uniform over
//! covering hands; the fallback is only approximately uniform, which is
//! accepted (it is unreachable in practice with the full catalog).

use rand::Rng;
use rand::rngs::StdRng;

use crate::card::{Card, Suit};
use crate::error::{DrawError, DrawResult};
use crate::hand::{HAND_SIZE, Hand};

/// Default bound on shuffle-and-check attempts before the constructive
/// fallback takes over.
pub const MAX_DRAW_ATTEMPTS: u32 = 500;

/// Draw a ten-card hand covering all four standard suits.
///
/// Fails only when the catalog itself cannot produce a covering hand:
/// fewer than ten cards, or a standard suit entirely absent. With the full
/// 55-card catalog every call succeeds.
pub fn draw(catalog: &[Card], max_attempts: u32, rng: &mut StdRng) -> DrawResult<Hand> {
    if catalog.len() < HAND_SIZE {
        return Err(DrawError::CatalogTooSmall {
            needed: HAND_SIZE,
            available: catalog.len(),
        });
    }
    for suit in Suit::standard() {
        if !catalog.iter().any(|c| c.suit == *suit) {
            return Err(DrawError::SuitExhausted(*suit));
        }
    }

    let mut deck: Vec<Card> = catalog.to_vec();
    for _ in 0..max_attempts {
        shuffle(&mut deck, rng);
        if covers_standard_suits(&deck[..HAND_SIZE]) {
            return Hand::new(deck[..HAND_SIZE].to_vec());
        }
    }

    // Constructive fallback: force one card of each standard suit, then
    // fill the rest without replacement.
    let mut remaining: Vec<Card> = catalog.to_vec();
    let mut picked = Vec::with_capacity(HAND_SIZE);
    for suit in Suit::standard() {
        let indices: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit == *suit)
            .map(|(i, _)| i)
            .collect();
        let chosen = indices[rng.random_range(0..indices.len())];
        picked.push(remaining.swap_remove(chosen));
    }
    while picked.len() < HAND_SIZE {
        let chosen = rng.random_range(0..remaining.len());
        picked.push(remaining.swap_remove(chosen));
    }
    Hand::new(picked)
}

/// In-place Fisher-Yates shuffle.
fn shuffle(cards: &mut [Card], rng: &mut StdRng) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

fn covers_standard_suits(cards: &[Card]) -> bool {
    Suit::standard()
        .iter()
        .all(|s| cards.iter().any(|c| c.suit == *s))
}
