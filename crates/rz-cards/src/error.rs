//! Error types for the card crate.

use crate::card::{CardId, Suit};

/// Alias for `Result<T, DrawError>`.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur when drawing or validating a hand.
///
/// All of these are configuration-time conditions. A draw from the full
/// 55-card catalog never fails.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// The catalog has fewer cards than a hand requires.
    #[error("catalog too small: need {needed} cards, have {available}")]
    CatalogTooSmall {
        /// Cards required for a hand.
        needed: usize,
        /// Cards present in the catalog.
        available: usize,
    },

    /// The catalog contains no cards of a standard suit, so the coverage
    /// constraint can never be satisfied.
    #[error("catalog has no {0} cards")]
    SuitExhausted(Suit),

    /// A hand was built with the wrong number of cards.
    #[error("hand must have {expected} cards, got {got}")]
    WrongHandSize {
        /// Required hand size.
        expected: usize,
        /// Cards actually supplied.
        got: usize,
    },

    /// A hand was built with the same card twice.
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(CardId),

    /// A hand was built without any card of a standard suit.
    #[error("hand has no {0} cards")]
    MissingSuit(Suit),
}
