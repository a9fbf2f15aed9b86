//! Error types for the character-creation wizard.
//!
//! Every error here is a normal, expected outcome: the caller surfaces it
//! to the player and re-offers the affordance. No operation corrupts state
//! on failure, and retrying with the same input fails identically; the
//! remediation is always different input.

use rz_cards::{CardId, DrawError, Suit};
use rz_core::CoreError;

use crate::category::Category;
use crate::pools::PoolKind;
use crate::wizard::Step;

/// Alias for `Result<T, CreationError>`.
pub type CreationResult<T> = Result<T, CreationError>;

/// Errors that can occur during a character-creation session.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    /// An allocation operation was attempted before any hand was drawn.
    #[error("no hand has been drawn yet")]
    NoHandDrawn,

    /// A re-draw was attempted after card allocation was completed.
    #[error("the hand is locked once card allocation is complete")]
    HandLocked,

    /// The card is not currently in the unallocated pool.
    #[error("card {0} is not in the unallocated pool")]
    CardNotInPool(CardId),

    /// The target category already holds its maximum number of cards.
    #[error("{category} is full ({capacity} cards)")]
    CategoryFull {
        /// The category that refused the card.
        category: Category,
        /// Its static capacity.
        capacity: usize,
    },

    /// Attributes already hold a card of this standard suit.
    #[error("attributes already hold a {0} card")]
    DuplicateSuit(Suit),

    /// The current step's completion requirement is not met.
    #[error("step {step} is incomplete: {reason}")]
    StepIncomplete {
        /// The step that refused to complete.
        step: Step,
        /// The specific unmet requirement.
        reason: String,
    },

    /// A jump was attempted past the first undone step.
    #[error("step {0} is locked; complete the current step first")]
    StepLocked(Step),

    /// A point spend exceeds the remaining pool.
    #[error("not enough {pool} points: {requested} requested, {available} available")]
    InsufficientPoints {
        /// Which pool ran short.
        pool: PoolKind,
        /// Points left in the pool.
        available: u32,
        /// Points the operation asked for.
        requested: u32,
    },

    /// The draw engine could not produce a covering hand.
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// An error from the character document model.
    #[error(transparent)]
    Core(#[from] CoreError),
}
