//! The allocation ledger.
//!
//! Tracks which drawn card sits in which category. Every card is either in
//! the unallocated pool or in exactly one category, and the pool size plus
//! the allocated count always equals the original hand size. All mutations
//! go through the operations here; a failed operation leaves the ledger
//! exactly as it was.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use rz_cards::{Card, CardId, Hand};

use crate::category::Category;
use crate::error::{CreationError, CreationResult};

/// The card-allocation state of one creation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationLedger {
    pool: Vec<Card>,
    slots: HashMap<Category, Vec<Card>>,
    initial_size: usize,
}

impl AllocationLedger {
    /// Create a ledger over a freshly drawn hand. All cards start in the
    /// unallocated pool.
    pub fn new(hand: Hand) -> Self {
        let pool = hand.into_cards();
        let initial_size = pool.len();
        let slots = Category::all().iter().map(|c| (*c, Vec::new())).collect();
        Self {
            pool,
            slots,
            initial_size,
        }
    }

    /// Move a card from the pool into a category.
    ///
    /// Checks, in order: the card must be in the pool; the category must
    /// have room; for attributes, a standard-suited card must not repeat a
    /// suit already present (jokers and the Fool are exempt). On any
    /// failure the ledger is unchanged.
    pub fn allocate(&mut self, id: &CardId, category: Category) -> CreationResult<()> {
        let pool_idx = self
            .pool
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CreationError::CardNotInPool(id.clone()))?;

        let occupants = self.cards_in(category);
        if occupants.len() >= category.capacity() {
            return Err(CreationError::CategoryFull {
                category,
                capacity: category.capacity(),
            });
        }

        let suit = self.pool[pool_idx].suit;
        if category == Category::Attributes
            && suit.is_standard()
            && occupants.iter().any(|c| c.suit == suit)
        {
            return Err(CreationError::DuplicateSuit(suit));
        }

        let card = self.pool.remove(pool_idx);
        self.slots.entry(category).or_default().push(card);
        Ok(())
    }

    /// Return an allocated card to the pool. Returns true if the card was
    /// allocated somewhere; false if it was already in the pool or is not
    /// part of this hand.
    pub fn release(&mut self, id: &CardId) -> bool {
        let Some((category, idx)) = self.position_of(id) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(&category) else {
            return false;
        };
        let card = slot.remove(idx);
        self.pool.push(card);
        true
    }

    /// Move a card into a new category, wherever it currently is.
    ///
    /// An unallocated card is simply allocated. An allocated card is pulled
    /// out of its category and re-allocated; if the new allocation fails,
    /// the card is restored to its original category at its original
    /// position. Moving a card onto its own category is a no-op.
    pub fn reallocate(&mut self, id: &CardId, new_category: Category) -> CreationResult<()> {
        let Some((old_category, idx)) = self.position_of(id) else {
            return self.allocate(id, new_category);
        };
        if old_category == new_category {
            return Ok(());
        }

        // Pull the card back to the pool, then attempt the new allocation.
        let Some(slot) = self.slots.get_mut(&old_category) else {
            return self.allocate(id, new_category);
        };
        let card = slot.remove(idx);
        self.pool.push(card);

        match self.allocate(id, new_category) {
            Ok(()) => Ok(()),
            Err(err) => {
                // Restore the original allocation exactly.
                if let Some(pool_idx) = self.pool.iter().position(|c| &c.id == id) {
                    let card = self.pool.remove(pool_idx);
                    self.slots.entry(old_category).or_default().insert(idx, card);
                }
                Err(err)
            }
        }
    }

    /// True when the pool is empty and every drawn card is allocated.
    pub fn is_fully_allocated(&self) -> bool {
        self.pool.is_empty() && self.allocated_count() == self.initial_size
    }

    /// Per-category allocated card counts.
    pub fn category_counts(&self) -> HashMap<Category, usize> {
        Category::all()
            .iter()
            .map(|c| (*c, self.cards_in(*c).len()))
            .collect()
    }

    /// The cards currently allocated to a category, in allocation order.
    pub fn cards_in(&self, category: Category) -> &[Card] {
        self.slots.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The cards still waiting to be allocated.
    pub fn remaining_pool(&self) -> &[Card] {
        &self.pool
    }

    /// Total number of allocated cards.
    pub fn allocated_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// The category currently holding a card, if any.
    pub fn category_of(&self, id: &CardId) -> Option<Category> {
        self.position_of(id).map(|(c, _)| c)
    }

    /// The size of the hand this ledger was created over.
    pub fn hand_size(&self) -> usize {
        self.initial_size
    }

    fn position_of(&self, id: &CardId) -> Option<(Category, usize)> {
        for category in Category::all() {
            if let Some(idx) = self.cards_in(*category).iter().position(|c| &c.id == id) {
                return Some((*category, idx));
            }
        }
        None
    }
}
