//! Gear entries carried by a character.
//!
//! Gear is a flat list of named entries. During creation each entry has a
//! point cost paid from the gear pool; the cost is kept on the entry so
//! removal can refund it.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single piece of gear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearItem {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Gear points paid for this entry.
    pub cost: u32,
}

/// The gear a character carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GearList {
    items: Vec<GearItem>,
}

impl GearList {
    /// Create an empty gear list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a gear entry.
    pub fn add(&mut self, name: impl Into<String>, description: impl Into<String>, cost: u32) {
        self.items.push(GearItem {
            name: name.into(),
            description: description.into(),
            cost,
        });
    }

    /// Get a mutable reference to an entry by index.
    pub fn get_mut(&mut self, index: usize) -> CoreResult<&mut GearItem> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CoreError::GearIndexOutOfRange { index, len })
    }

    /// Remove an entry by index, returning it.
    pub fn remove(&mut self, index: usize) -> CoreResult<GearItem> {
        if index >= self.items.len() {
            return Err(CoreError::GearIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// All entries in insertion order.
    pub fn items(&self) -> &[GearItem] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total gear points spent across all entries.
    pub fn total_cost(&self) -> u32 {
        self.items.iter().map(|i| i.cost).sum()
    }
}
