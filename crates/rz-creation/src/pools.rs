//! Skill and gear point pools.
//!
//! The cards allocated to the skills and gear categories are converted into
//! spendable points. Ranks and gear entries draw the points back down; both
//! pools must reach zero before their wizard steps will complete.

use serde::{Deserialize, Serialize};

use crate::error::{CreationError, CreationResult};

/// Which point pool an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    /// Points spent on skill ranks.
    Skill,
    /// Points spent on gear entries.
    Gear,
}

impl std::fmt::Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Gear => write!(f, "gear"),
        }
    }
}

/// Remaining points in each pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointPools {
    skill: u32,
    gear: u32,
}

impl PointPools {
    /// Create pools with the given remaining points.
    pub fn new(skill: u32, gear: u32) -> Self {
        Self { skill, gear }
    }

    /// Points left in a pool.
    pub fn remaining(&self, kind: PoolKind) -> u32 {
        match kind {
            PoolKind::Skill => self.skill,
            PoolKind::Gear => self.gear,
        }
    }

    /// Spend points from a pool. Fails without mutation when the pool has
    /// fewer points than requested. Returns the new remainder.
    pub fn spend(&mut self, kind: PoolKind, amount: u32) -> CreationResult<u32> {
        let available = self.remaining(kind);
        if amount > available {
            return Err(CreationError::InsufficientPoints {
                pool: kind,
                available,
                requested: amount,
            });
        }
        self.set(kind, available - amount);
        Ok(self.remaining(kind))
    }

    /// Return points to a pool. Returns the new remainder.
    pub fn refund(&mut self, kind: PoolKind, amount: u32) -> u32 {
        self.set(kind, self.remaining(kind) + amount);
        self.remaining(kind)
    }

    /// True when a pool has been spent down to zero.
    pub fn fully_spent(&self, kind: PoolKind) -> bool {
        self.remaining(kind) == 0
    }

    fn set(&mut self, kind: PoolKind, value: u32) {
        match kind {
            PoolKind::Skill => self.skill = value,
            PoolKind::Gear => self.gear = value,
        }
    }
}
