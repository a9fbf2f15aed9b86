//! The fixed skill list and per-character skill ranks.
//!
//! The system defines a closed list of skills. A skill set maps canonical
//! skill names to ranks; skills absent from the set read as rank 0
//! (untrained). Unknown names are rejected rather than silently stored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Every skill in the system, in sheet order.
pub const SKILLS: [&str; 27] = [
    "Acrobatics",
    "Blades",
    "Channeling",
    "Deception",
    "Deduction",
    "Dreamwalking",
    "Empathy",
    "Endurance",
    "Engineering",
    "Evasion",
    "Expression",
    "Influence",
    "Insight",
    "Intellect",
    "Investigation",
    "Leadership",
    "Meditation",
    "Negotiation",
    "Persuasion",
    "Ranged",
    "Research",
    "Resilience",
    "Rituals",
    "Stealth",
    "Tactics",
    "Unarmed",
    "Willpower",
];

/// Resolve a user-supplied name to its canonical skill name.
pub fn canonical_skill(name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    SKILLS.iter().find(|s| s.to_lowercase() == lower).copied()
}

/// Trained skill ranks for one character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    ranks: HashMap<String, u32>,
}

impl SkillSet {
    /// Create an empty skill set (everything untrained).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank of a skill. Rank 0 removes the entry. Fails if the
    /// name is not in the skill list.
    pub fn set_rank(&mut self, name: &str, rank: u32) -> CoreResult<()> {
        let canonical =
            canonical_skill(name).ok_or_else(|| CoreError::UnknownSkill(name.to_string()))?;
        if rank == 0 {
            self.ranks.remove(canonical);
        } else {
            self.ranks.insert(canonical.to_string(), rank);
        }
        Ok(())
    }

    /// Get the rank of a skill, 0 if untrained or unknown.
    pub fn rank(&self, name: &str) -> u32 {
        canonical_skill(name)
            .and_then(|c| self.ranks.get(c))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over trained skills and their ranks, in sheet order.
    pub fn trained(&self) -> impl Iterator<Item = (&'static str, u32)> {
        SKILLS
            .iter()
            .filter_map(|s| self.ranks.get(*s).map(|r| (*s, *r)))
    }

    /// Total ranks across all trained skills.
    pub fn total_ranks(&self) -> u32 {
        self.ranks.values().sum()
    }

    /// Number of trained skills.
    pub fn trained_count(&self) -> usize {
        self.ranks.len()
    }
}
