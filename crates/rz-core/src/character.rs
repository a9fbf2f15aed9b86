//! The character aggregate: the permanent record creation produces.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::Attributes;
use crate::gear::GearList;
use crate::profile::Profile;
use crate::relationship::Relationship;
use crate::resonance::ResonanceSet;
use crate::skill::SkillSet;
use crate::vitals::Vitals;

/// Unique identifier for a character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A complete character record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier for this character.
    pub id: ActorId,
    /// Character name.
    pub name: String,
    /// Concept, background, and motivation.
    pub profile: Profile,
    /// The four attribute ranks.
    pub attributes: Attributes,
    /// Trained skill ranks.
    pub skills: SkillSet,
    /// Awakened resonances and unique power.
    pub resonances: ResonanceSet,
    /// Carried gear.
    pub gear: GearList,
    /// Bonds formed during play.
    pub relationships: Vec<Relationship>,
    /// Health and strain.
    pub vitals: Vitals,
    /// Free-text player notes.
    pub notes: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Create a blank character with a random ID and starting vitals.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            profile: Profile::new(),
            attributes: Attributes::new(),
            skills: SkillSet::new(),
            resonances: ResonanceSet::new(),
            gear: GearList::new(),
            relationships: Vec::new(),
            vitals: Vitals::new(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }
}
