//! Character document model for Resonance Zero SRP.
//!
//! This crate defines the permanent record a finished character occupies:
//! profile text, the four suit-linked attributes, trained skills, awakened
//! resonances, gear, relationships, and vitals. It is independent of the
//! creation wizard; you can construct a [`Character`] programmatically or
//! deserialize one from JSON.

/// The four suit-linked attributes and their ranks.
pub mod attribute;
/// The character aggregate and its identifier.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Gear entries carried by a character.
pub mod gear;
/// Profile text fields required before creation can begin.
pub mod profile;
/// Relationships formed during play.
pub mod relationship;
/// The four resonances and the unique resonance power.
pub mod resonance;
/// The fixed skill list and per-skill ranks.
pub mod skill;
/// Health and resonant strain gauges.
pub mod vitals;

/// Re-export attribute types.
pub use attribute::{AttributeKind, Attributes};
/// Re-export the character aggregate.
pub use character::{ActorId, Character};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export gear types.
pub use gear::{GearItem, GearList};
/// Re-export the profile type.
pub use profile::Profile;
/// Re-export the relationship type.
pub use relationship::Relationship;
/// Re-export resonance types.
pub use resonance::{Resonance, ResonanceSet};
/// Re-export skill types.
pub use skill::{SKILLS, SkillSet};
/// Re-export vitals types.
pub use vitals::{Gauge, Vitals};
