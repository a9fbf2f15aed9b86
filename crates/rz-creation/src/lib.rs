//! Character-creation wizard for Resonance Zero SRP.
//!
//! Creation deals a ten-card hand covering all four standard suits, then
//! walks nine steps: the player allocates every card into capacity-limited
//! categories, spends the skill and gear points the cards fund, awakens
//! resonances, and finishes with a complete [`rz_core::Character`]. A
//! [`CreationSession`] owns the whole process for one character; the host
//! UI calls its operations, surfaces returned errors, and persists
//! snapshots.

/// Allocation categories and capacities.
pub mod category;
/// Session configuration.
pub mod config;
/// Stat derivation from allocated cards.
pub mod derive;
/// Error types used throughout the crate.
pub mod error;
/// The card-allocation ledger.
pub mod ledger;
/// Skill and gear point pools.
pub mod pools;
/// The creation session.
pub mod session;
/// Wizard step progression.
pub mod wizard;

/// Re-export the category type.
pub use category::Category;
/// Re-export the configuration type.
pub use config::CreationConfig;
/// Re-export derivation helpers.
pub use derive::{attribute_for_suit, derive_attributes, point_total};
/// Re-export error types.
pub use error::{CreationError, CreationResult};
/// Re-export the ledger.
pub use ledger::AllocationLedger;
/// Re-export point pool types.
pub use pools::{PointPools, PoolKind};
/// Re-export session types.
pub use session::{CreationSession, CreationSnapshot};
/// Re-export wizard types.
pub use wizard::{Step, WizardState};
