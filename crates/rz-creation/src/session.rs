//! The character-creation session.
//!
//! One session owns one in-progress character: the profile being typed, the
//! drawn hand and its allocation ledger, the wizard position, and the point
//! pools. All operations run to completion synchronously; every mutation
//! either succeeds whole or returns an error leaving the session untouched.
//! The host persists a [`CreationSnapshot`] after any successful mutation it
//! wants saved and surfaces returned errors to the player.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use rz_cards::{Card, CardId, catalog, draw};
use rz_core::{Character, CoreError, Profile, Resonance};
use rz_core::skill::canonical_skill;

use crate::category::Category;
use crate::config::CreationConfig;
use crate::derive::{derive_attributes, point_total};
use crate::error::{CreationError, CreationResult};
use crate::ledger::AllocationLedger;
use crate::pools::{PointPools, PoolKind};
use crate::wizard::{Step, WizardState};

/// An in-progress character-creation session.
pub struct CreationSession {
    config: CreationConfig,
    rng: StdRng,
    character: Character,
    ledger: Option<AllocationLedger>,
    wizard: WizardState,
    pools: PointPools,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl CreationSession {
    /// Start a fresh session for a named character.
    pub fn new(name: impl Into<String>, config: CreationConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            character: Character::new(name),
            ledger: None,
            wizard: WizardState::new(),
            pools: PointPools::default(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// The character as built so far.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The profile as entered so far.
    pub fn profile(&self) -> &Profile {
        &self.character.profile
    }

    /// Set the character concept.
    pub fn set_concept(&mut self, text: impl Into<String>) {
        self.character.profile.concept = text.into();
    }

    /// Set the character background.
    pub fn set_background(&mut self, text: impl Into<String>) {
        self.character.profile.background = text.into();
    }

    /// Set the character motivation.
    pub fn set_motivation(&mut self, text: impl Into<String>) {
        self.character.profile.motivation = text.into();
    }

    // --- card draw and allocation -------------------------------------

    /// Draw a fresh ten-card hand and start a new allocation ledger.
    ///
    /// Drawing again while allocation is still open discards the current
    /// hand and any allocation made so far. Once the card-allocation step
    /// has been completed the hand is locked and re-drawing fails.
    pub fn draw_hand(&mut self) -> CreationResult<&[Card]> {
        if self.wizard.is_completed(Step::CardAllocation) {
            return Err(CreationError::HandLocked);
        }
        let hand = draw(&catalog(), self.config.max_draw_attempts, &mut self.rng)?;
        self.ledger = Some(AllocationLedger::new(hand));
        Ok(self.remaining_pool())
    }

    /// Allocate an unallocated card to a category.
    pub fn allocate(&mut self, id: &CardId, category: Category) -> CreationResult<()> {
        self.ledger_mut()?.allocate(id, category)
    }

    /// Move a card to a new category, restoring its old allocation if the
    /// move is refused.
    pub fn reallocate(&mut self, id: &CardId, category: Category) -> CreationResult<()> {
        self.ledger_mut()?.reallocate(id, category)
    }

    /// Return an allocated card to the pool. Returns true if it moved.
    pub fn release(&mut self, id: &CardId) -> CreationResult<bool> {
        Ok(self.ledger_mut()?.release(id))
    }

    /// The cards still waiting to be allocated. Empty before any draw.
    pub fn remaining_pool(&self) -> &[Card] {
        self.ledger
            .as_ref()
            .map(AllocationLedger::remaining_pool)
            .unwrap_or(&[])
    }

    /// Per-category allocated counts. All zero before any draw.
    pub fn category_counts(&self) -> HashMap<Category, usize> {
        match &self.ledger {
            Some(ledger) => ledger.category_counts(),
            None => Category::all().iter().map(|c| (*c, 0)).collect(),
        }
    }

    /// The cards allocated to one category.
    pub fn cards_in(&self, category: Category) -> &[Card] {
        self.ledger
            .as_ref()
            .map(|l| l.cards_in(category))
            .unwrap_or(&[])
    }

    /// The category currently holding a card, if any.
    pub fn category_of(&self, id: &CardId) -> Option<Category> {
        self.ledger.as_ref().and_then(|l| l.category_of(id))
    }

    /// True when a hand has been drawn and every card is allocated.
    pub fn is_fully_allocated(&self) -> bool {
        self.ledger
            .as_ref()
            .is_some_and(AllocationLedger::is_fully_allocated)
    }

    /// The card allocated to fate, once one is.
    pub fn fate_card(&self) -> Option<&Card> {
        self.cards_in(Category::Fate).first()
    }

    // --- point spending -----------------------------------------------

    /// Points left in a pool. Zero before card allocation completes.
    pub fn points_remaining(&self, kind: PoolKind) -> u32 {
        self.pools.remaining(kind)
    }

    /// Set a skill to a rank, spending or refunding the skill pool by the
    /// difference.
    pub fn set_skill_rank(&mut self, name: &str, rank: u32) -> CreationResult<u32> {
        let canonical =
            canonical_skill(name).ok_or_else(|| CoreError::UnknownSkill(name.to_string()))?;
        let current = self.character.skills.rank(canonical);
        if rank > current {
            self.pools.spend(PoolKind::Skill, rank - current)?;
        } else {
            self.pools.refund(PoolKind::Skill, current - rank);
        }
        self.character.skills.set_rank(canonical, rank)?;
        Ok(self.pools.remaining(PoolKind::Skill))
    }

    /// Awaken a resonance. Returns false if it already was.
    pub fn awaken_resonance(&mut self, resonance: Resonance) -> bool {
        self.character.resonances.awaken(resonance)
    }

    /// Suppress an awakened resonance. Returns false if it was not awakened.
    pub fn suppress_resonance(&mut self, resonance: Resonance) -> bool {
        self.character.resonances.suppress(resonance)
    }

    /// Name (or, with blank text, clear) the unique resonance power.
    pub fn set_unique_power(&mut self, text: impl Into<String>) {
        self.character.resonances.set_unique_power(text);
    }

    /// Add a gear entry, paying its cost from the gear pool.
    pub fn add_gear(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
    ) -> CreationResult<u32> {
        self.pools.spend(PoolKind::Gear, cost)?;
        self.character.gear.add(name, description, cost);
        Ok(self.pools.remaining(PoolKind::Gear))
    }

    /// Remove a gear entry by index, refunding its cost.
    pub fn remove_gear(&mut self, index: usize) -> CreationResult<u32> {
        let item = self.character.gear.remove(index)?;
        self.pools.refund(PoolKind::Gear, item.cost);
        Ok(self.pools.remaining(PoolKind::Gear))
    }

    // --- wizard navigation --------------------------------------------

    /// Attempt to move to the next step, running the current step's
    /// completion check. Completing card allocation derives attribute
    /// ranks and seeds the point pools from the allocated cards.
    pub fn advance(&mut self) -> CreationResult<Step> {
        let verdict = self.check_step(self.wizard.current());
        let next = self.wizard.advance_with(|_| verdict)?;
        if next == Step::AttributesDisplay {
            self.apply_card_results();
        }
        if next == Step::Complete && self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
        Ok(next)
    }

    /// Move back one step unconditionally.
    pub fn retreat(&mut self) -> Step {
        self.wizard.retreat()
    }

    /// Jump to a step no further ahead than the one after the current.
    pub fn jump_to(&mut self, step: Step) -> CreationResult<Step> {
        self.wizard.jump_to(step)
    }

    /// The step the wizard is currently on.
    pub fn current_step(&self) -> Step {
        self.wizard.current()
    }

    /// Completion flags for every gated step.
    pub fn completed_steps(&self) -> HashMap<Step, bool> {
        self.wizard.completed_steps()
    }

    /// False once the terminal transition has happened.
    pub fn in_progress(&self) -> bool {
        self.wizard.is_in_progress()
    }

    /// When the session was started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the terminal transition happened, if it has.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Finish the session, yielding the completed character record.
    /// Refused while the wizard is still in progress.
    pub fn into_character(self) -> CreationResult<Character> {
        if self.wizard.is_in_progress() {
            return Err(CreationError::StepIncomplete {
                step: self.wizard.current(),
                reason: "creation is not finished".to_string(),
            });
        }
        Ok(self.character)
    }

    // --- persistence hand-off -----------------------------------------

    /// Capture the session state for the host to persist.
    pub fn snapshot(&self) -> CreationSnapshot {
        CreationSnapshot {
            config: self.config.clone(),
            character: self.character.clone(),
            ledger: self.ledger.clone(),
            wizard: self.wizard.clone(),
            pools: self.pools.clone(),
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }

    /// Rebuild a session from a persisted snapshot. The RNG is re-seeded
    /// from the configured seed; draws after a restore are reproducible
    /// for the snapshot's config but do not continue the old stream.
    pub fn from_snapshot(snapshot: CreationSnapshot) -> Self {
        let rng = StdRng::seed_from_u64(snapshot.config.seed);
        Self {
            rng,
            config: snapshot.config,
            character: snapshot.character,
            ledger: snapshot.ledger,
            wizard: snapshot.wizard,
            pools: snapshot.pools,
            started_at: snapshot.started_at,
            completed_at: snapshot.completed_at,
        }
    }

    // --- internals -----------------------------------------------------

    fn ledger_mut(&mut self) -> CreationResult<&mut AllocationLedger> {
        self.ledger.as_mut().ok_or(CreationError::NoHandDrawn)
    }

    /// Derive attributes and seed the pools from the allocated cards.
    /// Runs every time card allocation completes, so a re-visited
    /// allocation refreshes the derived values; points already spent stay
    /// spent.
    fn apply_card_results(&mut self) {
        let Some(ledger) = &self.ledger else {
            return;
        };
        self.character.attributes = derive_attributes(ledger.cards_in(Category::Attributes));
        let skill_total = point_total(ledger.cards_in(Category::Skills));
        let gear_total = point_total(ledger.cards_in(Category::Gear));
        let skill_spent = self.character.skills.total_ranks();
        let gear_spent = self.character.gear.total_cost();
        self.pools = PointPools::new(
            skill_total.saturating_sub(skill_spent),
            gear_total.saturating_sub(gear_spent),
        );
    }

    fn check_step(&self, step: Step) -> Result<(), String> {
        match step {
            Step::Profile => {
                let missing = self.character.profile.missing_fields();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(format!("missing fields: {}", missing.join(", ")))
                }
            }
            Step::Overview | Step::FateCardDisplay | Step::Complete => Ok(()),
            Step::CardAllocation => match &self.ledger {
                None => Err("no hand drawn yet".to_string()),
                Some(ledger) if ledger.is_fully_allocated() => Ok(()),
                Some(ledger) => Err(format!(
                    "{} cards left to allocate",
                    ledger.remaining_pool().len()
                )),
            },
            Step::AttributesDisplay => {
                let have = self.cards_in(Category::Attributes).len();
                let need = Category::Attributes.capacity();
                if have == need {
                    Ok(())
                } else {
                    Err(format!("attributes need exactly {need} cards, have {have}"))
                }
            }
            Step::SkillAllocation => {
                let left = self.pools.remaining(PoolKind::Skill);
                if left == 0 {
                    Ok(())
                } else {
                    Err(format!("{left} skill points remaining"))
                }
            }
            Step::ResonanceAllocation => {
                if self.character.resonances.has_selection() {
                    Ok(())
                } else {
                    Err("awaken a resonance or name a unique power".to_string())
                }
            }
            Step::GearAllocation => {
                let left = self.pools.remaining(PoolKind::Gear);
                if left == 0 {
                    Ok(())
                } else {
                    Err(format!("{left} gear points remaining"))
                }
            }
        }
    }
}

/// Everything the host needs to persist and later restore a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationSnapshot {
    /// The session configuration, including the RNG seed.
    pub config: CreationConfig,
    /// The character as built so far.
    pub character: Character,
    /// The allocation ledger, if a hand has been drawn.
    pub ledger: Option<AllocationLedger>,
    /// The wizard position and completion flags.
    pub wizard: WizardState,
    /// Remaining skill and gear points.
    pub pools: PointPools,
    /// When the session was started.
    pub started_at: DateTime<Utc>,
    /// When the terminal transition happened, if it has.
    pub completed_at: Option<DateTime<Utc>>,
}
