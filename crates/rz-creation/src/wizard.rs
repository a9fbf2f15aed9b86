//! Wizard step progression.
//!
//! Creation walks nine ordered steps from profile entry to completion. Each
//! forward transition is gated by the current step's completion check, which
//! the session supplies; the state machine itself stays pure. Backward
//! movement is always allowed and never forgets completed work.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CreationError, CreationResult};

/// A step in the creation wizard, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Enter concept, background, and motivation.
    Profile,
    /// Checklist overview of the remaining stages.
    Overview,
    /// Draw ten cards and allocate all of them.
    CardAllocation,
    /// Review the attributes derived from the allocated cards.
    AttributesDisplay,
    /// Spend skill points.
    SkillAllocation,
    /// Awaken resonances.
    ResonanceAllocation,
    /// Spend gear points.
    GearAllocation,
    /// Review the fate card.
    FateCardDisplay,
    /// Terminal state; the character is finished.
    Complete,
}

impl Step {
    /// All steps in walk order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Profile,
            Self::Overview,
            Self::CardAllocation,
            Self::AttributesDisplay,
            Self::SkillAllocation,
            Self::ResonanceAllocation,
            Self::GearAllocation,
            Self::FateCardDisplay,
            Self::Complete,
        ]
    }

    /// The eight gated steps, everything before [`Step::Complete`].
    pub fn gated() -> &'static [Self] {
        let all = Self::all();
        &all[..all.len() - 1]
    }

    /// Zero-based position in walk order.
    pub fn index(self) -> usize {
        match self {
            Self::Profile => 0,
            Self::Overview => 1,
            Self::CardAllocation => 2,
            Self::AttributesDisplay => 3,
            Self::SkillAllocation => 4,
            Self::ResonanceAllocation => 5,
            Self::GearAllocation => 6,
            Self::FateCardDisplay => 7,
            Self::Complete => 8,
        }
    }

    /// The step after this one, if any.
    pub fn next(self) -> Option<Self> {
        Self::all().get(self.index() + 1).copied()
    }

    /// The step before this one, if any.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::all()[i])
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile => write!(f, "profile"),
            Self::Overview => write!(f, "overview"),
            Self::CardAllocation => write!(f, "card allocation"),
            Self::AttributesDisplay => write!(f, "attributes"),
            Self::SkillAllocation => write!(f, "skill allocation"),
            Self::ResonanceAllocation => write!(f, "resonance allocation"),
            Self::GearAllocation => write!(f, "gear allocation"),
            Self::FateCardDisplay => write!(f, "fate card"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// The wizard's position and progress flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    current: Step,
    completed: HashSet<Step>,
    in_progress: bool,
}

impl WizardState {
    /// A fresh wizard at the profile step with nothing completed.
    pub fn new() -> Self {
        Self {
            current: Step::Profile,
            completed: HashSet::new(),
            in_progress: true,
        }
    }

    /// The step the wizard is currently on.
    pub fn current(&self) -> Step {
        self.current
    }

    /// False once the terminal transition has happened. Never flips back.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Whether a given step has been completed.
    pub fn is_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    /// Completion flags for every gated step.
    pub fn completed_steps(&self) -> HashMap<Step, bool> {
        Step::gated()
            .iter()
            .map(|s| (*s, self.completed.contains(s)))
            .collect()
    }

    /// Attempt to move forward one step.
    ///
    /// The check receives the current step and returns the reason it is not
    /// yet complete, if any. On a passing check the current step is marked
    /// completed and the wizard moves on, clamping at the terminal step.
    /// The transition into [`Step::Complete`] additionally requires every
    /// gated step to be completed; if any is not, the transition is refused
    /// and the wizard stays where it was. Advancing at the terminal step is
    /// a no-op.
    pub fn advance_with<F>(&mut self, check: F) -> CreationResult<Step>
    where
        F: FnOnce(Step) -> Result<(), String>,
    {
        let Some(next) = self.current.next() else {
            return Ok(self.current);
        };

        check(self.current).map_err(|reason| CreationError::StepIncomplete {
            step: self.current,
            reason,
        })?;
        self.completed.insert(self.current);

        if next == Step::Complete {
            let unfinished: Vec<String> = Step::gated()
                .iter()
                .filter(|s| !self.completed.contains(s))
                .map(|s| s.to_string())
                .collect();
            if !unfinished.is_empty() {
                return Err(CreationError::StepIncomplete {
                    step: Step::Complete,
                    reason: format!("unfinished steps: {}", unfinished.join(", ")),
                });
            }
            self.in_progress = false;
        }

        self.current = next;
        Ok(next)
    }

    /// Move back one step unconditionally, clamping at the first. Completed
    /// flags are left alone.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
        self.current
    }

    /// Jump directly to a step at or before the one right after the
    /// current position. Jumping further ahead, or into the terminal step,
    /// is refused; the terminal step is only reachable through
    /// [`WizardState::advance_with`].
    pub fn jump_to(&mut self, step: Step) -> CreationResult<Step> {
        if step == Step::Complete || step.index() > self.current.index() + 1 {
            return Err(CreationError::StepLocked(step));
        }
        self.current = step;
        Ok(step)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(_: Step) -> Result<(), String> {
        Ok(())
    }

    fn fail(_: Step) -> Result<(), String> {
        Err("not ready".to_string())
    }

    #[test]
    fn fresh_state() {
        let w = WizardState::new();
        assert_eq!(w.current(), Step::Profile);
        assert!(w.is_in_progress());
        assert!(w.completed_steps().values().all(|done| !done));
    }

    #[test]
    fn step_order() {
        assert_eq!(Step::all().len(), 9);
        assert_eq!(Step::gated().len(), 8);
        assert_eq!(Step::Profile.next(), Some(Step::Overview));
        assert_eq!(Step::Complete.next(), None);
        assert_eq!(Step::Profile.prev(), None);
        assert_eq!(Step::Complete.prev(), Some(Step::FateCardDisplay));
    }

    #[test]
    fn advance_marks_completed() {
        let mut w = WizardState::new();
        let next = w.advance_with(pass).unwrap();
        assert_eq!(next, Step::Overview);
        assert!(w.is_completed(Step::Profile));
        assert!(!w.is_completed(Step::Overview));
    }

    #[test]
    fn failed_check_leaves_state_unchanged() {
        let mut w = WizardState::new();
        let err = w.advance_with(fail).unwrap_err();
        assert!(matches!(
            err,
            CreationError::StepIncomplete { step: Step::Profile, .. }
        ));
        assert_eq!(w.current(), Step::Profile);
        assert!(!w.is_completed(Step::Profile));
    }

    #[test]
    fn retreat_clamps_and_keeps_flags() {
        let mut w = WizardState::new();
        w.advance_with(pass).unwrap();
        assert_eq!(w.retreat(), Step::Profile);
        assert_eq!(w.retreat(), Step::Profile);
        assert!(w.is_completed(Step::Profile));
    }

    #[test]
    fn walk_to_completion() {
        let mut w = WizardState::new();
        for _ in 0..8 {
            w.advance_with(pass).unwrap();
        }
        assert_eq!(w.current(), Step::Complete);
        assert!(!w.is_in_progress());
    }

    #[test]
    fn terminal_advance_is_noop() {
        let mut w = WizardState::new();
        for _ in 0..8 {
            w.advance_with(pass).unwrap();
        }
        let again = w
            .advance_with(|_| Err("never called".to_string()))
            .unwrap();
        assert_eq!(again, Step::Complete);
        assert!(!w.is_in_progress());
    }

    #[test]
    fn terminal_transition_requires_all_steps() {
        let mut w = WizardState::new();
        // Skip ahead with jumps, completing only the later steps.
        for _ in 0..6 {
            w.jump_to(w.current().next().unwrap()).unwrap();
        }
        assert_eq!(w.current(), Step::GearAllocation);
        w.advance_with(pass).unwrap();

        let err = w.advance_with(pass).unwrap_err();
        assert!(matches!(
            err,
            CreationError::StepIncomplete { step: Step::Complete, .. }
        ));
        // Rolled back: still on the fate card step, still in progress, but
        // the step's own flag was earned.
        assert_eq!(w.current(), Step::FateCardDisplay);
        assert!(w.is_in_progress());
        assert!(w.is_completed(Step::FateCardDisplay));
    }

    #[test]
    fn jump_forward_one_is_allowed() {
        let mut w = WizardState::new();
        w.jump_to(Step::Overview).unwrap();
        assert_eq!(w.current(), Step::Overview);
    }

    #[test]
    fn jump_backward_is_allowed() {
        let mut w = WizardState::new();
        w.advance_with(pass).unwrap();
        w.advance_with(pass).unwrap();
        w.jump_to(Step::Profile).unwrap();
        assert_eq!(w.current(), Step::Profile);
        assert!(w.is_completed(Step::Overview));
    }

    #[test]
    fn jump_past_horizon_is_locked() {
        let mut w = WizardState::new();
        let err = w.jump_to(Step::SkillAllocation).unwrap_err();
        assert!(matches!(err, CreationError::StepLocked(Step::SkillAllocation)));
        assert_eq!(w.current(), Step::Profile);
    }

    #[test]
    fn jump_to_complete_is_locked() {
        let mut w = WizardState::new();
        for _ in 0..7 {
            w.advance_with(pass).unwrap();
        }
        assert_eq!(w.current(), Step::FateCardDisplay);
        let err = w.jump_to(Step::Complete).unwrap_err();
        assert!(matches!(err, CreationError::StepLocked(Step::Complete)));
    }

    #[test]
    fn serde_roundtrip() {
        let mut w = WizardState::new();
        w.advance_with(pass).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let w2: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(w2.current(), Step::Overview);
        assert!(w2.is_completed(Step::Profile));
        assert!(w2.is_in_progress());
    }
}
