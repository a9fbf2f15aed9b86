//! Character profile text fields.
//!
//! Concept, background, and motivation are the three free-text fields a
//! player must fill in before the creation wizard will move past its first
//! step. Whitespace-only input does not count as filled in.

use serde::{Deserialize, Serialize};

/// The three required profile fields of a character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// One-line description of who the character is.
    pub concept: String,
    /// Where the character comes from.
    pub background: String,
    /// What drives the character.
    pub motivation: String,
}

impl Profile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all three fields contain non-whitespace text.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.concept.trim().is_empty() {
            missing.push("concept");
        }
        if self.background.trim().is_empty() {
            missing.push("background");
        }
        if self.motivation.trim().is_empty() {
            missing.push("motivation");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Profile {
        Profile {
            concept: "Haunted archivist".to_string(),
            background: "Grew up in the undercity stacks".to_string(),
            motivation: "Find the source of the resonance".to_string(),
        }
    }

    #[test]
    fn empty_profile_incomplete() {
        let p = Profile::new();
        assert!(!p.is_complete());
        assert_eq!(
            p.missing_fields(),
            vec!["concept", "background", "motivation"]
        );
    }

    #[test]
    fn filled_profile_complete() {
        let p = filled();
        assert!(p.is_complete());
        assert!(p.missing_fields().is_empty());
    }

    #[test]
    fn whitespace_does_not_count() {
        let mut p = filled();
        p.background = "   ".to_string();
        assert!(!p.is_complete());
        assert_eq!(p.missing_fields(), vec!["background"]);
    }

    #[test]
    fn serde_roundtrip() {
        let p = filled();
        let json = serde_json::to_string(&p).unwrap();
        let p2: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(p2.concept, p.concept);
        assert!(p2.is_complete());
    }
}
