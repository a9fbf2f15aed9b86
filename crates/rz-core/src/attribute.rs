//! The four suit-linked attributes.
//!
//! Every attribute corresponds to one standard card suit: Physical to
//! diamonds, Social to hearts, Spiritual to spades, Intellectual to clubs.
//! Ranks are derived from the cards allocated during character creation.

use serde::{Deserialize, Serialize};

/// One of the four character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Body, endurance, and physical action (diamonds).
    Physical,
    /// Presence, empathy, and influence (hearts).
    Social,
    /// Will, intuition, and resonance sensitivity (spades).
    Spiritual,
    /// Reason, memory, and analysis (clubs).
    Intellectual,
}

impl AttributeKind {
    /// All attributes in declaration order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Physical,
            Self::Social,
            Self::Spiritual,
            Self::Intellectual,
        ]
    }

    /// The suit symbol printed next to this attribute on the sheet.
    pub fn symbol(self) -> char {
        match self {
            Self::Physical => '♦',
            Self::Social => '♥',
            Self::Spiritual => '♠',
            Self::Intellectual => '♣',
        }
    }

    /// Try to parse an attribute from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "physical" => Some(Self::Physical),
            "social" => Some(Self::Social),
            "spiritual" => Some(Self::Spiritual),
            "intellectual" => Some(Self::Intellectual),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical => write!(f, "Physical"),
            Self::Social => write!(f, "Social"),
            Self::Spiritual => write!(f, "Spiritual"),
            Self::Intellectual => write!(f, "Intellectual"),
        }
    }
}

/// Rank values for all four attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    /// Physical rank.
    pub physical: u32,
    /// Social rank.
    pub social: u32,
    /// Spiritual rank.
    pub spiritual: u32,
    /// Intellectual rank.
    pub intellectual: u32,
}

impl Attributes {
    /// Create a new attribute block with all ranks at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rank of one attribute.
    pub fn rank(&self, kind: AttributeKind) -> u32 {
        match kind {
            AttributeKind::Physical => self.physical,
            AttributeKind::Social => self.social,
            AttributeKind::Spiritual => self.spiritual,
            AttributeKind::Intellectual => self.intellectual,
        }
    }

    /// Set the rank of one attribute.
    pub fn set_rank(&mut self, kind: AttributeKind, rank: u32) {
        match kind {
            AttributeKind::Physical => self.physical = rank,
            AttributeKind::Social => self.social = rank,
            AttributeKind::Spiritual => self.spiritual = rank,
            AttributeKind::Intellectual => self.intellectual = rank,
        }
    }

    /// Returns true if any attribute still has rank zero.
    pub fn any_unset(&self) -> bool {
        AttributeKind::all().iter().any(|k| self.rank(*k) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_in_order() {
        let kinds = AttributeKind::all();
        assert_eq!(kinds.len(), 4);
        assert_eq!(kinds[0], AttributeKind::Physical);
        assert_eq!(kinds[3], AttributeKind::Intellectual);
    }

    #[test]
    fn symbols() {
        assert_eq!(AttributeKind::Physical.symbol(), '♦');
        assert_eq!(AttributeKind::Social.symbol(), '♥');
        assert_eq!(AttributeKind::Spiritual.symbol(), '♠');
        assert_eq!(AttributeKind::Intellectual.symbol(), '♣');
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(AttributeKind::parse("Physical"), Some(AttributeKind::Physical));
        assert_eq!(AttributeKind::parse("SOCIAL"), Some(AttributeKind::Social));
        assert_eq!(AttributeKind::parse("nonsense"), None);
    }

    #[test]
    fn rank_get_set() {
        let mut a = Attributes::new();
        assert!(a.any_unset());
        for (i, kind) in AttributeKind::all().iter().enumerate() {
            a.set_rank(*kind, (i + 2) as u32);
        }
        assert_eq!(a.rank(AttributeKind::Physical), 2);
        assert_eq!(a.rank(AttributeKind::Intellectual), 5);
        assert!(!a.any_unset());
    }

    #[test]
    fn serde_roundtrip() {
        let mut a = Attributes::new();
        a.set_rank(AttributeKind::Spiritual, 11);
        let json = serde_json::to_string(&a).unwrap();
        let a2: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(a2.rank(AttributeKind::Spiritual), 11);
    }
}
