//! Allocation categories and their capacities.
//!
//! Every drawn card ends up in exactly one of five categories. The
//! capacities sum to the hand size, so a fully allocated hand fills every
//! category to capacity exactly.

use serde::{Deserialize, Serialize};

/// A destination for an allocated card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The four attribute cards, one per standard suit.
    Attributes,
    /// The two cards funding skill points.
    Skills,
    /// The single card funding resonance awakening.
    Resonances,
    /// The two cards funding gear points.
    Gear,
    /// The single fate card.
    Fate,
}

impl Category {
    /// All categories in sheet order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Attributes,
            Self::Skills,
            Self::Resonances,
            Self::Gear,
            Self::Fate,
        ]
    }

    /// The maximum number of cards this category accepts.
    pub fn capacity(self) -> usize {
        match self {
            Self::Attributes => 4,
            Self::Skills => 2,
            Self::Resonances => 1,
            Self::Gear => 2,
            Self::Fate => 1,
        }
    }

    /// Try to parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "attributes" => Some(Self::Attributes),
            "skills" => Some(Self::Skills),
            "resonances" => Some(Self::Resonances),
            "gear" => Some(Self::Gear),
            "fate" => Some(Self::Fate),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attributes => write!(f, "attributes"),
            Self::Skills => write!(f, "skills"),
            Self::Resonances => write!(f, "resonances"),
            Self::Gear => write!(f, "gear"),
            Self::Fate => write!(f, "fate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rz_cards::HAND_SIZE;

    use super::*;

    #[test]
    fn capacities_sum_to_hand_size() {
        let total: usize = Category::all().iter().map(|c| c.capacity()).sum();
        assert_eq!(total, HAND_SIZE);
    }

    #[test]
    fn parse_roundtrip() {
        for cat in Category::all() {
            assert_eq!(Category::parse(&cat.to_string()), Some(*cat));
        }
        assert_eq!(Category::parse("loot"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::Fate).unwrap();
        assert_eq!(json, "\"fate\"");
    }
}
