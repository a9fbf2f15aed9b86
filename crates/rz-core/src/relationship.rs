//! Relationships formed with people and factions during play.

use serde::{Deserialize, Serialize};

/// A bond between the character and someone in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Who the bond is with.
    pub name: String,
    /// The nature or strength of the bond.
    pub bond: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(name: impl Into<String>, bond: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bond: bond.into(),
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.bond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let r = Relationship::new("Warden Sel", "wary trust");
        assert_eq!(r.to_string(), "Warden Sel (wary trust)");
    }

    #[test]
    fn serde_roundtrip() {
        let r = Relationship::new("Warden Sel", "wary trust");
        let json = serde_json::to_string(&r).unwrap();
        let r2: Relationship = serde_json::from_str(&json).unwrap();
        assert_eq!(r2.name, "Warden Sel");
    }
}
