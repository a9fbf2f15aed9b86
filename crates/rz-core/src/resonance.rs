//! Resonances: the powers over fate a character may awaken.
//!
//! The system ships four named resonances. A character may also carry a
//! free-text unique resonance power earned in play. Character creation
//! requires at least one awakened resonance or a unique power.

use serde::{Deserialize, Serialize};

/// One of the four named resonances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resonance {
    /// Glimpse branching outcomes before committing to one.
    EchoOfPossibility,
    /// Stretch or compress the flow of a moment.
    ChronoFlux,
    /// See through the veil to what is really there.
    VeilPierce,
    /// Burn strain for raw power.
    ResonantOverload,
}

impl Resonance {
    /// All resonances in sheet order.
    pub fn all() -> &'static [Self] {
        &[
            Self::EchoOfPossibility,
            Self::ChronoFlux,
            Self::VeilPierce,
            Self::ResonantOverload,
        ]
    }

    /// Try to parse a resonance from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "echo of possibility" | "echo" => Some(Self::EchoOfPossibility),
            "chrono flux" | "chronoflux" => Some(Self::ChronoFlux),
            "veil pierce" | "veilpierce" => Some(Self::VeilPierce),
            "resonant overload" | "overload" => Some(Self::ResonantOverload),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resonance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EchoOfPossibility => write!(f, "Echo of Possibility"),
            Self::ChronoFlux => write!(f, "Chrono-Flux"),
            Self::VeilPierce => write!(f, "Veil Pierce"),
            Self::ResonantOverload => write!(f, "Resonant Overload"),
        }
    }
}

/// The resonances a character has awakened, plus any unique power.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResonanceSet {
    awakened: Vec<Resonance>,
    unique_power: Option<String>,
}

impl ResonanceSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Awaken a resonance. Returns false if it was already awakened.
    pub fn awaken(&mut self, r: Resonance) -> bool {
        if self.awakened.contains(&r) {
            return false;
        }
        self.awakened.push(r);
        true
    }

    /// Suppress an awakened resonance. Returns false if it was not awakened.
    pub fn suppress(&mut self, r: Resonance) -> bool {
        let before = self.awakened.len();
        self.awakened.retain(|a| *a != r);
        self.awakened.len() < before
    }

    /// Returns true if the given resonance is awakened.
    pub fn is_awakened(&self, r: Resonance) -> bool {
        self.awakened.contains(&r)
    }

    /// The awakened resonances in awakening order.
    pub fn awakened(&self) -> &[Resonance] {
        &self.awakened
    }

    /// Set or clear the unique resonance power. Whitespace-only text clears.
    pub fn set_unique_power(&mut self, power: impl Into<String>) {
        let power = power.into();
        if power.trim().is_empty() {
            self.unique_power = None;
        } else {
            self.unique_power = Some(power);
        }
    }

    /// The unique resonance power, if one has been earned.
    pub fn unique_power(&self) -> Option<&str> {
        self.unique_power.as_deref()
    }

    /// Returns true if at least one resonance is awakened or a unique
    /// power is named.
    pub fn has_selection(&self) -> bool {
        !self.awakened.is_empty() || self.unique_power.is_some()
    }
}
