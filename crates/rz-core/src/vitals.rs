//! Health and resonant strain.
//!
//! A character carries two gauges: health, which starts full and is worn
//! down by harm, and resonant strain, which starts empty and accumulates as
//! the character channels their resonance. Strain reaching its maximum
//! fragments the character; the flag persists until strain is fully eased
//! and the character is mended.

use serde::{Deserialize, Serialize};

/// A bounded resource value between 0 and a fixed maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gauge {
    /// Current value.
    pub current: u32,
    /// Maximum value.
    pub max: u32,
}

impl Gauge {
    /// Create a gauge starting at its maximum.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Create a gauge starting at zero.
    pub fn empty(max: u32) -> Self {
        Self { current: 0, max }
    }

    /// Raise the gauge by an amount, clamping at the maximum. Returns the
    /// new value.
    pub fn raise(&mut self, amount: u32) -> u32 {
        self.current = (self.current + amount).min(self.max);
        self.current
    }

    /// Lower the gauge by an amount, clamping at zero. Returns the new value.
    pub fn lower(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Returns true if the gauge is at zero.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Returns true if the gauge is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// A character's health, strain, and fragmentation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vitals {
    /// Health gauge, starts full.
    pub health: Gauge,
    /// Resonant strain gauge, starts empty.
    pub strain: Gauge,
    /// Set when strain reaches its maximum; cleared only by [`Vitals::mend`].
    pub fragmented: bool,
}

impl Vitals {
    /// Default starting health.
    pub const STARTING_HEALTH: u32 = 10;
    /// Default strain capacity before fragmentation.
    pub const STRAIN_CAPACITY: u32 = 5;

    /// Create vitals at their starting values.
    pub fn new() -> Self {
        Self {
            health: Gauge::full(Self::STARTING_HEALTH),
            strain: Gauge::empty(Self::STRAIN_CAPACITY),
            fragmented: false,
        }
    }

    /// Apply harm to health. Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.lower(amount)
    }

    /// Recover health. Returns the new health value.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.raise(amount)
    }

    /// Accumulate resonant strain. Returns true if the character is now
    /// fragmented.
    pub fn gain_strain(&mut self, amount: u32) -> bool {
        self.strain.raise(amount);
        if self.strain.is_full() {
            self.fragmented = true;
        }
        self.fragmented
    }

    /// Ease strain without touching the fragmented flag.
    pub fn ease_strain(&mut self, amount: u32) {
        self.strain.lower(amount);
    }

    /// Clear the fragmented flag, permitted only once strain is fully
    /// eased. Returns true if the character was mended.
    pub fn mend(&mut self) -> bool {
        if self.strain.is_empty() {
            self.fragmented = false;
            true
        } else {
            false
        }
    }

    /// Returns true if health has run out.
    pub fn is_down(&self) -> bool {
        self.health.is_empty()
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new()
    }
}
