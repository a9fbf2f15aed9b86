//! Configuration for a character-creation session.

use serde::{Deserialize, Serialize};

use rz_cards::MAX_DRAW_ATTEMPTS;

/// Configuration for a creation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationConfig {
    /// RNG seed for reproducible draws.
    pub seed: u64,
    /// Shuffle-and-check attempts before the draw falls back to the
    /// constructive path.
    pub max_draw_attempts: u32,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_draw_attempts: MAX_DRAW_ATTEMPTS,
        }
    }
}

impl CreationConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the draw attempt bound.
    pub fn with_max_draw_attempts(mut self, attempts: u32) -> Self {
        self.max_draw_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = CreationConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.max_draw_attempts, 500);
    }

    #[test]
    fn builder_methods() {
        let cfg = CreationConfig::default()
            .with_seed(7)
            .with_max_draw_attempts(10);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.max_draw_attempts, 10);
    }
}
