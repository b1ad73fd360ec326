//! Game configuration
//!
//! Assembled from command-line flags in the binary; `Default` gives the
//! standard rules.

use crate::content::Mode;
use std::time::Duration;

/// Wrong guesses allowed before the round is lost
pub const DEFAULT_MAX_MISTAKES: u32 = 4;

/// Time a correct group takes to collapse into a solved row
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(700);

/// Time the board shakes after a wrong guess
pub const SHAKE_DELAY: Duration = Duration::from_millis(500);

/// Time the "one away" hint stays up
pub const NEAR_MISS_DELAY: Duration = Duration::from_millis(3000);

/// Delays for the board's feedback animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub collapse: Duration,
    pub shake: Duration,
    pub near_miss: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            collapse: COLLAPSE_DELAY,
            shake: SHAKE_DELAY,
            near_miss: NEAR_MISS_DELAY,
        }
    }
}

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub max_mistakes: u32,
    pub timings: Timings,
    /// Seed for tile shuffling; `None` draws from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Wrong guesses allowed, at least one
    #[must_use]
    pub const fn with_max_mistakes(mut self, max_mistakes: u32) -> Self {
        self.max_mistakes = if max_mistakes == 0 { 1 } else { max_mistakes };
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            max_mistakes: DEFAULT_MAX_MISTAKES,
            timings: Timings::default(),
            seed: None,
        }
    }
}
