//! Round outcome state machine

use std::fmt;

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossReason {
    /// The mistake budget ran out
    OutOfMistakes,
    /// The player gave up
    GaveUp,
}

/// Where a round stands
///
/// `Won` and `Lost` are terminal; only a reset leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost(LossReason),
}

impl Phase {
    #[inline]
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !self.is_playing()
    }

    #[inline]
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    #[inline]
    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost(LossReason::OutOfMistakes) => write!(f, "lost"),
            Self::Lost(LossReason::GaveUp) => write!(f, "gave up"),
        }
    }
}
