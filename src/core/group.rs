//! Puzzle groups
//!
//! A group is one of the four hidden categories. Each owns exactly four tiles.

use std::fmt;

/// Number of groups in every puzzle
pub const GROUP_COUNT: usize = 4;

/// Number of words belonging to each group
pub const GROUP_SIZE: usize = 4;

/// Identifier of a group within a puzzle (0-3)
///
/// Ordering follows the natural id order, which is also the order used for
/// unsolved groups in the endgame summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u8);

impl GroupId {
    /// Create a group id
    ///
    /// # Panics
    /// Panics in debug mode if `value >= 4`
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!((value as usize) < GROUP_COUNT, "GroupId must be < 4");
        Self(value)
    }

    /// Create a group id from an index, returning `None` when out of range
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&v| (v as usize) < GROUP_COUNT)
            .map(Self)
    }

    /// Position of this group in the puzzle's group list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All group ids in natural order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GROUP_COUNT as u8).map(Self)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Colour token shown when a group is solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupColor {
    Lime,
    Sand,
    Rose,
    Sky,
}

impl GroupColor {
    /// RGB value of the token
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Lime => (0xb5, 0xd6, 0x82),
            Self::Sand => (0xf7, 0xe0, 0x7e),
            Self::Rose => (0xf9, 0xb5, 0xd1),
            Self::Sky => (0xb5, 0xc7, 0xf7),
        }
    }

    /// CSS-style hex string, e.g. `#b5d682`
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// A hidden category of the puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    color: GroupColor,
    difficulty: u8,
}

impl Group {
    /// Create a group
    ///
    /// `difficulty` runs from 0 (easiest) to 3 (hardest).
    pub fn new(name: impl Into<String>, color: GroupColor, difficulty: u8) -> Self {
        Self {
            name: name.into(),
            color,
            difficulty,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> GroupColor {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }
}
