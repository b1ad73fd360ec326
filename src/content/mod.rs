//! Puzzle content
//!
//! Supplies the fixed word/group definition for each mode. Built-in sets are
//! shaped as four groups of four words at the type level; [`Puzzle::new`]
//! checks the same shape for content assembled at runtime.

mod embedded;

pub use embedded::{EASY, HARD};

use crate::core::{GROUP_COUNT, GROUP_SIZE, Group, GroupColor, GroupId, TILE_COUNT};
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Which content set populates a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Mode {
    #[default]
    Easy,
    Hard,
}

impl Mode {
    /// The built-in content set for this mode
    #[must_use]
    pub const fn content(self) -> &'static ContentSet {
        match self {
            Self::Easy => &EASY,
            Self::Hard => &HARD,
        }
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Static description of one group
#[derive(Debug, Clone, Copy)]
pub struct GroupSpec {
    pub name: &'static str,
    pub color: GroupColor,
    pub difficulty: u8,
    pub words: [&'static str; GROUP_SIZE],
}

/// Static description of a whole puzzle
#[derive(Debug, Clone, Copy)]
pub struct ContentSet {
    pub groups: [GroupSpec; GROUP_COUNT],
}

/// Reasons runtime content can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("puzzle needs exactly 4 groups, got {0}")]
    GroupCount(usize),
    #[error("puzzle needs exactly 16 words, got {0}")]
    WordCount(usize),
    #[error("word '{word}' refers to group {group}, which does not exist")]
    UnknownGroup { word: String, group: GroupId },
    #[error("group {group} has {count} words, expected 4")]
    GroupSize { group: GroupId, count: usize },
    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),
}

/// A validated puzzle: four groups and the sixteen words that belong to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    groups: Vec<Group>,
    words: Vec<(String, GroupId)>,
}

impl Puzzle {
    /// Build a puzzle from runtime data
    ///
    /// # Errors
    /// Returns `ContentError` if the groups are not exactly four, the words
    /// are not exactly sixteen, a word points at a missing group, a group does
    /// not own exactly four words, or a word is repeated (case-insensitive).
    pub fn new(groups: Vec<Group>, words: Vec<(String, GroupId)>) -> Result<Self, ContentError> {
        if groups.len() != GROUP_COUNT {
            return Err(ContentError::GroupCount(groups.len()));
        }
        if words.len() != TILE_COUNT {
            return Err(ContentError::WordCount(words.len()));
        }

        let mut counts = [0usize; GROUP_COUNT];
        let mut seen = FxHashSet::default();
        for (word, group) in &words {
            if group.index() >= groups.len() {
                return Err(ContentError::UnknownGroup {
                    word: word.clone(),
                    group: *group,
                });
            }
            if !seen.insert(word.to_lowercase()) {
                return Err(ContentError::DuplicateWord(word.clone()));
            }
            counts[group.index()] += 1;
        }

        if let Some(group) = GroupId::all().find(|g| counts[g.index()] != GROUP_SIZE) {
            return Err(ContentError::GroupSize {
                group,
                count: counts[group.index()],
            });
        }

        Ok(Self { groups, words })
    }

    /// The built-in puzzle for a mode
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        Self::from_set(mode.content())
    }

    /// Expand a static content set
    ///
    /// Infallible: the set's array shape already fixes four groups of four.
    #[must_use]
    pub fn from_set(set: &ContentSet) -> Self {
        let groups = set
            .groups
            .iter()
            .map(|spec| Group::new(spec.name, spec.color, spec.difficulty))
            .collect();

        let words = set
            .groups
            .iter()
            .zip(GroupId::all())
            .flat_map(|(spec, id)| spec.words.iter().map(move |w| ((*w).to_string(), id)))
            .collect();

        Self { groups, words }
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Words with their group, in definition order (unshuffled)
    #[must_use]
    pub fn words(&self) -> &[(String, GroupId)] {
        &self.words
    }

    #[must_use]
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.index()]
    }
}
