//! Board tiles
//!
//! A tile is one word cell of the 4×4 grid together with its display flags.

use super::GroupId;
use std::fmt;

/// A single word cell on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    text: String,
    group: GroupId,
    selected: bool,
    solved: bool,
    animating: bool,
    focused: bool,
}

impl Tile {
    /// Create an unflagged tile
    pub fn new(text: impl Into<String>, group: GroupId) -> Self {
        Self {
            text: text.into(),
            group,
            selected: false,
            solved: false,
            animating: false,
            focused: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn group(&self) -> GroupId {
        self.group
    }

    #[inline]
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// True while the tile is collapsing into a solved group
    #[inline]
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    #[inline]
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the player may pick this tile right now
    #[inline]
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.solved && !self.animating
    }

    /// Accessible label: the word, then ", selected" and/or ", solved"
    ///
    /// # Examples
    /// ```
    /// use connections::core::{GroupId, Tile};
    ///
    /// let tile = Tile::new("Lime", GroupId::new(1));
    /// assert_eq!(tile.label(), "Lime");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.text.clone();
        if self.selected {
            label.push_str(", selected");
        }
        if self.solved {
            label.push_str(", solved");
        }
        label
    }

    pub(crate) const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Start the collapse animation; the tile leaves the selection
    pub(crate) const fn begin_collapse(&mut self) {
        self.animating = true;
        self.selected = false;
    }

    /// Finish the collapse animation, marking the tile solved
    pub(crate) const fn finish_collapse(&mut self) {
        self.animating = false;
        self.solved = true;
    }

    /// Drop the collapse animation without solving
    pub(crate) const fn cancel_collapse(&mut self) {
        self.animating = false;
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_has_no_flags() {
        let tile = Tile::new("Paris", GroupId::new(3));
        assert_eq!(tile.text(), "Paris");
        assert_eq!(tile.group(), GroupId::new(3));
        assert!(!tile.is_selected());
        assert!(!tile.is_solved());
        assert!(!tile.is_animating());
        assert!(!tile.is_focused());
        assert!(tile.is_selectable());
    }

    #[test]
    fn label_includes_selected_and_solved() {
        let mut tile = Tile::new("Rome", GroupId::new(3));
        tile.set_selected(true);
        assert_eq!(tile.label(), "Rome, selected");

        tile.begin_collapse();
        tile.finish_collapse();
        assert_eq!(tile.label(), "Rome, solved");
    }

    #[test]
    fn collapse_clears_selection_and_blocks_picking() {
        let mut tile = Tile::new("Dog", GroupId::new(2));
        tile.set_selected(true);
        tile.begin_collapse();
        assert!(!tile.is_selected());
        assert!(tile.is_animating());
        assert!(!tile.is_selectable());

        tile.cancel_collapse();
        assert!(tile.is_selectable());
        assert!(!tile.is_solved());
    }
}
