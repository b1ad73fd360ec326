//! Ordered tile selection capped at one group's worth of tiles

use crate::core::GROUP_SIZE;

/// Tile indices the player has picked but not yet submitted
///
/// Keeps pick order, never holds an index twice and never grows past four.
/// A fifth pick is refused rather than evicting an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            indices: Vec::with_capacity(GROUP_SIZE),
        }
    }

    /// Add an index; returns `false` if already present or the selection is full
    pub fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) || self.is_full() {
            return false;
        }
        self.indices.push(index);
        true
    }

    /// Remove an index; returns `false` if it was not selected
    pub fn remove(&mut self, index: usize) -> bool {
        let before = self.indices.len();
        self.indices.retain(|&i| i != index);
        self.indices.len() != before
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.indices.len() == GROUP_SIZE
    }

    /// Selected indices in pick order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// The four picked indices, once the selection is full
    #[must_use]
    pub fn as_group(&self) -> Option<[usize; GROUP_SIZE]> {
        self.indices.as_slice().try_into().ok()
    }

    /// Empty the selection, returning what was in it
    pub fn take(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_pick_order() {
        let mut selection = Selection::new();
        assert!(selection.insert(7));
        assert!(selection.insert(2));
        assert!(selection.insert(11));
        assert_eq!(selection.as_slice(), &[7, 2, 11]);
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut selection = Selection::new();
        assert!(selection.insert(4));
        assert!(!selection.insert(4));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn fifth_pick_is_refused() {
        let mut selection = Selection::new();
        for i in 0..4 {
            assert!(selection.insert(i));
        }
        assert!(selection.is_full());
        assert!(!selection.insert(9));
        assert_eq!(selection.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut selection = Selection::new();
        for i in [5, 6, 7] {
            selection.insert(i);
        }
        assert!(selection.remove(6));
        assert!(!selection.remove(6));
        assert_eq!(selection.as_slice(), &[5, 7]);
    }

    #[test]
    fn as_group_only_when_full() {
        let mut selection = Selection::new();
        selection.insert(1);
        selection.insert(2);
        selection.insert(3);
        assert_eq!(selection.as_group(), None);
        selection.insert(4);
        assert_eq!(selection.as_group(), Some([1, 2, 3, 4]));
    }

    #[test]
    fn take_empties() {
        let mut selection = Selection::new();
        selection.insert(3);
        assert_eq!(selection.take(), vec![3]);
        assert!(selection.is_empty());
    }
}
