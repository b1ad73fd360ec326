//! The 16-tile board
//!
//! Owns tile order and per-tile flags. The multiset of `(text, group)` pairs
//! never changes during a round; only positions and flags do.

use crate::content::Puzzle;
use crate::core::{GROUP_COUNT, GroupId, Tile};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// The grid of tiles for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Lay out a puzzle's words in a random order
    pub fn shuffled<R: Rng + ?Sized>(puzzle: &Puzzle, rng: &mut R) -> Self {
        let mut tiles: Vec<Tile> = puzzle
            .words()
            .iter()
            .map(|(text, group)| Tile::new(text.clone(), *group))
            .collect();
        tiles.shuffle(rng);
        Self { tiles }
    }

    /// Lay out a puzzle's words in definition order
    #[must_use]
    pub fn ordered(puzzle: &Puzzle) -> Self {
        let tiles = puzzle
            .words()
            .iter()
            .map(|(text, group)| Tile::new(text.clone(), *group))
            .collect();
        Self { tiles }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    #[inline]
    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Indices of tiles not yet solved, in board order
    #[must_use]
    pub fn unsolved_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_solved())
            .map(|(i, _)| i)
            .collect()
    }

    /// Unsolved tile indices grouped by group id
    ///
    /// Keys iterate in ascending group order; indices in board order.
    #[must_use]
    pub fn unsolved_groups(&self) -> BTreeMap<GroupId, Vec<usize>> {
        let mut groups: BTreeMap<GroupId, Vec<usize>> = BTreeMap::new();
        for (i, tile) in self.tiles.iter().enumerate() {
            if !tile.is_solved() {
                groups.entry(tile.group()).or_default().push(i);
            }
        }
        groups
    }

    /// Permute the tiles sitting on unsolved positions
    ///
    /// Solved tiles keep their index. The permutation over the unsolved
    /// positions is uniform.
    pub fn shuffle_unsolved<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let positions = self.unsolved_indices();
        let mut order = positions.clone();
        order.shuffle(rng);

        let moved: Vec<Tile> = order.iter().map(|&i| self.tiles[i].clone()).collect();
        for (&slot, tile) in positions.iter().zip(moved) {
            self.tiles[slot] = tile;
        }
    }

    /// Clear every `selected` flag
    pub(crate) fn clear_selected(&mut self) {
        for tile in &mut self.tiles {
            tile.set_selected(false);
        }
    }

    /// Put the `focused` flag on exactly one tile
    pub(crate) fn focus_only(&mut self, index: usize) {
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            tile.set_focused(i == index);
        }
    }

    /// Number of tiles belonging to each group
    #[must_use]
    pub fn group_sizes(&self) -> [usize; GROUP_COUNT] {
        let mut sizes = [0; GROUP_COUNT];
        for tile in &self.tiles {
            sizes[tile.group().index()] += 1;
        }
        sizes
    }
}
