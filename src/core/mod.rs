//! Core domain types for the puzzle
//!
//! Tiles, groups and grid geometry. Everything here is plain data with no
//! knowledge of rounds, timers or rendering.

mod grid;
mod group;
mod tile;

pub use grid::{Direction, GRID_SIZE, TILE_COUNT, col, row, step};
pub use group::{GROUP_COUNT, GROUP_SIZE, Group, GroupColor, GroupId};
pub use tile::Tile;
