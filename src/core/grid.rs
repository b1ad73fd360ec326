//! 4×4 grid geometry
//!
//! Index arithmetic for the board: `row = index / 4`, `col = index % 4`.
//! Moving off one edge wraps around to the opposite edge of the same row or
//! column.

/// Width and height of the board
pub const GRID_SIZE: usize = 4;

/// Number of tiles on the board
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Row of a tile index
#[inline]
#[must_use]
pub const fn row(index: usize) -> usize {
    index / GRID_SIZE
}

/// Column of a tile index
#[inline]
#[must_use]
pub const fn col(index: usize) -> usize {
    index % GRID_SIZE
}

/// Index reached by moving one cell from `index` with wrap-around
///
/// # Examples
/// ```
/// use connections::core::{Direction, step};
///
/// assert_eq!(step(3, Direction::Right), 0);
/// assert_eq!(step(2, Direction::Up), 14);
/// ```
#[must_use]
pub const fn step(index: usize, direction: Direction) -> usize {
    let row = row(index);
    let col = col(index);
    let last = GRID_SIZE - 1;

    match direction {
        Direction::Right => {
            if col < last {
                index + 1
            } else {
                index - col
            }
        }
        Direction::Left => {
            if col > 0 {
                index - 1
            } else {
                index + last - col
            }
        }
        Direction::Down => {
            if row < last {
                index + GRID_SIZE
            } else {
                col
            }
        }
        Direction::Up => {
            if row > 0 {
                index - GRID_SIZE
            } else {
                GRID_SIZE * last + col
            }
        }
    }
}
