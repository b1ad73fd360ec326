//! Keyboard focus navigation
//!
//! Resolves a cursor input against the board without mutating it. A move
//! whose target tile is solved is refused outright; the cursor never skips
//! ahead looking for the next open tile.

use super::Board;
use crate::core::{Direction, step};

/// Cursor input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavInput {
    Move(Direction),
    /// Toggle the tile under the cursor
    Confirm,
}

/// What an input resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move the cursor to this index
    Focus(usize),
    /// Toggle selection of this index; the cursor stays
    Toggle(usize),
    /// Refused; nothing changes
    Stay,
}

/// Resolve `input` for a cursor at `focus`
#[must_use]
pub fn resolve(board: &Board, focus: usize, input: NavInput) -> NavAction {
    match input {
        NavInput::Confirm => NavAction::Toggle(focus),
        NavInput::Move(direction) => {
            let target = step(focus, direction);
            match board.tile(target) {
                Some(tile) if !tile.is_solved() => NavAction::Focus(target),
                _ => NavAction::Stay,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Mode, Puzzle};

    fn board_with_solved(solved: &[usize]) -> Board {
        let mut board = Board::ordered(&Puzzle::for_mode(Mode::Easy));
        for &i in solved {
            if let Some(tile) = board.tile_mut(i) {
                tile.finish_collapse();
            }
        }
        board
    }

    #[test]
    fn right_from_row_end_wraps() {
        let board = board_with_solved(&[]);
        assert_eq!(
            resolve(&board, 3, NavInput::Move(Direction::Right)),
            NavAction::Focus(0)
        );
    }

    #[test]
    fn up_from_top_row_wraps() {
        let board = board_with_solved(&[]);
        assert_eq!(
            resolve(&board, 2, NavInput::Move(Direction::Up)),
            NavAction::Focus(14)
        );
    }

    #[test]
    fn move_onto_solved_tile_is_refused() {
        let board = board_with_solved(&[5]);
        assert_eq!(
            resolve(&board, 4, NavInput::Move(Direction::Right)),
            NavAction::Stay
        );
        assert_eq!(
            resolve(&board, 1, NavInput::Move(Direction::Down)),
            NavAction::Stay
        );
    }

    #[test]
    fn refusal_does_not_skip_ahead() {
        // 5 is solved, 6 is open; moving right from 4 must not land on 6
        let board = board_with_solved(&[5]);
        assert_ne!(
            resolve(&board, 4, NavInput::Move(Direction::Right)),
            NavAction::Focus(6)
        );
    }

    #[test]
    fn confirm_toggles_in_place() {
        let board = board_with_solved(&[]);
        assert_eq!(resolve(&board, 9, NavInput::Confirm), NavAction::Toggle(9));
    }
}
