//! Permutation parity test deciding whether a board can reach the goal.
//!
//! On a 3x3 board every move shifts a tile by 0 or 2 places in the blank-free
//! reading order, so the parity of the inversion count never changes. Boards
//! with the goal's (even) parity are exactly the reachable half.

use crate::board::{Board, BLANK};

/// Counts pairs of tiles that appear out of order in row-major order, ignoring the blank.
pub fn inversions(board: &Board) -> usize {
    let tiles = board.cells();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(i, &value)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&later| later != BLANK && later < value)
                .count()
        })
        .sum()
}

/// Returns true if some sequence of moves turns `board` into [`Board::GOAL`].
pub fn is_solvable(board: &Board) -> bool {
    inversions(board) % 2 == inversions(&Board::GOAL) % 2
}
