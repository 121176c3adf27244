//! Admissible estimates of the remaining move count.

use crate::board::{idx_to_coord, Board, BLANK};

/// Heuristic used to order the A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Heuristic {
    /// Sum of each tile's grid distance to its goal cell.
    #[default]
    #[display("manhattan")]
    Manhattan,
    /// Number of tiles outside their goal cell.
    #[display("misplaced")]
    Misplaced,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Misplaced];

    /// Estimates the number of moves from `board` to `goal`.
    #[inline]
    pub fn estimate(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board, goal),
            Heuristic::Misplaced => misplaced_tiles(board, goal),
        }
    }
}

/// Sums, over all non-blank tiles, the row and column distance to the tile's goal cell.
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let targets = goal.positions();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(cell_index, &value)| {
            let (row, col) = idx_to_coord(cell_index);
            let (goal_row, goal_col) = idx_to_coord(targets[value as usize] as usize);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}

/// Counts non-blank tiles that are not in their goal cell.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    board
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|&(&value, &target)| value != BLANK && value != target)
        .count() as u32
}
