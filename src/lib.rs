//! 8-Puzzle Solver Library
//!
//! Solves the 3x3 sliding tile puzzle by searching its state graph. A parity
//! check rejects unreachable starts up front; solvable starts are handed to
//! one of several strategies sharing a single move generator:
//!
//! - A* with the Manhattan-distance or misplaced-tile heuristic
//! - breadth-first and depth-first search over an explicit frontier
//! - backtracking with a global visited set
//! - iterative deepening with path-scoped visits
//!
//! ```
//! use eight_puzzle::{solve, Board, Strategy};
//!
//! let start: Board = "478 365 120".parse().unwrap();
//! let solution = solve(&start, Strategy::default()).unwrap();
//! assert_eq!(solution.path().last(), Some(&Board::GOAL));
//! ```

pub mod board;
mod frontier;
pub mod heuristic;
mod search;
pub mod solvability;
pub mod solver;
mod tree;

#[cfg(test)]
mod testing;

pub use board::{format_path, Board, BoardError, Direction};
pub use heuristic::Heuristic;
pub use solvability::is_solvable;
pub use solver::{
    solve, SearchStats, Solution, SolveError, Solver, Strategy, DEFAULT_DEPTH_LIMIT,
};
