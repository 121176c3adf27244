//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::OnceLock;

use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::{Board, Direction, CELLS};

/// Exact move distance to the goal for every reachable board.
///
/// Built once by breadth-first search outward from the goal; moves are
/// reversible, so distance from the goal equals distance to it.
pub(crate) fn goal_distances() -> &'static FxHashMap<Board, u32> {
    static DISTANCES: OnceLock<FxHashMap<Board, u32>> = OnceLock::new();
    DISTANCES.get_or_init(|| {
        let mut distances = FxHashMap::default();
        let mut queue = VecDeque::from([Board::GOAL]);
        distances.insert(Board::GOAL, 0);

        while let Some(board) = queue.pop_front() {
            let next_distance = distances[&board] + 1;
            for next in board.neighbors() {
                if !distances.contains_key(&next) {
                    distances.insert(next, next_distance);
                    queue.push_back(next);
                }
            }
        }

        assert_eq!(distances.len(), 181_440);
        distances
    })
}

/// Calls `visit` with every arrangement of the nine tiles.
pub(crate) fn for_each_permutation(mut visit: impl FnMut(Board)) {
    fn place(cells: &mut [u8; CELLS], used: &mut [bool; CELLS], filled: usize, visit: &mut dyn FnMut(Board)) {
        if filled == CELLS {
            visit(Board::from_cells(*cells).unwrap());
            return;
        }
        for value in 0..CELLS {
            if !used[value] {
                used[value] = true;
                cells[filled] = value as u8;
                place(cells, used, filled + 1, visit);
                used[value] = false;
            }
        }
    }

    place(&mut [0; CELLS], &mut [false; CELLS], 0, &mut visit);
}

/// Applies moves to the goal, each step an index into [`Direction::ALL`].
///
/// Steps that would push the blank off the grid are skipped.
pub(crate) fn scramble(steps: &[usize]) -> Board {
    steps.iter().fold(Board::GOAL, |board, &step| {
        board
            .slide(Direction::ALL[step % Direction::ALL.len()])
            .unwrap_or(board)
    })
}

/// Checks that `path` starts at `start`, ends at the goal, moves one slide at a
/// time, and never repeats a board.
pub(crate) fn assert_valid_path(path: &[Board], start: &Board) {
    assert_eq!(path.first(), Some(start), "Path must begin at the start board");
    assert_eq!(path.last(), Some(&Board::GOAL), "Path must end at the goal");

    for pair in path.windows(2) {
        assert!(
            pair[0].direction_to(&pair[1]).is_some(),
            "{:?} -> {:?} is not a single move",
            pair[0],
            pair[1]
        );
    }

    let unique: FxHashSet<&Board> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "Path revisits a board");
}

/// Any permutation of the tiles, solvable or not.
pub(crate) fn arb_board() -> impl Strategy<Value = Board> {
    Just((0..CELLS as u8).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|cells| {
            let cells: [u8; CELLS] = cells.try_into().unwrap();
            Board::from_cells(cells).unwrap()
        })
}

/// A reachable board produced by up to `max_steps` random moves from the goal.
pub(crate) fn arb_scramble(max_steps: usize) -> impl Strategy<Value = Board> {
    proptest::collection::vec(0..Direction::ALL.len(), 0..=max_steps).prop_map(|steps| scramble(&steps))
}
