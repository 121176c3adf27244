//! Caller-facing entry points: strategy selection, the parity gate, and results.

use std::collections::VecDeque;
use std::fmt;

use log::debug;

use crate::board::{Board, Direction};
use crate::frontier::CostHeap;
use crate::heuristic::Heuristic;
use crate::search::{self, SearchResult};
use crate::solvability::is_solvable;
use crate::tree::NodeId;

/// Deepest bound tried by iterative deepening.
///
/// Every solvable 3x3 board is at most 31 moves from the goal.
pub const DEFAULT_DEPTH_LIMIT: u32 = 31;

/// Search strategy used to explore the puzzle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Strategy {
    /// Best-first on `f = g + h`; optimal with either heuristic.
    #[display("A* ({_0})")]
    AStar(Heuristic),
    /// FIFO frontier; optimal since every move costs one.
    #[display("breadth-first")]
    BreadthFirst,
    /// LIFO frontier; returns the first solution found.
    #[display("depth-first")]
    DepthFirst,
    /// Explicit-stack depth-first walk with a global visited set.
    #[display("backtracking")]
    Backtracking,
    /// Depth-limited walks with growing bounds; optimal.
    #[display("iterative deepening")]
    IterativeDeepening,
}

impl Strategy {
    /// Every strategy, with A* once per heuristic.
    pub const ALL: [Strategy; 6] = [
        Strategy::AStar(Heuristic::Manhattan),
        Strategy::AStar(Heuristic::Misplaced),
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Backtracking,
        Strategy::IterativeDeepening,
    ];

    /// Whether the strategy always returns a shortest solution.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Strategy::DepthFirst | Strategy::Backtracking)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AStar(Heuristic::default())
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Nodes created for successors.
    pub generated: usize,
    /// Largest frontier (or walk stack) seen.
    pub peak_frontier: usize,
}

/// Why a search produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The start has the wrong permutation parity; no search was run.
    #[display("Puzzle is not solvable")]
    Unsolvable,
    /// Every reachable board was expanded without meeting the goal.
    #[display("No solution found")]
    Exhausted { expanded: usize },
    /// Iterative deepening gave up at its ceiling.
    #[display("No solution found within depth limit {limit}")]
    DepthLimit { limit: u32 },
}

/// A path from the start board to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Board>,
    stats: SearchStats,
    strategy: Strategy,
}

impl Solution {
    /// Boards from start to goal, inclusive.
    pub fn path(&self) -> &[Board] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Board> {
        self.path
    }

    pub fn move_count(&self) -> usize {
        self.path.len() - 1
    }

    /// Direction of the blank for each step.
    pub fn moves(&self) -> Vec<Direction> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution found in {} moves", self.move_count())
    }
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    depth_limit: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest bound iterative deepening will try.
    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Finds a path from `start` to [`Board::GOAL`].
    ///
    /// Boards of the wrong parity are rejected with [`SolveError::Unsolvable`]
    /// before any search runs.
    pub fn solve(&self, start: &Board, strategy: Strategy) -> Result<Solution, SolveError> {
        if !is_solvable(start) {
            debug!("rejecting {start:?}: odd permutation parity");
            return Err(SolveError::Unsolvable);
        }

        debug!("solving {start:?} with {strategy}");
        let (path, stats) = self.search(*start, &Board::GOAL, strategy)?;
        debug!(
            "{strategy}: {} moves, {} expanded, {} generated",
            path.len() - 1,
            stats.expanded,
            stats.generated
        );

        Ok(Solution {
            path,
            stats,
            strategy,
        })
    }

    fn search(&self, start: Board, goal: &Board, strategy: Strategy) -> SearchResult {
        match strategy {
            Strategy::AStar(heuristic) => {
                search::best_first(start, goal, CostHeap::default(), |board| {
                    heuristic.estimate(board, goal)
                })
            }
            Strategy::BreadthFirst => {
                search::best_first(start, goal, VecDeque::<NodeId>::new(), |_| 0)
            }
            Strategy::DepthFirst => search::best_first(start, goal, Vec::<NodeId>::new(), |_| 0),
            Strategy::Backtracking => search::backtracking(start, goal),
            Strategy::IterativeDeepening => {
                search::iterative_deepening(start, goal, self.depth_limit)
            }
        }
    }
}

/// Solves `start` with the default [`Solver`].
pub fn solve(start: &Board, strategy: Strategy) -> Result<Solution, SolveError> {
    Solver::default().solve(start, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_scramble, assert_valid_path, goal_distances, scramble};
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest, ProptestConfig};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_solvable_demo_matches_shortest_distance() {
        let start = board("478365120");
        let shortest = goal_distances()[&start] as usize;
        assert_eq!(shortest, 24);

        let astar = solve(&start, Strategy::AStar(Heuristic::Manhattan)).unwrap();
        assert_eq!(astar.path().first(), Some(&start));
        assert_eq!(astar.path().last(), Some(&Board::GOAL));
        assert_eq!(astar.move_count(), shortest);
        assert_valid_path(astar.path(), &start);

        let bfs = solve(&start, Strategy::BreadthFirst).unwrap();
        assert_eq!(bfs.move_count(), shortest);
        assert_valid_path(bfs.path(), &start);
    }

    #[test]
    fn test_misplaced_expands_at_least_as_many_nodes() {
        let start = board("478365120");
        let manhattan = solve(&start, Strategy::AStar(Heuristic::Manhattan)).unwrap();
        let misplaced = solve(&start, Strategy::AStar(Heuristic::Misplaced)).unwrap();
        assert_eq!(manhattan.move_count(), misplaced.move_count());
        assert!(manhattan.stats().expanded <= misplaced.stats().expanded);
    }

    #[test]
    fn test_unsolvable_demo_is_rejected_by_every_strategy() {
        let start = board("812043765");
        for strategy in Strategy::ALL {
            assert_eq!(solve(&start, strategy), Err(SolveError::Unsolvable), "{strategy}");
        }
    }

    #[test]
    fn test_solved_start_yields_zero_moves() {
        for strategy in Strategy::ALL {
            let solution = solve(&Board::GOAL, strategy).unwrap();
            assert_eq!(solution.path(), &[Board::GOAL], "{strategy}");
            assert_eq!(solution.move_count(), 0);
            assert!(solution.moves().is_empty());
            assert_eq!(solution.to_string(), "Solution found in 0 moves");
        }
    }

    #[test]
    fn test_uninformed_strategies_return_valid_paths() {
        let start = board("478365120");
        for strategy in [Strategy::DepthFirst, Strategy::Backtracking] {
            let solution = solve(&start, strategy).unwrap();
            assert_eq!(solution.strategy(), strategy);
            assert_valid_path(solution.path(), &start);
            assert_eq!(solution.moves().len(), solution.move_count());
        }
    }

    #[test]
    fn test_iterative_deepening_is_shortest() {
        for steps in [&[0, 2][..], &[2, 0, 3, 1, 2, 2, 0], &[0, 0, 2, 1, 3, 0, 2, 2, 1, 3, 3]] {
            let start = scramble(steps);
            let solution = solve(&start, Strategy::IterativeDeepening).unwrap();
            assert_eq!(solution.move_count() as u32, goal_distances()[&start]);
            assert_valid_path(solution.path(), &start);
        }
    }

    #[test]
    fn test_depth_limit_is_reported() {
        let start = scramble(&[0, 2, 0, 2, 1, 3]);
        let distance = goal_distances()[&start];
        let solver = Solver::new().with_depth_limit(distance - 1);
        assert_eq!(solver.depth_limit(), distance - 1);
        assert_eq!(
            solver.solve(&start, Strategy::IterativeDeepening),
            Err(SolveError::DepthLimit { limit: distance - 1 })
        );
        // the limit only applies to iterative deepening
        assert!(solver.solve(&start, Strategy::BreadthFirst).is_ok());
    }

    #[test]
    fn test_moves_replay_the_path() {
        let start = board("123456708");
        let solution = solve(&start, Strategy::default()).unwrap();
        assert_eq!(solution.moves(), vec![Direction::Right]);
        assert_eq!(solution.to_string(), "Solution found in 1 moves");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SolveError::Unsolvable.to_string(), "Puzzle is not solvable");
        assert_eq!(
            SolveError::Exhausted { expanded: 3 }.to_string(),
            "No solution found"
        );
        assert_eq!(
            SolveError::DepthLimit { limit: 31 }.to_string(),
            "No solution found within depth limit 31"
        );
    }

    #[test]
    fn test_strategy_names() {
        let names: Vec<String> = Strategy::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "A* (manhattan)",
                "A* (misplaced)",
                "breadth-first",
                "depth-first",
                "backtracking",
                "iterative deepening",
            ]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn astar_is_optimal(start in arb_scramble(40)) {
            let shortest = goal_distances()[&start] as usize;
            for heuristic in Heuristic::ALL {
                let solution = solve(&start, Strategy::AStar(heuristic)).unwrap();
                prop_assert_eq!(solution.move_count(), shortest);
            }
        }
    }

    proptest! {
        // depth-first and backtracking may sweep most of the graph per case
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn every_strategy_returns_a_valid_path(start in arb_scramble(12)) {
            for strategy in Strategy::ALL {
                let solution = solve(&start, strategy).unwrap();
                prop_assert_eq!(solution.path().first(), Some(&start));
                prop_assert_eq!(solution.path().last(), Some(&Board::GOAL));
                prop_assert_eq!(solution.moves().len(), solution.move_count());
                if strategy.is_optimal() {
                    prop_assert_eq!(solution.move_count() as u32, goal_distances()[&start]);
                } else {
                    prop_assert!(solution.move_count() as u32 >= goal_distances()[&start]);
                }
            }
        }
    }
}
