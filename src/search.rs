//! Search engine shared by every strategy.
//!
//! Frontier-driven strategies (A*, breadth-first, depth-first) run through
//! [`best_first`]. Backtracking and iterative deepening run through
//! [`depth_first_walk`], an explicit-stack walk where the arena holds exactly
//! the current root-to-node path.
//!
//! None of these functions check solvability; callers gate on parity first.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::board::{Board, Direction};
use crate::frontier::Frontier;
use crate::solver::{SearchStats, SolveError};
use crate::tree::{NodeId, SearchTree};

/// A path from start to goal plus what it cost to find it.
pub(crate) type SearchResult = Result<(Vec<Board>, SearchStats), SolveError>;

/// Pops nodes in the frontier's order, expanding each board at most once.
///
/// `estimate` supplies `h` for every new node. Uninformed strategies pass `|_| 0`.
pub(crate) fn best_first<F, E>(start: Board, goal: &Board, mut frontier: F, estimate: E) -> SearchResult
where
    F: Frontier,
    E: Fn(&Board) -> u32,
{
    let mut stats = SearchStats::default();
    let mut tree = SearchTree::new(start, estimate(&start));
    let mut visited: FxHashSet<Board> = FxHashSet::default();

    frontier.push(NodeId::ROOT, tree[NodeId::ROOT].cost());

    while let Some(id) = frontier.pop() {
        let node = tree[id];
        if node.board == *goal {
            debug!(
                "goal reached at depth {} after {} expansions ({} nodes in arena)",
                node.depth,
                stats.expanded,
                tree.len()
            );
            return Ok((tree.path_to(id), stats));
        }

        // the same board may be queued more than once; only the first pop expands it
        if !visited.insert(node.board) {
            continue;
        }
        stats.expanded += 1;

        for child in node.board.neighbors() {
            if visited.contains(&child) {
                continue;
            }
            let child_id = tree.push_child(id, child, estimate(&child));
            frontier.push(child_id, tree[child_id].cost());
            stats.generated += 1;
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    debug!("frontier exhausted after {} expansions", stats.expanded);
    Err(SolveError::Exhausted {
        expanded: stats.expanded,
    })
}

/// Which boards a depth-first walk refuses to enter again.
pub(crate) enum VisitScope {
    /// Anything seen anywhere in the search, never rolled back.
    Global(FxHashSet<Board>),
    /// Only boards on the current root-to-node path.
    OnPath,
}

impl VisitScope {
    /// Records `board` and returns true if the walk may enter it.
    fn admit(&mut self, path: &SearchTree, board: Board) -> bool {
        match self {
            VisitScope::Global(seen) => seen.insert(board),
            VisitScope::OnPath => !path.contains_board(&board),
        }
    }
}

/// One level of the depth-first walk.
#[derive(Clone, Copy)]
struct Frame {
    node: NodeId,
    /// Index into [`Direction::ALL`] of the next move to try.
    next_direction: usize,
}

/// Depth-first walk driven by an explicit frame stack instead of recursion.
///
/// Children are entered in [`Direction::ALL`] order and goal-tested on entry.
/// Nodes at depth `bound` are entered but not expanded. When a frame runs out
/// of moves it is popped and its node is cut from the arena, so the arena
/// always equals the current path.
pub(crate) fn depth_first_walk(
    start: Board,
    goal: &Board,
    bound: Option<u32>,
    scope: &mut VisitScope,
    stats: &mut SearchStats,
) -> Option<Vec<Board>> {
    let mut tree = SearchTree::new(start, 0);
    if start == *goal {
        return Some(tree.path_to(NodeId::ROOT));
    }
    if let VisitScope::Global(seen) = scope {
        seen.insert(start);
    }

    let mut frames = vec![Frame {
        node: NodeId::ROOT,
        next_direction: 0,
    }];

    while let Some(&Frame {
        node: id,
        next_direction,
    }) = frames.last()
    {
        let node = tree[id];
        let at_bound = bound.is_some_and(|limit| node.depth >= limit);
        if next_direction == 0 && !at_bound {
            stats.expanded += 1;
        }

        let step = if at_bound {
            None
        } else {
            Direction::ALL[next_direction..]
                .iter()
                .enumerate()
                .find_map(|(offset, &direction)| {
                    let child = node.board.slide(direction)?;
                    scope
                        .admit(&tree, child)
                        .then_some((next_direction + offset + 1, child))
                })
        };

        match step {
            Some((resume_at, child)) => {
                if let Some(frame) = frames.last_mut() {
                    frame.next_direction = resume_at;
                }
                let child_id = tree.push_child(id, child, 0);
                stats.generated += 1;
                if child == *goal {
                    return Some(tree.path_to(child_id));
                }
                frames.push(Frame {
                    node: child_id,
                    next_direction: 0,
                });
                stats.peak_frontier = stats.peak_frontier.max(frames.len());
            }
            None => {
                // out of moves: back out of this node
                frames.pop();
                tree.truncate(id);
            }
        }
    }

    None
}

/// Depth-first search that never re-enters a board seen anywhere in the search.
pub(crate) fn backtracking(start: Board, goal: &Board) -> SearchResult {
    let mut stats = SearchStats::default();
    let mut scope = VisitScope::Global(FxHashSet::default());

    match depth_first_walk(start, goal, None, &mut scope, &mut stats) {
        Some(path) => Ok((path, stats)),
        None => {
            debug!("backtracking exhausted after {} expansions", stats.expanded);
            Err(SolveError::Exhausted {
                expanded: stats.expanded,
            })
        }
    }
}

/// Depth-limited walks with bounds 0, 1, ..., `limit`, each with path-scoped visits.
///
/// The first bound that reaches the goal is the shortest solution length.
pub(crate) fn iterative_deepening(start: Board, goal: &Board, limit: u32) -> SearchResult {
    let mut stats = SearchStats::default();

    for bound in 0..=limit {
        trace!("depth-limited pass with bound {bound}");
        if let Some(path) =
            depth_first_walk(start, goal, Some(bound), &mut VisitScope::OnPath, &mut stats)
        {
            debug!("goal reached with bound {bound} after {} expansions", stats.expanded);
            return Ok((path, stats));
        }
    }

    debug!("no solution within depth limit {limit}");
    Err(SolveError::DepthLimit { limit })
}
