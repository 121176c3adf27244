//! Index-addressed arena of search nodes.
//!
//! Nodes refer to their parent by index, so the search tree never holds a
//! reference cycle and a solution path is recovered with a plain index walk.

use std::ops::Index;

use crate::board::Board;

/// Position of a node in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    /// The start node is always the first node in the arena.
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board together with how the search reached it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) board: Board,
    /// `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Moves from the root (`g`).
    pub(crate) depth: u32,
    /// Heuristic estimate of the remaining moves (`h`); 0 for uninformed strategies.
    pub(crate) estimate: u32,
}

impl Node {
    /// Total cost `f = g + h`.
    #[inline]
    pub(crate) fn cost(&self) -> u32 {
        self.depth + self.estimate
    }
}

/// Arena owning every node created during one search.
pub(crate) struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Creates a tree holding only the root.
    pub(crate) fn new(root: Board, estimate: u32) -> Self {
        Self {
            nodes: vec![Node {
                board: root,
                parent: None,
                depth: 0,
                estimate,
            }],
        }
    }

    /// Appends a child of `parent` one move deeper.
    pub(crate) fn push_child(&mut self, parent: NodeId, board: Board, estimate: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let depth = self[parent].depth + 1;
        self.nodes.push(Node {
            board,
            parent: Some(parent),
            depth,
            estimate,
        });
        id
    }

    /// Drops `id` and every node created after it.
    pub(crate) fn truncate(&mut self, id: NodeId) {
        self.nodes.truncate(id.index());
    }

    /// Number of nodes currently held.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Linear scan for `board`. Only cheap while the arena holds a single path.
    pub(crate) fn contains_board(&self, board: &Board) -> bool {
        self.nodes.iter().any(|node| node.board == *board)
    }

    /// Boards from the root to `id`, start first.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self[id].depth as usize + 1);
        let mut cursor = Some(id);

        while let Some(current) = cursor {
            let node = &self[current];
            path.push(node.board);
            cursor = node.parent;
        }

        path.reverse();
        path
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
