//! Frontier disciplines for the best-first search loop.
//!
//! The loop only ever pushes and pops node ids; which node comes out next is
//! what distinguishes A*, breadth-first and depth-first search.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::tree::NodeId;

/// Nodes discovered but not yet expanded.
pub(crate) trait Frontier {
    /// Adds a node with total cost `f = g + h`. Uninformed disciplines ignore the cost.
    fn push(&mut self, node: NodeId, cost: u32);

    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;
}

/// Min-heap on cost; equal costs pop in insertion order.
#[derive(Default)]
pub(crate) struct CostHeap {
    heap: BinaryHeap<Reverse<(u32, NodeId)>>,
}

impl Frontier for CostHeap {
    #[inline]
    fn push(&mut self, node: NodeId, cost: u32) {
        self.heap.push(Reverse((cost, node)));
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// FIFO queue for breadth-first search.
impl Frontier for VecDeque<NodeId> {
    #[inline]
    fn push(&mut self, node: NodeId, _cost: u32) {
        self.push_back(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// LIFO stack for depth-first search.
impl Frontier for Vec<NodeId> {
    #[inline]
    fn push(&mut self, node: NodeId, _cost: u32) {
        Vec::push(self, node);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
