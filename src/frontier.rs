//! Frontier disciplines used by the search engine.
//!
//! The frontier holds positions that have been reached but not yet expanded.
//! Two orders are supported:
//! - [`FrontierKind::Fifo`]: plain breadth-first order. With unit hop costs this
//!   reaches every position along a fewest-hop path.
//! - [`FrontierKind::PositionHeap`]: always expands the smallest pending
//!   position. On forward-only graphs this visits positions in ascending
//!   order, so each position keeps its smallest reaching predecessor.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Which order pending positions are expanded in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrontierKind {
    #[default]
    Fifo,
    PositionHeap,
}

/// Pending positions, ordered according to a [`FrontierKind`].
#[derive(Debug, Clone)]
pub enum Frontier {
    Fifo(VecDeque<usize>),
    PositionHeap(BinaryHeap<Reverse<usize>>),
}

impl Frontier {
    pub fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::Fifo => Frontier::Fifo(VecDeque::new()),
            FrontierKind::PositionHeap => Frontier::PositionHeap(BinaryHeap::new()),
        }
    }

    pub fn kind(&self) -> FrontierKind {
        match self {
            Frontier::Fifo(_) => FrontierKind::Fifo,
            Frontier::PositionHeap(_) => FrontierKind::PositionHeap,
        }
    }

    #[inline]
    pub fn push(&mut self, position: usize) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(position),
            Frontier::PositionHeap(heap) => heap.push(Reverse(position)),
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::PositionHeap(heap) => heap.pop().map(|Reverse(p)| p),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::PositionHeap(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
