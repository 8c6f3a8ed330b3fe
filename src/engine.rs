//! Generic fewest-hop search engine.
//!
//! This module implements the two-phase algorithm:
//! 1. A search pass that expands positions from the source and records, for
//!    every reached position, the predecessor that first reached it.
//! 2. A reconstruction pass that walks those predecessors back from the target.
//!
//! The engine is completely generic over implementations of [`HopProblem`].

use crate::frontier::{Frontier, FrontierKind};
use crate::predecessors::PredecessorMap;
use crate::traits::HopProblem;

/// Fewest-hop search engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use hop_dp::{HopEngine, problems::segment::SegmentProblem, WordIndex};
///
/// let index = WordIndex::from_words(["leet", "code"]).unwrap();
/// let problem = SegmentProblem::new("leetcode", &index);
/// let path = HopEngine::new(problem).run().unwrap();
/// assert_eq!(path, vec![0, 4, 8]);
/// ```
pub struct HopEngine<P: HopProblem> {
    problem: P,
    frontier: FrontierKind,
}

impl<P: HopProblem> HopEngine<P> {
    /// Create a new engine with breadth-first (FIFO) expansion.
    pub fn new(problem: P) -> Self {
        Self::with_frontier(problem, FrontierKind::default())
    }

    /// Create a new engine with an explicit frontier discipline.
    pub fn with_frontier(problem: P, frontier: FrontierKind) -> Self {
        Self { problem, frontier }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consume the engine and hand back the problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Return the configured frontier discipline.
    pub fn frontier_kind(&self) -> FrontierKind {
        self.frontier
    }

    /// Phase I: expand every position reachable from the source.
    ///
    /// The source is recorded as its own predecessor. Positions are marked the
    /// first time they are reached and are never revisited, so the pass does
    /// O(positions + edges) work.
    pub fn search(&self) -> PredecessorMap {
        let n = self.problem.num_positions();
        let mut predecessors = PredecessorMap::new(n);
        if n == 0 {
            return predecessors;
        }

        let span = tracing::trace_span!("hop_search", positions = n, frontier = ?self.frontier);
        let _enter = span.enter();

        let source = self.problem.source();
        predecessors.mark(source, source);
        let mut frontier = Frontier::new(self.frontier);
        frontier.push(source);

        let mut expanded = 0usize;
        while let Some(position) = frontier.pop() {
            expanded += 1;
            for &next in self.problem.successors(position) {
                if predecessors.mark(next, position) {
                    frontier.push(next);
                }
            }
        }

        tracing::trace!(
            expanded,
            reached = predecessors.reached_count(),
            "search finished"
        );
        predecessors
    }

    /// Run the full search and reconstruct a path from source to target.
    ///
    /// Returns the visited positions in order (source first, target last), or
    /// `None` when the target is unreachable. With [`FrontierKind::Fifo`] the
    /// path uses the fewest hops possible.
    pub fn run(&self) -> Option<Vec<usize>> {
        if self.problem.num_positions() == 0 {
            return None;
        }
        let predecessors = self.search();
        let path = predecessors.path_to(self.problem.target());
        if path.is_none() {
            tracing::debug!(goal = self.problem.target(), "target unreachable");
        }
        path
    }

    /// Number of hops on the reconstructed path, or `None` if unreachable.
    pub fn hop_count(&self) -> Option<usize> {
        self.run().map(|path| path.len() - 1)
    }
}
