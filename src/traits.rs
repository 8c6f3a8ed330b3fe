//! Core trait definitions for fewest-hop search problems.
//!
//! To run a search with [`HopEngine`](crate::engine::HopEngine), implement
//! [`HopProblem`] for a struct that captures your instance (text, word set,
//! precomputed edges, ...).
//!
//! The trait describes an implicit directed graph over integer positions:
//! - Positions: `0..num_positions()`.
//! - Endpoints: a source position and a target position.
//! - Edges: `successors(p)` lists every position reachable from `p` in one hop.
//!
//! All hops cost the same, so the engine only needs reachability and the order
//! in which positions are expanded. It never mutates the problem.

/// Trait for a fewest-hop search instance.
///
/// A `HopProblem` corresponds to a *fixed* instance: the graph is built before
/// the search starts and stays immutable while the engine walks it.
///
/// Semantics:
/// - Positions are dense indices `0..num_positions()`.
/// - `successors(p)` may be empty; a position without successors is a dead end.
/// - Successor lists may contain positions already reached; the engine keeps
///   the first predecessor it records for each position.
pub trait HopProblem {
    /// Number of positions in the graph.
    ///
    /// A problem with zero positions has no source and no path.
    fn num_positions(&self) -> usize;

    /// Position where every path starts.
    fn source(&self) -> usize {
        0
    }

    /// Position every path must end at.
    ///
    /// Defaults to the last position, which suits graphs over cut points of a
    /// sequence (0 is the start, `n` is the end).
    fn target(&self) -> usize {
        self.num_positions().saturating_sub(1)
    }

    /// Positions reachable from `position` in one hop.
    ///
    /// Must only return indices smaller than `num_positions()`.
    fn successors(&self, position: usize) -> &[usize];
}
