//! Fewest-hop search over implicit position graphs.
//!
//! This crate collects small, self-contained puzzle solvers. The main one
//! splits a text into dictionary words by searching the graph of its cut
//! positions; the search itself is generic and can run over any graph that
//! implements [`HopProblem`].
//!
//! ## Core idea
//! 1. Model your instance as positions `0..N` with unit-cost edges.
//! 2. Implement the [`HopProblem`] trait for that graph.
//! 3. Let [`HopEngine`] expand positions from the source, record predecessors,
//!    and walk them back into an explicit path.
//!
//! ## Quick start
//! ```
//! use hop_dp::{Segmenter, WordIndex};
//!
//! let index = WordIndex::from_words(["cats", "dog", "sand", "and", "cat"]).unwrap();
//! let out = Segmenter::new(index).segment("catsanddog");
//! assert!(out == "cats and dog" || out == "cat sand dog");
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - Word segmentation over a length-bucketed dictionary
//! - Kagami mochi pair counting (two pointers over sorted sizes)

pub mod builder;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod predecessors;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::HopEngineBuilder;
pub use crate::engine::HopEngine;
pub use crate::error::PuzzleError;
pub use crate::frontier::FrontierKind;
pub use crate::problems::segment::{add_spaces, Segmenter};
pub use crate::problems::word_index::WordIndex;
pub use crate::traits::HopProblem;
