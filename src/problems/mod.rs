//! Puzzle implementations.
//!
//! - [`word_index`] : length-bucketed dictionary used by segmentation.
//! - [`segment`]    : word segmentation as a fewest-hop search over cut positions.
//! - [`kagami`]     : kagami mochi pair counting with a two-pointer sweep.

pub mod kagami;
pub mod segment;
pub mod word_index;
