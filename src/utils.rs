//! Assorted utilities and helpers.
//!
//! These are intentionally minimal; you can extend or replace them as needed.

/// Byte offsets of every character position in `text`, including the end.
///
/// Entry `k` is the byte offset where character `k` starts; the last entry is
/// `text.len()`. The result therefore has `chars().count() + 1` entries and
/// can be used to slice `text` between any two character positions.
pub fn char_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
    boundaries.push(text.len());
    boundaries
}

/// Join pieces with single spaces.
#[inline]
pub fn join_pieces(pieces: &[&str]) -> String {
    pieces.join(" ")
}
