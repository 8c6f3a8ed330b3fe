//! Error type shared by the puzzle solvers.
//!
//! Segmentation never fails on unsegmentable text (it falls back to the
//! input), so the variants here cover word registration and the line-based
//! counting input.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("words must contain at least one character")]
    EmptyWord,
    #[error("missing {0} in input")]
    MissingInput(&'static str),
    #[error("invalid integer {value:?}: {source}")]
    ParseInt {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("mochi sizes must be positive (item {index})")]
    ZeroSize { index: usize },
    #[error("expected {expected} mochi sizes, found {found}")]
    CountMismatch { expected: usize, found: usize },
    #[error("mochi of size {top} cannot sit on mochi of size {bottom}")]
    InvalidStack { top: u64, bottom: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    pub(crate) fn parse_int(value: &str, source: ParseIntError) -> Self {
        Self::ParseInt {
            value: value.to_string(),
            source,
        }
    }
}
