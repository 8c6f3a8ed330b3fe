//! Length-bucketed dictionary of allowed words.
//!
//! Words are grouped by their length in characters, so a membership query only
//! touches the bucket for the candidate's exact length. Buckets hold exact
//! copies of the words; a lookup never reports a word that was not added.

use std::collections::{HashMap, HashSet};

use crate::error::PuzzleError;

#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    /// buckets[len] = words of exactly `len` characters
    buckets: HashMap<usize, HashSet<String>>,
    count: usize,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a list of words, rejecting empty ones.
    pub fn from_words<I, S>(words: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.add(word.as_ref())?;
        }
        Ok(index)
    }

    /// Insert `word` into the bucket for its length.
    ///
    /// Returns `Ok(false)` if the word was already present.
    pub fn add(&mut self, word: &str) -> Result<bool, PuzzleError> {
        let len = word.chars().count();
        if len == 0 {
            return Err(PuzzleError::EmptyWord);
        }
        let inserted = self
            .buckets
            .entry(len)
            .or_default()
            .insert(word.to_string());
        if inserted {
            self.count += 1;
        }
        Ok(inserted)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.contains_with_len(candidate.chars().count(), candidate)
    }

    /// Membership test for a candidate whose character length is already known.
    ///
    /// `len` must equal `candidate.chars().count()`; a wrong length simply
    /// probes the wrong bucket and reports `false`.
    #[inline]
    pub fn contains_with_len(&self, len: usize, candidate: &str) -> bool {
        self.buckets
            .get(&len)
            .is_some_and(|bucket| bucket.contains(candidate))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Distinct word lengths present, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(&len, _)| len)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    /// Length of the longest word, or 0 for an empty index.
    pub fn max_len(&self) -> usize {
        self.lengths().last().copied().unwrap_or(0)
    }
}
