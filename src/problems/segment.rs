//! Word segmentation as a fewest-hop search over cut positions.
//!
//! Graph structure: positions 0..=n are the cut points between the n
//! characters of the text; an edge i -> j exists iff the characters in [i, j)
//! form an allowed word. Any path from 0 to n is a segmentation, and a
//! breadth-first search finds one with the fewest words.
//!
//! Texts that cannot be segmented are returned unchanged; that is a normal
//! result, not an error.

use crate::builder::HopEngineBuilder;
use crate::error::PuzzleError;
use crate::frontier::FrontierKind;
use crate::problems::word_index::WordIndex;
use crate::traits::HopProblem;
use crate::utils::{char_boundaries, join_pieces};

/// Edges between cut positions of one text; immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachabilityGraph {
    /// edges[i] = ascending positions j such that text[i..j] is a word
    edges: Vec<Vec<usize>>,
}

impl ReachabilityGraph {
    /// Build the graph for `text` against `index`.
    pub fn build(text: &str, index: &WordIndex) -> Self {
        Self::from_boundaries(text, &char_boundaries(text), index)
    }

    /// Build the graph given the character boundaries of `text`.
    ///
    /// Only lengths that actually occur in `index` are probed from each start
    /// position, which finds the same edges as testing every substring.
    pub fn from_boundaries(text: &str, boundaries: &[usize], index: &WordIndex) -> Self {
        let n = boundaries.len().saturating_sub(1);
        let lengths = index.lengths();
        let mut edges = vec![Vec::new(); n + 1];
        for (i, successors) in edges.iter_mut().enumerate().take(n) {
            for &len in &lengths {
                let j = i + len;
                if j > n {
                    break;
                }
                if index.contains_with_len(len, &text[boundaries[i]..boundaries[j]]) {
                    successors.push(j);
                }
            }
        }
        Self { edges }
    }

    pub fn num_positions(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn successors(&self, position: usize) -> &[usize] {
        &self.edges[position]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

/// One segmentation instance: a text and the graph built over it.
#[derive(Clone, Debug)]
pub struct SegmentProblem<'t> {
    text: &'t str,
    boundaries: Vec<usize>,
    graph: ReachabilityGraph,
}

impl<'t> SegmentProblem<'t> {
    pub fn new(text: &'t str, index: &WordIndex) -> Self {
        let boundaries = char_boundaries(text);
        let graph = {
            let span = tracing::trace_span!("build_graph", chars = boundaries.len() - 1);
            let _enter = span.enter();
            ReachabilityGraph::from_boundaries(text, &boundaries, index)
        };
        tracing::trace!(edges = graph.edge_count(), "reachability graph built");
        Self {
            text,
            boundaries,
            graph,
        }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn graph(&self) -> &ReachabilityGraph {
        &self.graph
    }

    /// Slice the text along consecutive positions of `path`.
    pub fn pieces(&self, path: &[usize]) -> Vec<&'t str> {
        path.windows(2)
            .map(|w| &self.text[self.boundaries[w[0]]..self.boundaries[w[1]]])
            .collect()
    }
}

impl HopProblem for SegmentProblem<'_> {
    fn num_positions(&self) -> usize {
        self.graph.num_positions()
    }

    fn successors(&self, position: usize) -> &[usize] {
        self.graph.successors(position)
    }
}

/// Splits texts into words from a fixed dictionary.
///
/// ```
/// use hop_dp::{Segmenter, WordIndex};
///
/// let segmenter = Segmenter::new(WordIndex::from_words(["leet", "code"]).unwrap());
/// assert_eq!(segmenter.segment("leetcode"), "leet code");
/// assert_eq!(segmenter.segment("leetcod"), "leetcod");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    index: WordIndex,
    frontier: FrontierKind,
}

impl Segmenter {
    pub fn new(index: WordIndex) -> Self {
        Self::with_frontier(index, FrontierKind::default())
    }

    pub fn with_frontier(index: WordIndex, frontier: FrontierKind) -> Self {
        Self { index, frontier }
    }

    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn frontier_kind(&self) -> FrontierKind {
        self.frontier
    }

    /// Split `text` into allowed words, or `None` if no split exists.
    ///
    /// The empty text splits into zero words.
    pub fn segment_words<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        if text.is_empty() {
            return Some(Vec::new());
        }
        let span = tracing::debug_span!("segment", bytes = text.len(), frontier = ?self.frontier);
        let _enter = span.enter();

        let engine = HopEngineBuilder::new(SegmentProblem::new(text, &self.index))
            .with_frontier(self.frontier)
            .build();
        let path = engine.run()?;
        let pieces = engine.problem().pieces(&path);
        tracing::debug!(words = pieces.len(), "segmented");
        Some(pieces)
    }

    /// Split `text` into space-separated words, or return it unchanged.
    pub fn segment(&self, text: &str) -> String {
        match self.segment_words(text) {
            Some(pieces) => join_pieces(&pieces),
            None => text.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SegmenterBuilder {
    index: WordIndex,
    frontier: Option<FrontierKind>,
}

impl SegmenterBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn word(mut self, word: &str) -> Result<Self, PuzzleError> {
        self.index.add(word)?;
        Ok(self)
    }
    pub fn words<I, S>(mut self, words: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.index.add(word.as_ref())?;
        }
        Ok(self)
    }
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = Some(frontier);
        self
    }
    pub fn build(self) -> Segmenter {
        Segmenter::with_frontier(self.index, self.frontier.unwrap_or_default())
    }
}

/// One-shot segmentation of `text` against `words`.
///
/// Fails only if `words` contains an empty string.
pub fn add_spaces<S: AsRef<str>>(text: &str, words: &[S]) -> Result<String, PuzzleError> {
    let index = WordIndex::from_words(words)?;
    Ok(Segmenter::new(index).segment(text))
}
