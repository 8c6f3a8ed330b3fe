//! Example: word segmentation via fewest-hop search.
//!
//! Run with:
//! `cargo run --example segment`

use hop_dp::{FrontierKind, Segmenter, WordIndex};

fn main() {
    let words = ["cats", "dog", "sand", "and", "cat", "leet", "code"];
    let index = WordIndex::from_words(words).expect("demo words are non-empty");

    let bfs = Segmenter::new(index.clone());
    let heap = Segmenter::with_frontier(index, FrontierKind::PositionHeap);

    for text in ["leetcode", "catsanddog", "catsandog", ""] {
        println!("{text:?}");
        println!("  fifo: {:?}", bfs.segment(text));
        println!("  heap: {:?}", heap.segment(text));
        match bfs.segment_words(text) {
            Some(pieces) => println!("  words: {}", pieces.len()),
            None => println!("  no segmentation; text returned unchanged"),
        }
    }
}
