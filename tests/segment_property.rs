use hop_dp::{FrontierKind, Segmenter, WordIndex};
use proptest::prelude::*;

/// Fewest words needed to cover `text`, by full-table DP over char positions.
fn min_words(text: &str, words: &[String]) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut best = vec![None::<usize>; n + 1];
    best[0] = Some(0);
    for i in 0..n {
        let Some(d) = best[i] else { continue };
        for word in words {
            let w: Vec<char> = word.chars().collect();
            if w.is_empty() || i + w.len() > n || chars[i..i + w.len()] != w[..] {
                continue;
            }
            let j = i + w.len();
            if best[j].map_or(true, |b| d + 1 < b) {
                best[j] = Some(d + 1);
            }
        }
    }
    best[n]
}

fn segmenter(words: &[String], kind: FrontierKind) -> Segmenter {
    Segmenter::with_frontier(WordIndex::from_words(words).unwrap(), kind)
}

proptest! {
    #[test]
    fn output_is_valid_segmentation_or_input(
        text in "[ab]{0,14}",
        words in prop::collection::vec("[ab]{1,4}", 0usize..6),
    ) {
        for kind in [FrontierKind::Fifo, FrontierKind::PositionHeap] {
            let s = segmenter(&words, kind);
            let out = s.segment(&text);
            match s.segment_words(&text) {
                Some(pieces) => {
                    prop_assert_eq!(pieces.concat(), text.clone());
                    for piece in &pieces {
                        prop_assert!(words.iter().any(|w| w == piece));
                    }
                    prop_assert_eq!(out, pieces.join(" "));
                }
                None => prop_assert_eq!(out, text.clone()),
            }
        }
    }

    #[test]
    fn fifo_matches_reference_word_count(
        text in "[abc]{0,16}",
        words in prop::collection::vec("[abc]{1,3}", 1usize..8),
    ) {
        let s = segmenter(&words, FrontierKind::Fifo);
        let expected = min_words(&text, &words);
        let found = s.segment_words(&text).map(|p| p.len());
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn heap_finds_a_split_whenever_one_exists(
        text in "[abc]{0,16}",
        words in prop::collection::vec("[abc]{1,3}", 1usize..8),
    ) {
        let s = segmenter(&words, FrontierKind::PositionHeap);
        let exists = min_words(&text, &words).is_some();
        prop_assert_eq!(s.segment_words(&text).is_some(), exists);
    }

    #[test]
    fn fallback_output_is_stable(
        text in "[xy]{1,10}",
        words in prop::collection::vec("[ab]{1,3}", 0usize..4),
    ) {
        // no word can match text made of other letters
        let s = segmenter(&words, FrontierKind::Fifo);
        let once = s.segment(&text);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(s.segment(&once), once.clone());
    }
}
