use hop_dp::{add_spaces, FrontierKind, Segmenter, WordIndex};

fn segment(text: &str, words: &[&str]) -> String {
    add_spaces(text, words).unwrap()
}

#[test]
fn leet_code() {
    assert_eq!(segment("leetcode", &["leet", "code"]), "leet code");
}

#[test]
fn cats_and_dog_has_two_minimal_splits() {
    let out = segment("catsanddog", &["cats", "dog", "sand", "and", "cat"]);
    assert!(out == "cats and dog" || out == "cat sand dog", "{out}");
}

#[test]
fn overlapping_repeats_still_split() {
    let out = segment("aaaaaaa", &["aaaa", "aaa"]);
    let tokens: Vec<&str> = out.split(' ').collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens.concat(), "aaaaaaa");
}

#[test]
fn no_match_returns_input() {
    assert_eq!(segment("b", &["a"]), "b");
}

#[test]
fn empty_text_with_any_words() {
    assert_eq!(segment("", &["a", "b"]), "");
    assert_eq!(segment("", &[] as &[&str]), "");
}

#[test]
fn single_word_text_has_no_spaces() {
    assert_eq!(segment("dictionary", &["dictionary", "dict", "ion", "ary"]), "dictionary");
}

#[test]
fn unicode_words_split_on_characters() {
    let index = WordIndex::from_words(["東京", "都", "東", "京都"]).unwrap();
    let out = Segmenter::new(index).segment("東京都");
    assert!(out == "東京 都" || out == "東 京都", "{out}");
}

#[test]
fn both_frontiers_agree_when_split_is_unique() {
    let index = WordIndex::from_words(["pine", "apple", "pen"]).unwrap();
    let text = "penpineapplepen";
    let fifo = Segmenter::new(index.clone()).segment(text);
    let heap = Segmenter::with_frontier(index, FrontierKind::PositionHeap).segment(text);
    assert_eq!(fifo, "pen pine apple pen");
    assert_eq!(heap, fifo);
}
