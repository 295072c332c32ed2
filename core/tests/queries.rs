//! End-to-end checks of completion and correction over a small vocabulary.
//!
//! Covers:
//! - Ranked prefix completion and the no-match outcome
//! - Correction fallback through `Engine::suggest`
//! - Frequency updates on re-insertion

use wordtrie_core::{Engine, Lookup, Suggestion, WordEntry};

fn sample_engine() -> Engine {
    let mut engine = Engine::default();
    engine.load([("apple", 5), ("app", 2), ("apt", 1), ("bat", 3)]);
    engine
}

fn pairs(found: &[Suggestion]) -> Vec<(&str, u64)> {
    found.iter().map(|s| (s.word.as_str(), s.frequency)).collect()
}

#[test]
fn test_prefix_ap_lists_apple_before_app() {
    let engine = sample_engine();
    let found = engine.complete("ap").unwrap();
    assert_eq!(pairs(&found), vec![("apple", 5), ("app", 2), ("apt", 1)]);
}

#[test]
fn test_prefix_app_exact_result() {
    let engine = sample_engine();
    let found = engine.complete("App").unwrap();
    assert_eq!(pairs(&found), vec![("apple", 5), ("app", 2)]);
}

#[test]
fn test_unknown_prefix_is_no_match() {
    let engine = sample_engine();
    assert_eq!(engine.complete("xyz"), None);
}

#[test]
fn test_correction_ranks_closest_first() {
    let engine = sample_engine();
    let found = engine.correct("aple").unwrap();
    assert_eq!(found[0], Suggestion::new("apple", 1, 0));
    assert!(found.iter().all(|s| s.word != "bat"));
}

#[test]
fn test_suggest_reports_which_path_answered() {
    let engine = sample_engine();
    match engine.suggest("ba").unwrap() {
        Lookup::Completions(found) => assert_eq!(pairs(&found), vec![("bat", 3)]),
        other => panic!("expected completions, got {other:?}"),
    }
    match engine.suggest("bta").unwrap() {
        Lookup::Corrections(found) => assert_eq!(found[0].word, "bat"),
        other => panic!("expected corrections, got {other:?}"),
    }
    assert_eq!(engine.suggest("qqqqqq").unwrap(), Lookup::Corrections(vec![]));
}

#[test]
fn test_monotonic_frequency_update() {
    let mut engine = Engine::default();
    engine.insert("cat", 3);
    engine.insert("Cat", 5);
    assert_eq!(engine.trie().get("cat"), Some(WordEntry::new("Cat", 5)));

    engine.insert("CAT", 1);
    assert_eq!(engine.trie().get("cat"), Some(WordEntry::new("Cat", 5)));
    assert_eq!(pairs(&engine.complete("c").unwrap()), vec![("Cat", 5)]);
}

#[test]
fn test_empty_prefix_ranks_whole_vocabulary() {
    let engine = sample_engine();
    let found = engine.complete("").unwrap();
    assert_eq!(
        pairs(&found),
        vec![("apple", 5), ("bat", 3), ("app", 2), ("apt", 1)]
    );
}

#[test]
fn test_large_vocabulary_keeps_top_ten() {
    let mut engine = Engine::default();
    let words: Vec<(String, u64)> = (0..200u64)
        .map(|i| {
            let a = (b'a' + (i / 26) as u8) as char;
            let b = (b'a' + (i % 26) as u8) as char;
            (format!("w{a}{b}"), i)
        })
        .collect();
    engine.load(words);

    let found = engine.complete("w").unwrap();
    assert_eq!(found.len(), 10);
    let freqs: Vec<u64> = found.iter().map(|s| s.frequency).collect();
    assert_eq!(freqs, (190..200u64).rev().collect::<Vec<_>>());
}
