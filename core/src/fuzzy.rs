//! Edit-distance correction for tokens that match no stored prefix.
use tracing::trace;

use crate::candidate::{Suggestion, SuggestionRanker};
use crate::error::{Result, SuggestError};

/// Largest edit distance reported as a correction by default.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Levenshtein distance between `a` and `b` with unit-cost insertion,
/// deletion and substitution.
///
/// Works on bytes, which matches character semantics for the ASCII words the
/// trie stores. Uses two rolling rows of `b.len() + 1` cells; if they cannot
/// be allocated the call fails with [`SuggestError::ResourceExhausted`]
/// instead of guessing a distance.
///
/// # Example
/// ```
/// use wordtrie_core::fuzzy::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting").unwrap(), 3);
/// assert_eq!(edit_distance("", "abc").unwrap(), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> Result<usize> {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let cells = b.len() + 1;

    let mut prev = alloc_row(cells)?;
    let mut curr = alloc_row(cells)?;
    prev.extend(0..cells);
    curr.resize(cells, 0);

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[b.len()])
}

fn alloc_row(cells: usize) -> Result<Vec<usize>> {
    let mut row = Vec::new();
    row.try_reserve_exact(cells)
        .map_err(|_| SuggestError::ResourceExhausted { cells })?;
    Ok(row)
}

/// Rank dictionary words within `max_distance` edits of `token`.
///
/// Comparison is case-insensitive; suggestions carry the dictionary's
/// original casing. Corrections have no frequency weight (always 0), so the
/// order is by distance alone. An empty result means nothing was close
/// enough.
///
/// # Example
/// ```
/// use wordtrie_core::fuzzy::correct;
///
/// let dict = ["apple", "app", "apt", "bat"];
/// let found = correct("aple", dict, 2, 10).unwrap();
/// assert_eq!(found[0].word, "apple");
/// assert_eq!(found[0].distance, 1);
/// ```
pub fn correct<I, S>(
    token: &str,
    dictionary: I,
    max_distance: usize,
    capacity: usize,
) -> Result<Vec<Suggestion>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let token = token.to_ascii_lowercase();
    let mut ranker = SuggestionRanker::with_capacity(capacity);
    let mut compared = 0usize;

    for word in dictionary {
        let word = word.as_ref();
        // Length difference is a lower bound on the distance.
        if token.len().abs_diff(word.len()) > max_distance {
            continue;
        }
        compared += 1;
        let distance = edit_distance(&token, &word.to_ascii_lowercase())?;
        if distance <= max_distance {
            ranker.offer(word, distance, 0);
        }
    }

    trace!(%token, compared, kept = ranker.len(), "fuzzy query");
    Ok(ranker.into_sorted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basics() {
        assert_eq!(edit_distance("", "").unwrap(), 0);
        assert_eq!(edit_distance("abc", "").unwrap(), 3);
        assert_eq!(edit_distance("abc", "abc").unwrap(), 0);
        assert_eq!(edit_distance("aple", "apple").unwrap(), 1);
        assert_eq!(edit_distance("apple", "aple").unwrap(), 1);
        assert_eq!(edit_distance("cat", "cut").unwrap(), 1);
        assert_eq!(edit_distance("flaw", "lawn").unwrap(), 2);
        assert_eq!(edit_distance("kitten", "sitting").unwrap(), 3);
    }

    #[test]
    fn test_edit_distance_is_case_sensitive() {
        assert_eq!(edit_distance("Cat", "cat").unwrap(), 1);
    }

    #[test]
    fn test_correct_scenario() {
        let dict = ["apple", "app", "apt", "bat"];
        let found = correct("aple", dict, 2, 10).unwrap();

        assert_eq!(found[0].word, "apple");
        assert_eq!(found[0].distance, 1);
        assert!(found.iter().all(|s| s.distance <= 2 && s.frequency == 0));
        // "app" and "apt" are 2 away; "bat" is 3 away.
        let mut rest: Vec<&str> = found[1..].iter().map(|s| s.word.as_str()).collect();
        rest.sort();
        assert_eq!(rest, vec!["app", "apt"]);
    }

    #[test]
    fn test_correct_keeps_original_case() {
        let dict = vec!["Apple".to_string(), "Banana".to_string()];
        let found = correct("APLE", &dict, 2, 10).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "Apple");
        assert_eq!(found[0].distance, 1);
    }

    #[test]
    fn test_correct_nothing_close() {
        let found = correct("zzzzzz", ["apple", "bat"], 2, 10).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_correct_threshold_and_capacity() {
        let dict = ["cat", "cot", "cut", "cart", "coat", "dog"];
        let exact = correct("cat", dict, 0, 10).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].word, "cat");

        let capped = correct("cat", dict, 1, 2).unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].word, "cat");
        assert_eq!(capped[1].distance, 1);
    }

    #[test]
    fn test_row_allocation_failure_is_an_error() {
        let err = alloc_row(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            SuggestError::ResourceExhausted { cells: usize::MAX }
        ));
        assert!(alloc_row(4).unwrap().capacity() >= 4);
    }
}
