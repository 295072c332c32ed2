//! Prefix trie holding the vocabulary and its frequency weights.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::{Suggestion, SuggestionRanker};

/// Number of children per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// A stored word with its original casing and frequency weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub frequency: u64,
}

impl WordEntry {
    pub fn new<T: Into<String>>(word: T, frequency: u64) -> Self {
        WordEntry {
            word: word.into(),
            frequency,
        }
    }
}

/// A trie (prefix tree) over lowercase ASCII letters.
///
/// Paths are spelled in lowercase, but each terminal node keeps the casing the
/// word was inserted with. The root represents the empty prefix and is never
/// itself a word.
///
/// # Example
/// ```
/// use wordtrie_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("Apple", 5);
/// trie.insert("app", 2);
///
/// assert!(trie.contains_word("apple"));
/// assert!(!trie.contains_word("ap"));
///
/// let words: Vec<&str> = trie.words().map(|(w, _)| w).collect();
/// assert_eq!(words, vec!["app", "Apple"]);
/// ```
#[derive(Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_end: bool,
    /// When `is_end` is true, `word` holds the canonical (original-case) word.
    word: Option<String>,
    frequency: u64,
}

/// Child slot for an ASCII letter, `None` for anything else.
fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_alphabetic()
        .then(|| (byte.to_ascii_lowercase() - b'a') as usize)
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word with a frequency weight.
    ///
    /// The path is the lowercased word; the stored word keeps its casing. If
    /// the word is already present, casing and frequency are replaced only
    /// when `frequency` is strictly greater than the stored one.
    ///
    /// Empty words and words with anything other than ASCII letters are
    /// ignored. Callers validate input with [`crate::utils::is_valid_word`].
    ///
    /// # Example
    /// ```
    /// use wordtrie_core::trie::TrieNode;
    ///
    /// let mut trie = TrieNode::new();
    /// trie.insert("cat", 3);
    /// trie.insert("Cat", 5);
    /// trie.insert("CAT", 5);
    ///
    /// let entry = trie.get("cat").unwrap();
    /// assert_eq!(entry.word, "Cat");
    /// assert_eq!(entry.frequency, 5);
    /// ```
    pub fn insert(&mut self, word: &str, frequency: u64) {
        // Resolve every slot before touching the tree so a rejected word
        // leaves no partial path behind.
        let path: Option<Vec<usize>> = word.bytes().map(slot).collect();
        let path = match path {
            Some(path) if !path.is_empty() => path,
            _ => {
                debug!(word, "skipping word that has no trie path");
                return;
            }
        };

        let mut node = self;
        for idx in path {
            node = node.children[idx].get_or_insert_with(Box::default);
        }

        node.is_end = true;
        match &node.word {
            None => {
                node.word = Some(word.to_string());
                node.frequency = frequency;
            }
            Some(stored) if frequency > node.frequency => {
                debug!(
                    word,
                    previous = %stored,
                    from = node.frequency,
                    to = frequency,
                    "raising word frequency"
                );
                node.word = Some(word.to_string());
                node.frequency = frequency;
            }
            Some(_) => {}
        }
    }

    /// Walk to the node spelling `prefix`.
    ///
    /// Returns `None` as soon as a letter has no child. The empty prefix
    /// resolves to `self`.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = self;
        for byte in prefix.bytes() {
            node = node.children[slot(byte)?].as_deref()?;
        }
        Some(node)
    }

    /// Whether any stored word begins with `prefix` (case-insensitive).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Check whether the trie contains exactly the given word.
    ///
    /// Returns `true` only if `word` is stored as a complete word, not just
    /// as a prefix.
    pub fn contains_word(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_end)
    }

    /// Look up the stored entry for `word` (case-insensitive).
    pub fn get(&self, word: &str) -> Option<WordEntry> {
        self.find_node(word)?.entry()
    }

    /// This node's own entry, if it terminates a word.
    pub fn entry(&self) -> Option<WordEntry> {
        if !self.is_end {
            return None;
        }
        self.word
            .as_ref()
            .map(|w| WordEntry::new(w.clone(), self.frequency))
    }

    /// Depth-first iterator over every word at or below this node.
    ///
    /// Children are visited in ascending letter order, so words come out in
    /// lowercase alphabetical order with a prefix before its extensions.
    pub fn words(&self) -> Words<'_> {
        Words { stack: vec![self] }
    }

    /// Number of words stored at or below this node.
    pub fn len(&self) -> usize {
        self.words().count()
    }

    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }

    /// Rank every word starting with `prefix`.
    ///
    /// The prefix is lowercased before the walk. Returns `None` when no stored
    /// word has this prefix. Matches all carry distance 0, so the result is
    /// ordered by descending frequency and holds at most `capacity` entries.
    ///
    /// # Example
    /// ```
    /// use wordtrie_core::trie::TrieNode;
    ///
    /// let mut trie = TrieNode::new();
    /// trie.insert("apple", 5);
    /// trie.insert("app", 2);
    /// trie.insert("bat", 3);
    ///
    /// let found = trie.complete("AP", 10).unwrap();
    /// assert_eq!(found[0].word, "apple");
    /// assert_eq!(found[1].word, "app");
    /// assert!(trie.complete("xyz", 10).is_none());
    /// ```
    pub fn complete(&self, prefix: &str, capacity: usize) -> Option<Vec<Suggestion>> {
        let prefix = prefix.to_ascii_lowercase();
        let node = self.find_node(&prefix)?;

        let mut ranker = SuggestionRanker::with_capacity(capacity);
        let mut seen = 0usize;
        for (word, frequency) in node.words() {
            ranker.offer(word, 0, frequency);
            seen += 1;
        }
        tracing::trace!(%prefix, seen, kept = ranker.len(), "prefix query");
        Some(ranker.into_sorted())
    }
}

/// Lazy depth-first walk yielding `(word, frequency)` for terminal nodes.
///
/// Created by [`TrieNode::words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for Words<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reverse push so 'a' is popped first.
            self.stack
                .extend(node.children.iter().rev().filter_map(|c| c.as_deref()));
            if node.is_end {
                if let Some(word) = &node.word {
                    return Some((word.as_str(), node.frequency));
                }
            }
        }
        None
    }
}
