//! wordtrie-core
//!
//! In-memory word completion and spelling correction over a weighted
//! vocabulary.
//!
//! Public API:
//! - `TrieNode` - Prefix tree of words with frequency weights
//! - `SuggestionRanker` - Bounded top-K collector of `Suggestion`s
//! - `fuzzy::correct` - Edit-distance correction over a word list
//! - `Engine` - Vocabulary, dictionary snapshot and configuration together
//! - `Config` - Result limits and input bounds, loadable from TOML
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::SuggestError;

pub mod trie;
pub use trie::{TrieNode, WordEntry};

pub mod candidate;
pub use candidate::{Suggestion, SuggestionRanker, DEFAULT_MAX_SUGGESTIONS};

pub mod fuzzy;
pub use fuzzy::{edit_distance, DEFAULT_MAX_EDIT_DISTANCE};

pub mod engine;
pub use engine::{Dictionary, Engine, Lookup};

/// Words must be shorter than this many characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 100;

/// Upper bound on the interactive "how many words" prompt.
pub const DEFAULT_MAX_WORDS: usize = 1000;

/// Configuration for query limits and input validation.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Number of suggestions a query returns at most.
    pub max_suggestions: usize,
    /// Largest edit distance reported as a correction.
    pub max_edit_distance: usize,
    /// Exclusive upper bound on word length accepted from input.
    pub max_word_length: usize,
    /// Most words the interactive loader will ask for.
    pub max_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, SuggestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SuggestError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), SuggestError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| SuggestError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Whether `word` passes this config's input rules.
    pub fn accepts(&self, word: &str) -> bool {
        utils::is_valid_word(word, self.max_word_length)
    }
}

/// Input helpers for front ends that read words from text.
pub mod utils {
    /// A word is non-empty, ASCII letters only, and shorter than `max_len`.
    pub fn is_valid_word(word: &str, max_len: usize) -> bool {
        !word.is_empty() && word.len() < max_len && word.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Split a `word:frequency` token.
    ///
    /// Without a colon the frequency is 0. The frequency is read like C's
    /// `atoi`: leading whitespace, an optional sign, then as many digits as
    /// follow. Missing digits, a negative value or overflow give 0.
    ///
    /// # Example
    /// ```
    /// use wordtrie_core::utils::parse_entry;
    ///
    /// assert_eq!(parse_entry("apple:5"), ("apple", 5));
    /// assert_eq!(parse_entry("apple"), ("apple", 0));
    /// assert_eq!(parse_entry("apple:12abc"), ("apple", 12));
    /// assert_eq!(parse_entry("apple:x"), ("apple", 0));
    /// ```
    pub fn parse_entry(token: &str) -> (&str, u64) {
        match token.split_once(':') {
            Some((word, freq)) => (word, parse_frequency(freq)),
            None => (token, 0),
        }
    }

    fn parse_frequency(raw: &str) -> u64 {
        let raw = raw.trim_start();
        let (negative, digits) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if negative || end == 0 {
            return 0;
        }
        digits[..end].parse().unwrap_or(0)
    }

}
