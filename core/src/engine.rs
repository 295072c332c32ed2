// core/src/engine.rs
//
// Engine that owns the vocabulary and answers completion and correction
// queries, falling back from one to the other the way the CLI expects.

use tracing::debug;

use crate::candidate::Suggestion;
use crate::error::Result;
use crate::fuzzy;
use crate::trie::{TrieNode, WordEntry};
use crate::Config;

/// Flat snapshot of every word stored in a trie.
///
/// Built on demand and never updated by later inserts; call
/// [`Engine::refresh_dictionary`] to rebuild it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
}

impl Dictionary {
    /// Snapshot all words below `root`, in trie order.
    pub fn from_trie(root: &TrieNode) -> Self {
        let entries = root
            .words()
            .map(|(word, frequency)| WordEntry::new(word, frequency))
            .collect();
        Self { entries }
    }

    /// Canonical words in snapshot order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Entries sorted by canonical word in byte order, as shown by "list all
    /// words". Uppercase initials sort before lowercase ones.
    pub fn sorted(&self) -> Vec<WordEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which query path produced a [`Lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Words extending the input, best first.
    Completions(Vec<Suggestion>),
    /// No word has the input as a prefix; these are close misspellings.
    Corrections(Vec<Suggestion>),
}

impl Lookup {
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Lookup::Completions(s) | Lookup::Corrections(s) => s,
        }
    }

    pub fn is_correction(&self) -> bool {
        matches!(self, Lookup::Corrections(_))
    }
}

/// Vocabulary plus configuration, with the derived correction dictionary.
///
/// Load words with [`Engine::insert`] or [`Engine::load`] before querying.
/// Corrections search the dictionary snapshot, which only `load` and
/// [`Engine::refresh_dictionary`] rebuild.
#[derive(Debug, Default)]
pub struct Engine {
    trie: TrieNode,
    dictionary: Dictionary,
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            trie: TrieNode::new(),
            dictionary: Dictionary::default(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn trie(&self) -> &TrieNode {
        &self.trie
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Insert or raise the frequency of a word. See [`TrieNode::insert`].
    pub fn insert(&mut self, word: &str, frequency: u64) {
        self.trie.insert(word, frequency);
    }

    /// Insert every entry, then rebuild the dictionary snapshot.
    pub fn load<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        for (word, frequency) in entries {
            self.trie.insert(word.as_ref(), frequency);
        }
        self.refresh_dictionary();
    }

    /// Rebuild the correction dictionary from the current trie.
    pub fn refresh_dictionary(&mut self) {
        self.dictionary = Dictionary::from_trie(&self.trie);
        debug!(words = self.dictionary.len(), "rebuilt dictionary snapshot");
    }

    /// Completions for `prefix`, or `None` if no stored word starts with it.
    pub fn complete(&self, prefix: &str) -> Option<Vec<Suggestion>> {
        self.trie.complete(prefix, self.config.max_suggestions)
    }

    /// Dictionary words within the configured edit distance of `token`.
    pub fn correct(&self, token: &str) -> Result<Vec<Suggestion>> {
        fuzzy::correct(
            token,
            self.dictionary.words(),
            self.config.max_edit_distance,
            self.config.max_suggestions,
        )
    }

    /// Complete `input` as a prefix; if nothing starts with it, correct it.
    pub fn suggest(&self, input: &str) -> Result<Lookup> {
        if let Some(found) = self.complete(input) {
            return Ok(Lookup::Completions(found));
        }
        debug!(input, "no prefix match, trying correction");
        self.correct(input).map(Lookup::Corrections)
    }
}
