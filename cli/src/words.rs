//! Reading `word[:frequency]` vocabularies from text.
//!
//! Tokens are separated by whitespace; `#` starts a comment that runs to the
//! end of the line. Invalid words are reported back, not inserted.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;
use wordtrie_core::utils::parse_entry;
use wordtrie_core::Config;

/// Words accepted from a vocabulary source, plus the tokens that were not.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub entries: Vec<(String, u64)>,
    pub rejected: Vec<String>,
}

/// Parse vocabulary text, validating each word against `config`.
pub fn parse_vocabulary(content: &str, config: &Config) -> Vocabulary {
    let mut vocab = Vocabulary::default();
    for line in content.lines() {
        let line = line.split_once('#').map_or(line, |(before, _)| before);
        for token in line.split_whitespace() {
            let (word, frequency) = parse_entry(token);
            if config.accepts(word) {
                vocab.entries.push((word.to_string(), frequency));
            } else {
                vocab.rejected.push(token.to_string());
            }
        }
    }
    vocab
}

/// Read and parse a vocabulary file, logging each rejected token.
pub fn load_vocabulary(path: &Path, config: &Config) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word file {}", path.display()))?;
    let vocab = parse_vocabulary(&content, config);
    for token in &vocab.rejected {
        warn!(token = %token, file = %path.display(), "skipping invalid word");
    }
    Ok(vocab)
}
