//! Rendering of ranked results and word lists.
use std::io::{self, Write};

use serde::Serialize;
use wordtrie_core::{Lookup, Suggestion, WordEntry};

pub fn write_completions<W: Write>(out: &mut W, prefix: &str, found: &[Suggestion]) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "No suggestions found for \"{}\".", prefix);
    }
    writeln!(out, "Suggestions for \"{}\":", prefix)?;
    for (i, s) in found.iter().enumerate() {
        writeln!(out, "{:2}. {} (frequency: {})", i + 1, s.word, s.frequency)?;
    }
    Ok(())
}

pub fn write_corrections<W: Write>(out: &mut W, found: &[Suggestion]) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "No similar words found.");
    }
    writeln!(out, "Did you mean:")?;
    for (i, s) in found.iter().enumerate() {
        writeln!(out, "{:2}. {} (distance: {})", i + 1, s.word, s.distance)?;
    }
    Ok(())
}

/// Print a [`Lookup`] the way the interactive prefix search does.
pub fn write_lookup<W: Write>(out: &mut W, input: &str, lookup: &Lookup) -> io::Result<()> {
    match lookup {
        Lookup::Completions(found) => write_completions(out, input, found),
        Lookup::Corrections(found) => {
            writeln!(
                out,
                "No words with prefix \"{}\". Trying spell correction...",
                input
            )?;
            write_corrections(out, found)
        }
    }
}

pub fn write_word_list<W: Write>(out: &mut W, words: &[WordEntry]) -> io::Result<()> {
    for (i, entry) in words.iter().enumerate() {
        writeln!(out, "{:3}. {}", i + 1, entry.word)?;
    }
    Ok(())
}

/// JSON form of a [`Lookup`] for scripted use.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub input: &'a str,
    pub corrected: bool,
    pub suggestions: &'a [Suggestion],
}

impl<'a> LookupReport<'a> {
    pub fn new(input: &'a str, lookup: &'a Lookup) -> Self {
        Self {
            input,
            corrected: lookup.is_correction(),
            suggestions: lookup.suggestions(),
        }
    }
}
