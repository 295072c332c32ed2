//! The interactive word-entry prompt and menu loop.
//!
//! Input is read as whitespace-separated tokens, so several answers may share
//! a line. End of input ends the session quietly.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};
use wordtrie_core::utils::{is_valid_word, parse_entry};
use wordtrie_core::Engine;

use crate::display;

/// Whitespace-separated tokens pulled lazily from a reader.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Interactive session over an engine.
pub struct Repl<'e, R, W> {
    engine: &'e mut Engine,
    input: Tokens<R>,
    out: W,
    word_prompt: bool,
}

impl<'e, R: BufRead, W: Write> Repl<'e, R, W> {
    pub fn new(engine: &'e mut Engine, input: R, out: W) -> Self {
        Self {
            engine,
            input: Tokens::new(input),
            out,
            word_prompt: true,
        }
    }

    /// Whether an empty engine asks for words before the menu. Turned off
    /// when the vocabulary came from a word file.
    pub fn word_prompt(mut self, enabled: bool) -> Self {
        self.word_prompt = enabled;
        self
    }

    /// Run the whole session. Asks for words first when the engine is empty,
    /// unless the word prompt is disabled.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Trie-Based Word Suggestion System")?;
        if self.word_prompt && self.engine.trie().is_empty() && !self.read_words()? {
            return Ok(());
        }
        self.engine.refresh_dictionary();
        self.menu_loop()
    }

    /// Prompt for a word count, then that many valid words.
    ///
    /// Returns `false` if input ended first.
    fn read_words(&mut self) -> Result<bool> {
        let max_words = self.engine.config().max_words;
        write!(
            self.out,
            "How many words do you want to enter? (1-{}): ",
            max_words
        )?;
        self.out.flush()?;

        let count = loop {
            let Some(token) = self.input.next_token()? else {
                return Ok(false);
            };
            match token.parse::<usize>() {
                Ok(n) if (1..=max_words).contains(&n) => break n,
                _ => {
                    write!(
                        self.out,
                        "Invalid input. Enter a number between 1 and {}: ",
                        max_words
                    )?;
                    self.out.flush()?;
                }
            }
        };

        writeln!(
            self.out,
            "Enter words (one per line) with optional frequency (word:freq):"
        )?;
        let mut accepted = 0;
        while accepted < count {
            let Some(token) = self.input.next_token()? else {
                return Ok(false);
            };
            let (word, frequency) = parse_entry(&token);
            if !self.engine.config().accepts(word) {
                writeln!(self.out, "Invalid word. Try again.")?;
                continue;
            }
            self.engine.insert(word, frequency);
            accepted += 1;
        }
        info!(count, "vocabulary entered");
        Ok(true)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Menu:")?;
        writeln!(self.out, "1. Search by prefix")?;
        writeln!(self.out, "2. Show all words")?;
        writeln!(self.out, "3. Exit")?;
        write!(self.out, "Choose an option: ")?;
        self.out.flush()
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let choice = loop {
                let Some(token) = self.input.next_token()? else {
                    return Ok(());
                };
                match token.parse::<i64>() {
                    Ok(n) => break n,
                    Err(_) => {
                        write!(self.out, "Invalid input. Enter a number (1-3): ")?;
                        self.out.flush()?;
                    }
                }
            };
            debug!(choice, "menu selection");

            match choice {
                1 => {
                    if !self.search()? {
                        return Ok(());
                    }
                }
                2 => self.show_all()?,
                3 => {
                    writeln!(self.out, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Returns `false` if input ended before a prefix was given.
    fn search(&mut self) -> Result<bool> {
        write!(self.out, "Enter prefix to search: ")?;
        self.out.flush()?;
        let Some(prefix) = self.input.next_token()? else {
            return Ok(false);
        };
        if !is_valid_word(&prefix, usize::MAX) {
            writeln!(self.out, "Invalid prefix. Only letters allowed.")?;
            return Ok(true);
        }
        let lookup = self.engine.suggest(&prefix)?;
        display::write_lookup(&mut self.out, &prefix, &lookup)?;
        Ok(true)
    }

    fn show_all(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "All words in the Trie:")?;
        let words = wordtrie_core::Dictionary::from_trie(self.engine.trie()).sorted();
        display::write_word_list(&mut self.out, &words)
    }
}
