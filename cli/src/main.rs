//! wordtrie: prefix completion with spelling-correction fallback.
//!
//! Usage:
//!   wordtrie                                  interactive: enter words, then search
//!   wordtrie --words words.txt                interactive over a word file
//!   wordtrie --words words.txt complete ap    one-shot completion
//!   echo "apple:5 bat:3" | wordtrie correct aple
//!   wordtrie --words words.txt list --json

mod display;
mod repl;
mod words;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wordtrie_core::{Config, Engine, Lookup};

#[derive(Parser, Debug)]
#[command(name = "wordtrie")]
#[command(about = "Word completion with spelling-correction fallback")]
struct Cli {
    /// Vocabulary file of `word[:frequency]` tokens
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of suggestions per query
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Maximum edit distance for corrections
    #[arg(long)]
    max_distance: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (the default)
    Repl,
    /// Complete a prefix, correcting it if no word starts with it
    Complete {
        prefix: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List words within the edit-distance limit of a token
    Correct {
        token: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every word alphabetically
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load_toml(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(n) = self.max_suggestions {
            cfg.max_suggestions = n;
        }
        if let Some(d) = self.max_distance {
            cfg.max_edit_distance = d;
        }
        Ok(cfg)
    }
}

/// Log filter from `RUST_LOG`-style directives, `warn` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Load the vocabulary from `--words`, or from stdin for one-shot commands.
fn load_engine(cli: &Cli, config: Config, interactive: bool) -> Result<Engine> {
    let vocab = match &cli.words {
        Some(path) => {
            let vocab = words::load_vocabulary(path, &config)?;
            if vocab.entries.is_empty() {
                warn!(path = %path.display(), "word file produced no words");
            }
            vocab
        }
        None if interactive => words::Vocabulary::default(),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read words from stdin")?;
            let vocab = words::parse_vocabulary(&content, &config);
            for token in &vocab.rejected {
                warn!(token = %token, "skipping invalid word");
            }
            vocab
        }
    };

    let mut engine = Engine::new(config);
    engine.load(vocab.entries);
    info!(
        words = engine.dictionary().len(),
        rejected = vocab.rejected.len(),
        "vocabulary loaded"
    );
    Ok(engine)
}

fn print_lookup(input: &str, lookup: &Lookup, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let report = display::LookupReport::new(input, lookup);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        display::write_lookup(&mut out, input, lookup)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let interactive = matches!(cli.command, None | Some(Command::Repl));
    let mut engine = load_engine(&cli, config, interactive)?;

    match &cli.command {
        None | Some(Command::Repl) => {
            let stdin = io::stdin();
            repl::Repl::new(&mut engine, stdin.lock(), io::stdout().lock())
                .word_prompt(cli.words.is_none())
                .run()?;
        }
        Some(Command::Complete { prefix, json }) => {
            let lookup = engine.suggest(prefix)?;
            print_lookup(prefix, &lookup, *json)?;
        }
        Some(Command::Correct { token, json }) => {
            let lookup = Lookup::Corrections(engine.correct(token)?);
            if *json {
                print_lookup(token, &lookup, true)?;
            } else {
                display::write_corrections(&mut io::stdout().lock(), lookup.suggestions())?;
            }
        }
        Some(Command::List { json }) => {
            let words = engine.dictionary().sorted();
            let mut out = io::stdout().lock();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&words)?)?;
            } else {
                display::write_word_list(&mut out, &words)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn debug_enabled(filter: EnvFilter) -> bool {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(tracing::Level::DEBUG)
        })
    }

    #[test]
    fn test_log_filter_honors_directives() {
        assert!(debug_enabled(log_filter("debug")));
        assert!(debug_enabled(log_filter("info,wordtrie=debug")));
        assert!(!debug_enabled(log_filter("")));
        assert!(!debug_enabled(log_filter("wordtrie_core=debug")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "wordtrie",
            "--max-suggestions",
            "3",
            "--max-distance",
            "1",
            "list",
        ]);
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.max_suggestions, 3);
        assert_eq!(cfg.max_edit_distance, 1);
        assert_eq!(cfg.max_word_length, Config::default().max_word_length);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "max_suggestions = 4\nmax_edit_distance = 0\n").unwrap();

        let path = path.to_str().unwrap();
        let cli = Cli::parse_from([
            "wordtrie",
            "--config",
            path,
            "--max-distance",
            "3",
            "complete",
            "ap",
        ]);
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.max_suggestions, 4);
        assert_eq!(cfg.max_edit_distance, 3);
        assert!(matches!(cli.command, Some(Command::Complete { ref prefix, json: false }) if prefix == "ap"));
    }

    #[test]
    fn test_load_engine_from_word_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "apple:5 app:2 apt:1 bat:3 b4d\n").unwrap();

        let cli = Cli::parse_from(["wordtrie", "--words", path.to_str().unwrap()]);
        let engine = load_engine(&cli, Config::default(), true).unwrap();
        assert_eq!(engine.dictionary().len(), 4);
        assert_eq!(engine.complete("ap").unwrap()[0].word, "apple");
    }

    #[test]
    fn test_empty_word_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# nothing usable
b4d 42
").unwrap();

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(log_filter(""))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let cli = Cli::parse_from(["wordtrie", "--words", path.to_str().unwrap()]);
        let engine = tracing::subscriber::with_default(subscriber, || {
            load_engine(&cli, Config::default(), true).unwrap()
        });

        assert!(engine.trie().is_empty());
        assert!(logs.contents().contains("word file produced no words"));
    }
}
