//! Word Scramble - CLI
//!
//! Word formation game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_word, run_simple},
    game::{
        DEFAULT_LANGUAGE, FallbackWordSource, GameSession, RandomWordSource, WordListDictionary,
        WordSource,
    },
    output::print_check_result,
    wordlists::{DICTIONARY, START_WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'builtin' (default, 200 eight-letter words) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    words: String,

    /// Dictionary: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Language tag words are checked in
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,

    /// Seed for root word selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Root word to use when the word list cannot be loaded or is empty
    #[arg(long, global = true)]
    fallback_root: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// Check whether a word would be accepted for a given root word
    Check {
        /// The word to check
        word: String,

        /// Root word to check against
        #[arg(short, long)]
        root: String,
    },
}

type Session = GameSession<Box<dyn WordSource>, WordListDictionary>;

/// Load a word list based on a 'builtin'-or-path flag
fn load_words(source: &str, builtin: &[&str]) -> Result<Vec<String>> {
    use word_scramble::wordlists::loader::load_from_file;

    match source {
        "builtin" => Ok(words_from_slice(builtin)),
        path => load_from_file(path).with_context(|| format!("could not load word list '{path}'")),
    }
}

/// The builtin dictionary is English; a custom one is taken to be in `--language`
fn load_dictionary(cli: &Cli) -> Result<WordListDictionary> {
    let words = load_words(&cli.dictionary, DICTIONARY)?;
    let language = match cli.dictionary.as_str() {
        "builtin" => DEFAULT_LANGUAGE,
        _ => cli.language.as_str(),
    };
    Ok(WordListDictionary::new(language, words))
}

/// Root words for new rounds; with `--fallback-root` a load failure leaves the list empty
fn load_root_words(cli: &Cli) -> Result<Vec<String>> {
    match (load_words(&cli.words, START_WORDS), &cli.fallback_root) {
        (Ok(words), _) => Ok(words),
        (Err(err), Some(fallback)) => {
            let reason = format!("{err:#}");
            warn!(%reason, %fallback, "word list unavailable");
            Ok(Vec::new())
        }
        (Err(err), None) => Err(err),
    }
}

fn build_source(cli: &Cli) -> Result<Box<dyn WordSource>> {
    let words = load_root_words(cli)?;

    let random = match cli.seed {
        Some(seed) => RandomWordSource::with_seed(words, seed),
        None => RandomWordSource::new(words),
    };

    let source: Box<dyn WordSource> = match &cli.fallback_root {
        Some(fallback) => Box::new(FallbackWordSource::new(random, fallback.clone())),
        None => Box::new(random),
    };
    Ok(source)
}

fn start_session(cli: &Cli) -> Result<Session> {
    let source = build_source(cli)?;
    let dictionary = load_dictionary(cli)?;

    GameSession::with_language(source, dictionary, cli.language.clone())
        .context("cannot start a game without a root word")
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Check { ref word, ref root }) => run_check_command(&cli, word, root),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = start_session(cli)?;
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = start_session(cli)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(cli: &Cli, word: &str, root: &str) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let result = check_word(word, root, &dictionary, &cli.language).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_LIST: &str = "/nonexistent/word_scramble/words.txt";

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("word_scramble").chain(args.iter().copied()))
    }

    #[test]
    fn missing_word_list_is_an_error_without_fallback() {
        let cli = cli(&["-w", MISSING_LIST, "simple"]);
        let err = build_source(&cli).err().unwrap();
        assert!(format!("{err:#}").contains(MISSING_LIST));
    }

    #[test]
    fn missing_word_list_uses_fallback_root() {
        let cli = cli(&["-w", MISSING_LIST, "--fallback-root", "scramble", "simple"]);
        let mut source = build_source(&cli).unwrap();
        assert_eq!(source.pick_root_word().as_deref(), Some("scramble"));
    }

    #[test]
    fn builtin_word_list_ignores_fallback_root() {
        let cli = cli(&["--seed", "3", "--fallback-root", "zzzzzzzz", "simple"]);
        let mut source = build_source(&cli).unwrap();
        let word = source.pick_root_word().unwrap();
        assert!(START_WORDS.contains(&word.as_str()));
    }
}
