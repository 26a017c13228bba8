//! Wordle - CLI
//!
//! Play Wordle in the terminal, with a TUI and a line-based mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_words},
    config::GameConfig,
    output::print_score_result,
    provider::{DEFAULT_FALLBACK_WORD, DEFAULT_WORD_URL},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word service URL returning a JSON array like ["crane"]
    #[arg(long, global = true, default_value = DEFAULT_WORD_URL)]
    word_url: String,

    /// Word used when the word service fails
    #[arg(long, global = true, default_value = DEFAULT_FALLBACK_WORD)]
    fallback_word: String,

    /// Pick words from the built-in list instead of the word service
    #[arg(long, global = true)]
    offline: bool,

    /// Give up on the word service after this many seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback for a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        answer: String,
    },
}

/// Initialize logging
///
/// Logs go to `--log-file` if given. Otherwise line modes log to stderr and
/// the TUI does not log, since stderr shares its screen.
fn init_logging(cli: &Cli, tui: bool) -> Result<()> {
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_game={level}")));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&cli, matches!(command, Commands::Play))?;

    let config = GameConfig::new(
        cli.word_url.clone(),
        &cli.fallback_word,
        cli.offline,
        cli.timeout.map(Duration::from_secs),
    )
    .map_err(|e| anyhow::anyhow!("Invalid fallback word: {e}"))?;

    match command {
        Commands::Play => {
            let provider = config.build_provider()?;
            wordle_game::interactive::run_tui(provider, config.fallback_word).await
        }
        Commands::Simple => {
            let provider = config.build_provider()?;
            run_simple(provider.as_ref(), config.fallback_word).await
        }
        Commands::Score { guess, answer } => {
            let result = score_words(&guess, &answer)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
