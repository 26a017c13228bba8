//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a guess or a command.

use crate::core::{Word, WordError};
use crate::game::{GameView, Key, Phase, Session};
use crate::output::{print_board, print_game_result};
use crate::provider::WordProvider;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// What a line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Guess(Word),
    Invalid(WordError),
}

/// Interpret one line of user input
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let input = line.trim();
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineCommand::Quit,
        "new" | "n" | "restart" => LineCommand::NewGame,
        _ => match Word::new(input) {
            Ok(word) => LineCommand::Guess(word),
            Err(err) => LineCommand::Invalid(err),
        },
    }
}

/// Type `word` into the session and press Enter
pub fn enter_word(session: &mut Session, word: &Word) {
    for c in word.as_str().chars() {
        session.handle_key_input(Key::Char(c));
    }
    session.handle_key_input(Key::Enter);
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple(provider: &dyn WordProvider, fallback: Word) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a 5-letter guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut session = Session::default();
    load_word(&mut session, provider, fallback).await;
    print_board(&GameView::of(&session));

    loop {
        let prompt = if session.phase() == Phase::GameOver {
            "Play again? (new/quit)"
        } else {
            "Guess"
        };

        let Some(line) = get_user_input(prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_line(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::NewGame => {
                session.begin_restart();
                load_word(&mut session, provider, fallback).await;
                println!("\n🔄 New game started!");
                print_board(&GameView::of(&session));
            }
            LineCommand::Guess(_) if session.phase() == Phase::GameOver => {
                println!("The game is over. Type 'new' to play again.\n");
            }
            LineCommand::Guess(word) => {
                enter_word(&mut session, &word);
                let view = GameView::of(&session);
                print_board(&view);
                if view.is_game_over {
                    print_game_result(&view);
                    println!();
                }
            }
            LineCommand::Invalid(err) => {
                println!("❌ {err}\n");
            }
        }
    }
}

async fn load_word(session: &mut Session, provider: &dyn WordProvider, fallback: Word) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Picking a secret word...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    session.acquire_secret_word(provider, fallback).await;

    spinner.finish_and_clear();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("quit"), LineCommand::Quit);
        assert_eq!(parse_line("  Q "), LineCommand::Quit);
        assert_eq!(parse_line("new"), LineCommand::NewGame);
        assert_eq!(parse_line("Restart"), LineCommand::NewGame);
    }

    #[test]
    fn parse_guesses() {
        assert_eq!(
            parse_line("crane\n"),
            LineCommand::Guess(Word::new("CRANE").unwrap())
        );
        assert_eq!(
            parse_line("cranes"),
            LineCommand::Invalid(WordError::InvalidLength(6))
        );
        assert_eq!(
            parse_line("cr4ne"),
            LineCommand::Invalid(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn enter_word_submits_guess() {
        let mut session = Session::new(Word::new("crane").unwrap());
        enter_word(&mut session, &Word::new("slate").unwrap());
        enter_word(&mut session, &Word::new("crane").unwrap());

        assert_eq!(session.guesses().len(), 2);
        assert!(session.is_win());
        assert_eq!(session.current_guess(), "");
    }
}
