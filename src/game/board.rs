//! Render-ready projection of a session

use super::Guess;
use crate::core::{LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH};

/// Character used for cells without a letter
pub const FILLER: char = ' ';

/// One row of the board
///
/// `colors` is `None` for cells that have not been scored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub word: String,
    pub colors: [Option<LetterFeedback>; WORD_LENGTH],
}

impl BoardRow {
    /// Row for a submitted guess
    #[must_use]
    pub fn scored(guess: &Guess) -> Self {
        Self {
            word: guess.word.to_string(),
            colors: (*guess.colors.tags()).map(Some),
        }
    }

    /// Unscored row showing `letters` padded with `FILLER`
    #[must_use]
    pub fn pending(letters: &str) -> Self {
        let mut word: String = letters.chars().take(WORD_LENGTH).collect();
        while word.chars().count() < WORD_LENGTH {
            word.push(FILLER);
        }
        Self {
            word,
            colors: [None; WORD_LENGTH],
        }
    }

    /// Row with no letters at all
    #[must_use]
    pub fn empty() -> Self {
        Self::pending("")
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }
}

/// Build the fixed-height board
///
/// Guessed rows first, then the live buffer (only while the game is still
/// running), then empty rows up to `MAX_ATTEMPTS`.
#[must_use]
pub fn project_board(guesses: &[Guess], current_guess: &str, game_over: bool) -> Vec<BoardRow> {
    (0..MAX_ATTEMPTS)
        .map(|i| match guesses.get(i) {
            Some(guess) => BoardRow::scored(guess),
            None if i == guesses.len() && !game_over => BoardRow::pending(current_guess),
            None => BoardRow::empty(),
        })
        .collect()
}
