//! Score command
//!
//! Computes the feedback for one guess against one answer.

use crate::core::{Feedback, Word, WordError, compute_colors};
use crate::game::{BoardRow, Guess};

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

impl ScoreResult {
    /// The scored guess as a board row
    #[must_use]
    pub fn row(&self) -> BoardRow {
        BoardRow::scored(&Guess {
            word: self.guess,
            colors: self.feedback,
        })
    }
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;

    Ok(ScoreResult {
        guess,
        answer,
        feedback: compute_colors(&guess, &answer),
    })
}
