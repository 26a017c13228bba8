//! Core domain types for the game
//!
//! Pure types with no I/O: words, per-letter feedback, and the scoring function.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, compute_colors, compute_colors_str};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;
