//! Game session state machine
//!
//! A session is `Loading` until it has a secret word, `Active` while guesses
//! can still be made, and `GameOver` once the word is found or every attempt
//! is used. Operations that do not apply to the current phase are silent
//! no-ops.

use super::Key;
use super::board::{BoardRow, project_board};
use crate::core::{Feedback, MAX_ATTEMPTS, WORD_LENGTH, Word, compute_colors};
use crate::provider::{WordProvider, acquire_secret_word};

/// A submitted guess and its feedback, fixed at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub colors: Feedback,
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Active,
    GameOver,
}

/// One game: the secret word, submitted guesses and the typing buffer
#[derive(Debug, Clone, Default)]
pub struct Session {
    secret_word: Option<Word>,
    guesses: Vec<Guess>,
    current_guess: String,
    restart_pending: bool,
}

impl Session {
    /// Start an active session for `secret_word`
    #[must_use]
    pub fn new(secret_word: Word) -> Self {
        Self {
            secret_word: Some(secret_word),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.secret_word.is_none() {
            Phase::Loading
        } else if self.is_game_over() {
            Phase::GameOver
        } else {
            Phase::Active
        }
    }

    #[must_use]
    pub const fn secret_word(&self) -> Option<Word> {
        self.secret_word
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.secret_word.is_none()
    }

    /// True if any recorded guess equals the secret word
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.secret_word
            .is_some_and(|secret| self.guesses.iter().any(|g| g.word == secret))
    }

    /// True once every attempt is used or the word has been found
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.guesses.len() >= MAX_ATTEMPTS || self.is_win()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Fetch a new secret word, falling back to `fallback` on failure.
    ///
    /// Replaces only the secret word; guesses and the buffer are untouched.
    pub async fn acquire_secret_word(&mut self, provider: &dyn WordProvider, fallback: Word) {
        let word = acquire_secret_word(provider, fallback).await;
        self.secret_word = Some(word);
        self.restart_pending = false;
    }

    /// Score the buffer and record it as a guess.
    ///
    /// No-op unless the session is active and the buffer holds a full word.
    pub fn submit_guess(&mut self) {
        if self.phase() != Phase::Active || self.current_guess.len() != WORD_LENGTH {
            return;
        }
        let Some(secret) = self.secret_word else {
            return;
        };
        let Ok(word) = Word::new(&self.current_guess) else {
            return;
        };

        self.guesses.push(Guess {
            word,
            colors: compute_colors(&word, &secret),
        });
        self.current_guess.clear();
    }

    /// Clear the board and wait for a new secret word.
    ///
    /// Returns `false` (and changes nothing) if a restart is already waiting
    /// for its word.
    pub fn begin_restart(&mut self) -> bool {
        if self.restart_pending {
            return false;
        }
        self.guesses.clear();
        self.current_guess.clear();
        self.secret_word = None;
        self.restart_pending = true;
        true
    }

    /// Install the word a restart was waiting for
    pub fn finish_restart(&mut self, secret_word: Word) {
        self.secret_word = Some(secret_word);
        self.restart_pending = false;
    }

    /// Restart in one go: clear, fetch, install
    pub async fn restart(&mut self, provider: &dyn WordProvider, fallback: Word) {
        if self.begin_restart() {
            self.acquire_secret_word(provider, fallback).await;
        }
    }

    /// Apply one key press.
    ///
    /// Ignored unless the session is active. Enter submits a full buffer,
    /// Backspace removes the last letter, letters are appended uppercased
    /// while there is room, and any other key is dropped.
    pub fn handle_key_input(&mut self, key: Key) {
        if self.phase() != Phase::Active {
            return;
        }

        match key {
            Key::Enter => {
                if self.current_guess.len() == WORD_LENGTH {
                    self.submit_guess();
                }
            }
            Key::Backspace => {
                self.current_guess.pop();
            }
            _ => {
                if let Some(letter) = key.letter()
                    && self.current_guess.len() < WORD_LENGTH
                {
                    self.current_guess.push(letter);
                }
            }
        }
    }

    /// Render-ready rows, always `MAX_ATTEMPTS` long
    #[must_use]
    pub fn board(&self) -> Vec<BoardRow> {
        project_board(&self.guesses, &self.current_guess, self.is_game_over())
    }
}
