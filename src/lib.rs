//! Wordle Game
//!
//! The logic layer of a Wordle-style game: feedback scoring, a session state
//! machine, secret word providers, and a terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Key, Session};
//!
//! let mut session = Session::new(Word::new("crane").unwrap());
//! for key in ["t", "r", "a", "c", "e", "Enter"] {
//!     session.handle_key_input(Key::from_name(key));
//! }
//!
//! assert_eq!(session.guesses()[0].colors.to_emoji(), "⬜🟩🟩🟨🟩");
//! assert!(!session.is_game_over());
//! ```

// Core domain types
pub mod core;

// Session state machine and controller
pub mod game;

// Secret word sources
pub mod provider;

// Embedded word list
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
