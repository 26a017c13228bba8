//! Interactive TUI interface
//!
//! Terminal implementations of the game's input and rendering ports.

mod app;
mod rendering;

pub use app::{Statistics, TerminalInput, TerminalRenderer, UiState, map_key_event, run_tui};
