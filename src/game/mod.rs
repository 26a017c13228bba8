//! Game session and controller
//!
//! `Session` is the state machine; `GameController` drives it from injected
//! input and rendering ports.

mod board;
mod controller;
mod key;
mod session;

pub use board::{BoardRow, FILLER, project_board};
pub use controller::{BoardSink, GameController, GameView, InputEvent, InputSource, POLL_INTERVAL};
pub use key::Key;
pub use session::{Guess, Phase, Session};
