//! Word lists for offline play
//!
//! Provides an embedded word list compiled into the binary.

mod embedded;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
