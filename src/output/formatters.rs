//! Formatting utilities for terminal output

use crate::core::LetterFeedback;
use crate::game::BoardRow;
use colored::{ColoredString, Colorize};

/// Tile shown for a cell that has not been scored
pub const EMPTY_TILE: char = '⬛';

/// Format a board row as emoji tiles
#[must_use]
pub fn row_to_emoji(row: &BoardRow) -> String {
    row.colors
        .iter()
        .map(|tag| tag.map_or(EMPTY_TILE, LetterFeedback::emoji))
        .collect()
}

/// A letter on a background matching its feedback
#[must_use]
pub fn colored_tile(letter: char, tag: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match tag {
        Some(LetterFeedback::Correct) => text.black().on_green().bold(),
        Some(LetterFeedback::Present) => text.black().on_yellow().bold(),
        Some(LetterFeedback::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, compute_colors};
    use crate::game::Guess;

    #[test]
    fn row_to_emoji_empty_row() {
        assert_eq!(row_to_emoji(&BoardRow::empty()), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn row_to_emoji_scored_row() {
        let word = Word::new("trace").unwrap();
        let guess = Guess {
            word,
            colors: compute_colors(&word, &Word::new("crane").unwrap()),
        };
        assert_eq!(row_to_emoji(&BoardRow::scored(&guess)), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn colored_tile_pads_letter() {
        assert_eq!(&*colored_tile('A', None), " A ");
        assert_eq!(&*colored_tile('B', Some(LetterFeedback::Correct)), " B ");
        assert_eq!(&*colored_tile('C', Some(LetterFeedback::Absent)), " C ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6, 6, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
