//! Display functions for boards and command results

use super::formatters::{colored_tile, create_progress_bar, row_to_emoji};
use crate::commands::ScoreResult;
use crate::core::MAX_ATTEMPTS;
use crate::game::{BoardRow, GameView};
use colored::Colorize;

/// Print one board row as colored tiles followed by its emoji summary
pub fn print_row(row: &BoardRow) {
    let tiles: String = row
        .word
        .chars()
        .zip(row.colors)
        .map(|(letter, tag)| colored_tile(letter, tag).to_string())
        .collect();
    println!("   {tiles}  {}", row_to_emoji(row));
}

/// Print the whole board with an attempts gauge
pub fn print_board(view: &GameView) {
    println!("\n{}", "─".repeat(40).cyan());
    for row in &view.board {
        print_row(row);
    }
    println!("{}", "─".repeat(40).cyan());
    println!(
        "   Attempts: [{}] {}/{}",
        create_progress_bar(view.guesses_used, MAX_ATTEMPTS, 12),
        view.guesses_used,
        MAX_ATTEMPTS
    );
}

/// Print the end-of-game banner
pub fn print_game_result(view: &GameView) {
    println!();
    if view.is_win {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", view.guesses_used)
                .green()
                .bold()
        );
    } else {
        let secret = view
            .secret_word
            .map(|w| w.to_string())
            .unwrap_or_default();
        println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            secret.bright_yellow().bold()
        );
    }
}

/// Print the feedback for a single guess/answer pair
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.as_str().bright_yellow().bold(),
        result.answer.as_str().bright_cyan().bold()
    );
    print_row(&result.row());
    let tags: Vec<&str> = result
        .feedback
        .tags()
        .iter()
        .map(|tag| tag.as_str())
        .collect();
    println!("   [{}]", tags.join(", "));
}
