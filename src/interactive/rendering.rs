//! TUI rendering with ratatui
//!
//! Board, status and statistics panels for the game.

use super::app::UiState;
use crate::core::{LetterFeedback, MAX_ATTEMPTS};
use crate::game::BoardRow;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Min(MAX_ATTEMPTS as u16 * 2 + 2), // Board and info
            Constraint::Length(3),                      // Status line
            Constraint::Length(1),                      // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, state, main_chunks[0]);
    render_info_panel(f, state, main_chunks[1]);
    render_status(f, state, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(tag: Option<LetterFeedback>) -> Style {
    match tag {
        Some(LetterFeedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterFeedback::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterFeedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    }
}

fn row_line(row: &BoardRow) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.colors.len() * 2);
    for (letter, tag) in row.word.chars().zip(row.colors) {
        spans.push(Span::styled(format!(" {letter} "), tile_style(tag)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, state: &UiState, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in &state.view.board {
        lines.push(row_line(row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, state: &UiState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_attempts(f, state, chunks[0]);
    render_statistics(f, state, chunks[1]);
}

fn render_attempts(f: &mut Frame, state: &UiState, area: Rect) {
    let used = state.view.guesses_used;
    let percent = (used * 100 / MAX_ATTEMPTS).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, state: &UiState, area: Rect) {
    let stats = &state.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    ))];
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = count * 12 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, state: &UiState, area: Rect) {
    let view = &state.view;
    let (text, color) = if view.is_loading {
        ("Picking a secret word...".to_string(), Color::Cyan)
    } else if view.is_win {
        (
            format!("🎉 Solved in {} guesses! Tab for a new word", view.guesses_used),
            Color::Green,
        )
    } else if view.is_game_over {
        let secret = view.secret_word.map(|w| w.to_string()).unwrap_or_default();
        (
            format!("Out of guesses. The word was {secret}. Tab for a new word"),
            Color::Red,
        )
    } else {
        (
            format!("Type a 5-letter word: {}", view.current_guess),
            Color::Yellow,
        )
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Backspace: Delete | Tab/Ctrl+N: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
