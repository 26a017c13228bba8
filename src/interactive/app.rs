//! TUI input, rendering state and main loop

use crate::core::{MAX_ATTEMPTS, Word};
use crate::game::{BoardSink, GameController, GameView, InputEvent, InputSource, Key};
use crate::provider::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Map a crossterm key event to a game input event
///
/// Esc and Ctrl+C quit, Tab and Ctrl+N restart, everything else is a key.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Char('c') if ctrl => InputEvent::Quit,
        KeyCode::Char('n') if ctrl => InputEvent::Restart,
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Tab => InputEvent::Restart,
        KeyCode::Enter => InputEvent::Key(Key::Enter),
        KeyCode::Backspace => InputEvent::Key(Key::Backspace),
        KeyCode::Char(c) => InputEvent::Key(Key::Char(c)),
        _ => InputEvent::Key(Key::Other),
    };
    Some(event)
}

/// Keyboard events from the terminal, in raw mode while subscribed
#[derive(Debug, Default)]
pub struct TerminalInput {
    raw: bool,
}

impl InputSource for TerminalInput {
    fn subscribe(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }

    fn unsubscribe(&mut self) -> Result<()> {
        if self.raw {
            disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record(&mut self, view: &GameView) {
        self.total_games += 1;
        if view.is_win {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(view.guesses_used) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Everything the renderer draws
#[derive(Debug, Clone)]
pub struct UiState {
    pub view: GameView,
    pub stats: Statistics,
}

/// Draws game views with ratatui
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    state: Option<UiState>,
    stats: Statistics,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wrap a backend
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be created.
    pub fn new(backend: B) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            state: None,
            stats: Statistics::default(),
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

impl<B: Backend> BoardSink for TerminalRenderer<B> {
    fn render(&mut self, view: &GameView) -> Result<()> {
        let was_over = self.state.as_ref().is_some_and(|s| s.view.is_game_over);
        if view.is_game_over && !was_over {
            self.stats.record(view);
        }

        let state = UiState {
            view: view.clone(),
            stats: self.stats.clone(),
        };
        self.terminal
            .draw(|f| super::rendering::ui(f, &state))?;
        self.state = Some(state);
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(provider: Arc<dyn WordProvider>, fallback: Word) -> Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let renderer = TerminalRenderer::new(CrosstermBackend::new(stdout))?;

    let mut game = GameController::new(provider, fallback, TerminalInput::default(), renderer);

    // Run app
    let res = run_game(&mut game).await;

    // Restore terminal
    game.stop()?;
    let terminal = game.sink_mut().terminal_mut();
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_game<B: Backend>(
    game: &mut GameController<TerminalInput, TerminalRenderer<B>>,
) -> Result<()> {
    game.start().await?;
    // Input polling blocks; keep the runtime's other workers free for word fetches
    tokio::task::block_in_place(|| game.run())
}
