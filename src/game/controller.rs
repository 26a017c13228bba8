//! Game controller with injected input and rendering
//!
//! The controller owns one `Session` and drives it from an `InputSource`,
//! pushing a `GameView` to a `BoardSink` after every event. Restarts fetch
//! their word on the tokio runtime, so input keeps flowing (and is dropped)
//! while the new word loads.

use super::board::BoardRow;
use super::{Key, Phase, Session};
use crate::core::Word;
use crate::provider::{WordProvider, acquire_secret_word};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// How long `run` waits for input before checking on a pending restart
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something the player did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Restart,
    Quit,
}

/// Where input events come from
pub trait InputSource {
    /// Start delivering events
    ///
    /// # Errors
    /// Returns an error if the underlying input device cannot be set up.
    fn subscribe(&mut self) -> Result<()>;

    /// Wait up to `timeout` for the next event
    ///
    /// # Errors
    /// Returns an error if reading from the input device fails.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;

    /// Stop delivering events
    ///
    /// # Errors
    /// Returns an error if the underlying input device cannot be released.
    fn unsubscribe(&mut self) -> Result<()>;
}

/// Where game views are drawn
pub trait BoardSink {
    /// Draw one frame
    ///
    /// # Errors
    /// Returns an error if drawing fails.
    fn render(&mut self, view: &GameView) -> Result<()>;
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: Vec<BoardRow>,
    pub current_guess: String,
    pub guesses_used: usize,
    pub is_win: bool,
    pub is_game_over: bool,
    pub is_loading: bool,
    /// Revealed only once the game is over
    pub secret_word: Option<Word>,
}

impl GameView {
    #[must_use]
    pub fn of(session: &Session) -> Self {
        let is_game_over = session.phase() == Phase::GameOver;
        Self {
            board: session.board(),
            current_guess: session.current_guess().to_string(),
            guesses_used: session.guesses().len(),
            is_win: session.is_win(),
            is_game_over,
            is_loading: session.is_loading(),
            secret_word: session.secret_word().filter(|_| is_game_over),
        }
    }
}

/// Drives a `Session` from an input source and redraws through a sink
pub struct GameController<I, R> {
    session: Session,
    provider: Arc<dyn WordProvider>,
    fallback: Word,
    input: I,
    sink: R,
    pending: Option<oneshot::Receiver<Word>>,
    subscribed: bool,
}

impl<I: InputSource, R: BoardSink> GameController<I, R> {
    pub fn new(provider: Arc<dyn WordProvider>, fallback: Word, input: I, sink: R) -> Self {
        Self {
            session: Session::default(),
            provider,
            fallback,
            input,
            sink,
            pending: None,
            subscribed: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn view(&self) -> GameView {
        GameView::of(&self.session)
    }

    /// Fetch the first secret word, then start listening for input.
    ///
    /// # Errors
    /// Returns an error if subscribing to input or the first render fails.
    pub async fn start(&mut self) -> Result<()> {
        self.sink.render(&self.view())?;
        self.session
            .acquire_secret_word(self.provider.as_ref(), self.fallback)
            .await;
        tracing::info!("Game started");

        self.input.subscribe()?;
        self.subscribed = true;
        self.sink.render(&self.view())
    }

    /// Stop listening for input. Safe to call more than once.
    ///
    /// # Errors
    /// Returns an error if the input source fails to unsubscribe.
    pub fn stop(&mut self) -> Result<()> {
        if self.subscribed {
            self.subscribed = false;
            self.input.unsubscribe()?;
            tracing::info!("Game stopped");
        }
        Ok(())
    }

    /// Process at most one input event and redraw.
    ///
    /// Returns `false` once the player asked to quit.
    ///
    /// # Errors
    /// Returns an error if reading input or rendering fails.
    pub fn step(&mut self, timeout: Duration) -> Result<bool> {
        self.poll_pending();

        match self.input.next_event(timeout)? {
            Some(InputEvent::Quit) => return Ok(false),
            Some(InputEvent::Restart) => {
                self.request_restart();
            }
            Some(InputEvent::Key(key)) => self.handle_key(key),
            None => {}
        }

        self.poll_pending();
        self.sink.render(&self.view())?;
        Ok(true)
    }

    /// Step until the player quits
    ///
    /// # Errors
    /// Returns the first input or rendering error.
    pub fn run(&mut self) -> Result<()> {
        while self.step(POLL_INTERVAL)? {}
        Ok(())
    }

    /// Begin a restart in the background.
    ///
    /// Must be called from within a tokio runtime. Returns `false` if a
    /// restart is already loading.
    pub fn request_restart(&mut self) -> bool {
        if !self.session.begin_restart() {
            tracing::debug!("Restart ignored, a new word is already loading");
            return false;
        }
        tracing::info!("Restarting game");

        let (tx, rx) = oneshot::channel();
        let provider = Arc::clone(&self.provider);
        let fallback = self.fallback;
        tokio::spawn(async move {
            let word = acquire_secret_word(provider.as_ref(), fallback).await;
            // Receiver is gone only if the controller was dropped
            let _ = tx.send(word);
        });

        self.pending = Some(rx);
        true
    }

    /// Wait for a pending restart to finish, then redraw
    ///
    /// # Errors
    /// Returns an error if rendering fails.
    pub async fn settle(&mut self) -> Result<()> {
        if let Some(rx) = self.pending.take() {
            let word = rx.await.unwrap_or(self.fallback);
            self.install_word(word);
            self.sink.render(&self.view())?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: Key) {
        let was_over = self.session.is_game_over();
        self.session.handle_key_input(key);

        if !was_over && self.session.is_game_over() {
            tracing::info!(
                win = self.session.is_win(),
                guesses = self.session.guesses().len(),
                "Game over"
            );
        }
    }

    fn poll_pending(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(word) => {
                self.install_word(word);
                self.pending = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::warn!("Word fetch task ended without a word, using fallback");
                self.install_word(self.fallback);
                self.pending = None;
            }
        }
    }

    fn install_word(&mut self, word: Word) {
        tracing::debug!(word = %word, "New secret word");
        self.session.finish_restart(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::provider::{FixedWordProvider, default_fallback_word};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedInput {
        events: VecDeque<InputEvent>,
        subscribed: bool,
        unsubscribe_calls: usize,
    }

    impl ScriptedInput {
        fn push_word(&mut self, word: &str) {
            for c in word.chars() {
                self.events.push_back(InputEvent::Key(Key::Char(c)));
            }
            self.events.push_back(InputEvent::Key(Key::Enter));
        }
    }

    impl InputSource for ScriptedInput {
        fn subscribe(&mut self) -> Result<()> {
            self.subscribed = true;
            Ok(())
        }

        fn next_event(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
            assert!(self.subscribed, "events read before subscribe");
            Ok(self.events.pop_front())
        }

        fn unsubscribe(&mut self) -> Result<()> {
            self.subscribed = false;
            self.unsubscribe_calls += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<GameView>,
    }

    impl BoardSink for RecordingSink {
        fn render(&mut self, view: &GameView) -> Result<()> {
            self.frames.push(view.clone());
            Ok(())
        }
    }

    fn controller(
        secret: &str,
        input: ScriptedInput,
    ) -> GameController<ScriptedInput, RecordingSink> {
        let provider = Arc::new(FixedWordProvider::new(Word::new(secret).unwrap()));
        GameController::new(
            provider,
            default_fallback_word(),
            input,
            RecordingSink::default(),
        )
    }

    fn drain(game: &mut GameController<ScriptedInput, RecordingSink>) {
        while !game.input.events.is_empty() {
            assert!(game.step(Duration::ZERO).unwrap());
        }
    }

    #[tokio::test]
    async fn start_loads_word_then_subscribes() {
        let mut game = controller("crane", ScriptedInput::default());
        assert!(game.session().is_loading());

        game.start().await.unwrap();

        assert!(game.input.subscribed);
        assert_eq!(game.session().phase(), Phase::Active);
        let frames = &game.sink().frames;
        assert!(frames[0].is_loading);
        assert!(!frames.last().unwrap().is_loading);
    }

    #[tokio::test]
    async fn plays_a_winning_game() {
        let mut input = ScriptedInput::default();
        input.push_word("trace");
        input.push_word("crane");

        let mut game = controller("crane", input);
        game.start().await.unwrap();
        drain(&mut game);

        let view = game.view();
        assert!(view.is_win);
        assert!(view.is_game_over);
        assert_eq!(view.guesses_used, 2);
        assert_eq!(view.secret_word, Some(Word::new("crane").unwrap()));
        assert_eq!(view.board[1].word, "CRANE");
    }

    #[tokio::test]
    async fn secret_hidden_while_playing() {
        let mut input = ScriptedInput::default();
        input.push_word("trace");

        let mut game = controller("crane", input);
        game.start().await.unwrap();
        drain(&mut game);

        assert_eq!(game.view().secret_word, None);
        assert!(game.sink().frames.iter().all(|f| f.secret_word.is_none()));
    }

    #[tokio::test]
    async fn losing_game_drops_further_keys() {
        let mut input = ScriptedInput::default();
        for _ in 0..MAX_ATTEMPTS {
            input.push_word("slate");
        }
        input.events.push_back(InputEvent::Key(Key::Char('a')));

        let mut game = controller("crane", input);
        game.start().await.unwrap();
        drain(&mut game);

        let view = game.view();
        assert!(view.is_game_over);
        assert!(!view.is_win);
        assert_eq!(view.current_guess, "");
        assert_eq!(view.guesses_used, MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn restart_enters_loading_until_settled() {
        let mut input = ScriptedInput::default();
        input.push_word("crane");
        input.events.push_back(InputEvent::Restart);
        input.events.push_back(InputEvent::Key(Key::Char('x')));
        input.events.push_back(InputEvent::Restart);

        let mut game = controller("crane", input);
        game.start().await.unwrap();
        drain(&mut game);

        // Current-thread runtime: the fetch task has not run yet
        assert!(game.session().is_loading());
        assert_eq!(game.view().current_guess, "");
        assert!(game.view().board.iter().all(|row| !row.is_scored()));

        game.settle().await.unwrap();

        let view = game.view();
        assert!(!view.is_loading);
        assert!(!view.is_game_over);
        assert_eq!(view.guesses_used, 0);
        assert_eq!(view.current_guess, "");
    }

    #[tokio::test]
    async fn quit_stops_stepping() {
        let mut input = ScriptedInput::default();
        input.events.push_back(InputEvent::Quit);

        let mut game = controller("crane", input);
        game.start().await.unwrap();
        assert!(!game.step(Duration::ZERO).unwrap());
    }

    #[tokio::test]
    async fn run_returns_on_quit() {
        let mut input = ScriptedInput::default();
        input.push_word("crane");
        input.events.push_back(InputEvent::Quit);

        let mut game = controller("crane", input);
        game.start().await.unwrap();
        game.run().unwrap();
        assert!(game.session().is_win());
    }

    #[tokio::test]
    async fn stop_unsubscribes_once() {
        let mut game = controller("crane", ScriptedInput::default());
        game.start().await.unwrap();

        game.stop().unwrap();
        game.stop().unwrap();

        assert!(!game.input.subscribed);
        assert_eq!(game.input.unsubscribe_calls, 1);
    }
}
