//! Game configuration
//!
//! Built from command-line flags in `main`; the library never reads the
//! environment or files.

use crate::core::{Word, WordError};
use crate::provider::{
    DEFAULT_WORD_URL, HttpWordProvider, ListWordProvider, ProviderError, WordProvider,
    default_fallback_word,
};
use crate::wordlists::ANSWERS;
use std::sync::Arc;
use std::time::Duration;

/// Where secret words come from and what to use when that fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Word service endpoint
    pub word_url: String,
    /// Word used when the provider fails
    pub fallback_word: Word,
    /// Pick words from the embedded list instead of the network
    pub offline: bool,
    /// Per-request timeout for the word service; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl GameConfig {
    /// Build a config, validating the fallback word
    ///
    /// # Errors
    /// Returns `WordError` if `fallback_word` is not a 5-letter word.
    pub fn new(
        word_url: impl Into<String>,
        fallback_word: &str,
        offline: bool,
        request_timeout: Option<Duration>,
    ) -> Result<Self, WordError> {
        Ok(Self {
            word_url: word_url.into(),
            fallback_word: Word::new(fallback_word)?,
            offline,
            request_timeout,
        })
    }

    /// Construct the word provider this config describes
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn build_provider(&self) -> Result<Arc<dyn WordProvider>, ProviderError> {
        if self.offline {
            return Ok(Arc::new(ListWordProvider::from_slice(ANSWERS)));
        }

        let provider = match self.request_timeout {
            Some(timeout) => HttpWordProvider::with_timeout(self.word_url.clone(), timeout)?,
            None => HttpWordProvider::new(self.word_url.clone()),
        };
        Ok(Arc::new(provider))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            fallback_word: default_fallback_word(),
            offline: false,
            request_timeout: None,
        }
    }
}
