//! Secret word providers
//!
//! A provider supplies random words. `acquire_secret_word` wraps any provider
//! with the fallback policy: every failure collapses into a fixed word.

pub mod error;
mod fixed;
mod http;

pub use error::{ProviderError, Result};
pub use fixed::{FixedWordProvider, ListWordProvider};
pub use http::{DEFAULT_WORD_URL, HttpWordProvider, parse_word_payload};

use crate::core::Word;
use async_trait::async_trait;

/// Word used whenever a provider fails
pub const DEFAULT_FALLBACK_WORD: &str = "APPLE";

/// Source of random secret words
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Fetch one random 5-letter word
    async fn random_word(&self) -> Result<Word>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Get a secret word from `provider`, substituting `fallback` on any failure.
///
/// Never fails. Network errors, bad payloads and invalid words are logged and
/// otherwise indistinguishable to the caller.
pub async fn acquire_secret_word(provider: &dyn WordProvider, fallback: Word) -> Word {
    match provider.random_word().await {
        Ok(word) => {
            tracing::debug!(provider = provider.name(), word = %word, "Acquired secret word");
            word
        }
        Err(err) => {
            tracing::warn!(
                provider = provider.name(),
                error = %err,
                fallback = %fallback,
                "Could not fetch a secret word, using fallback"
            );
            fallback
        }
    }
}

/// The built-in fallback word as a `Word`
///
/// # Panics
/// Will not panic - the constant is a valid 5-letter word.
#[must_use]
pub fn default_fallback_word() -> Word {
    Word::new(DEFAULT_FALLBACK_WORD).expect("fallback word is valid")
}
