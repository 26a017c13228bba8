//! Providers that never touch the network

use super::WordProvider;
use super::error::{ProviderError, Result};
use crate::core::Word;
use async_trait::async_trait;
use rand::prelude::IndexedRandom;

/// Always returns the same word
#[derive(Debug, Clone)]
pub struct FixedWordProvider {
    word: Word,
}

impl FixedWordProvider {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

#[async_trait]
impl WordProvider for FixedWordProvider {
    async fn random_word(&self) -> Result<Word> {
        Ok(self.word)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Picks a random word from an in-memory list
#[derive(Debug, Clone)]
pub struct ListWordProvider {
    words: Vec<Word>,
}

impl ListWordProvider {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build from string slices, skipping entries that are not valid words
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn pick(&self) -> Option<Word> {
        self.words.choose(&mut rand::rng()).copied()
    }
}

#[async_trait]
impl WordProvider for ListWordProvider {
    async fn random_word(&self) -> Result<Word> {
        self.pick().ok_or(ProviderError::Empty)
    }

    fn name(&self) -> &str {
        "list"
    }
}
