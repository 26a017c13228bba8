//! Word service reached over HTTP

use super::WordProvider;
use super::error::{ProviderError, Result};
use crate::core::Word;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Public endpoint returning `["word"]`
pub const DEFAULT_WORD_URL: &str = "https://random-word-api.herokuapp.com/word?length=5";

/// Fetches words from a JSON word service
pub struct HttpWordProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpWordProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Build a provider whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpWordProvider {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_URL)
    }
}

#[async_trait]
impl WordProvider for HttpWordProvider {
    async fn random_word(&self) -> Result<Word> {
        tracing::debug!(url = %self.url, "Requesting random word");

        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await?;
        parse_word_payload(&body)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Decode a word service response body.
///
/// The body must be a JSON array whose first element is a 5-letter string.
/// Case is normalized to uppercase.
///
/// # Errors
///
/// Returns `Decode` for invalid JSON or a non-array/non-string payload, `Empty`
/// for an empty array, and `InvalidWord` when the first element is not a
/// 5-letter word.
pub fn parse_word_payload(body: &[u8]) -> Result<Word> {
    let value: Value = serde_json::from_slice(body)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ProviderError::Decode(format!(
                "expected a JSON array, got {other}"
            )));
        }
    };

    let first = items.first().ok_or(ProviderError::Empty)?;
    let Some(text) = first.as_str() else {
        return Err(ProviderError::Decode(format!(
            "expected a string, got {first}"
        )));
    };

    Word::new(text).map_err(|source| ProviderError::InvalidWord {
        word: text.to_string(),
        source,
    })
}
