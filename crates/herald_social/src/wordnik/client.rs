//! Wordnik implementation of `LexiconSource`.

use crate::WordnikConfig;
use async_trait::async_trait;
use herald_core::LexicalExample;
use herald_error::{ConfigError, DecodeError, HeraldResult, TransportError};
use herald_interface::LexiconSource;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Wordnik API client.
///
/// Lookups do not go through the Reddit pacer; Wordnik has its own budget.
#[derive(Debug, Clone)]
pub struct WordnikClient {
    client: Client,
    config: WordnikConfig,
}

impl WordnikClient {
    /// Creates a new Wordnik client.
    pub fn new(config: WordnikConfig, timeout: Duration) -> HeraldResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            TransportError::new(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self { client, config })
    }

    fn top_example_url(&self, word: &str) -> HeraldResult<Url> {
        let base = self.config.base_url();
        let mut url = Url::parse(base)
            .map_err(|e| ConfigError::new(format!("Invalid Wordnik URL '{}': {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ConfigError::new(format!("Wordnik URL '{}' cannot take a path", base)))?
            .pop_if_empty()
            .extend(["word.json", word, "topExample"]);
        url.query_pairs_mut().append_pair("useCanonical", "false");
        Ok(url)
    }
}

#[async_trait]
impl LexiconSource for WordnikClient {
    #[instrument(skip(self))]
    async fn top_example(&self, word: &str) -> HeraldResult<LexicalExample> {
        let url = self.top_example_url(word)?;

        let response = self
            .client
            .get(url)
            .header("api_key", self.config.api_key())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Wordnik");
                TransportError::new(format!("Wordnik request failed: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("No example for word");
            return Ok(LexicalExample::default());
        }

        let body = response.text().await.map_err(|e| {
            TransportError::new(format!("Failed to read Wordnik response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = %status, body = %body, "Wordnik returned error");
            return Err(TransportError::status(status.as_u16(), body).into());
        }

        let example: LexicalExample = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Wordnik response");
            DecodeError::new(format!("Failed to parse Wordnik example: {}", e))
        })?;

        debug!(found = !example.is_empty(), "Wordnik lookup complete");
        Ok(example)
    }
}
