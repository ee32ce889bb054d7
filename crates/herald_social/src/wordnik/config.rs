//! Wordnik client settings.

use serde::{Deserialize, Serialize};

/// Settings for the Wordnik API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct WordnikConfig {
    /// API key sent in the `api_key` header
    #[serde(default, skip_serializing)]
    api_key: String,
    /// API root, including the version segment
    #[serde(default = "default_base_url")]
    base_url: String,
}

fn default_base_url() -> String {
    "https://api.wordnik.com/v4".to_string()
}

impl Default for WordnikConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl WordnikConfig {
    /// Create settings with an API key and the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Override the API root.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
