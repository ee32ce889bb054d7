//! Reddit client settings.

use crate::PublishConfirmation;
use herald_core::{Credentials, ListingSort};
use serde::{Deserialize, Serialize};

/// Settings for talking to Reddit.
///
/// Credentials have no defaults; everything else falls back to the public
/// endpoints.
///
/// ```toml
/// [reddit]
/// username = "wordbot"
/// password = "..."
/// user_agent = "herald/0.1 by wordbot"
/// section = "new"
/// sort = "rising"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RedditConfig {
    /// Account name
    #[serde(default)]
    username: String,
    /// Account password
    #[serde(default, skip_serializing)]
    password: String,
    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    user_agent: String,
    /// Base URL for listings and comments
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Base URL for the login endpoint
    #[serde(default = "default_login_url")]
    login_url: String,
    /// Listing section to poll, e.g. `new` or `r/rust/new`
    #[serde(default = "default_section")]
    section: String,
    /// Sort order for the polled listing
    #[serde(default = "default_sort")]
    sort: ListingSort,
    /// How comment responses are checked
    #[serde(default)]
    confirmation: PublishConfirmation,
    /// Substring that proves a comment response is ours
    #[serde(default = "default_attribution_marker")]
    attribution_marker: String,
}

fn default_user_agent() -> String {
    format!("herald/{}", env!("CARGO_PKG_VERSION"))
}

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}

fn default_login_url() -> String {
    "https://ssl.reddit.com".to_string()
}

fn default_section() -> String {
    "new".to_string()
}

fn default_sort() -> ListingSort {
    ListingSort::Rising
}

fn default_attribution_marker() -> String {
    "a bot".to_string()
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            user_agent: default_user_agent(),
            base_url: default_base_url(),
            login_url: default_login_url(),
            section: default_section(),
            sort: default_sort(),
            confirmation: PublishConfirmation::default(),
            attribution_marker: default_attribution_marker(),
        }
    }
}

impl RedditConfig {
    /// Account credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }

    /// Point both endpoints at `url` (used against local mock servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.login_url = url.clone();
        self.base_url = url;
        self
    }

    /// Set the account credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the confirmation mode.
    pub fn with_confirmation(mut self, confirmation: PublishConfirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Set the attribution marker.
    pub fn with_attribution_marker(mut self, marker: impl Into<String>) -> Self {
        self.attribution_marker = marker.into();
        self
    }
}
