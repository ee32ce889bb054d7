//! Configuration for the bot.
//!
//! Sources, later ones taking precedence:
//! 1. Bundled defaults (include_str! from herald.toml)
//! 2. `~/.config/herald/herald.toml`
//! 3. `./herald.toml`
//! 4. An explicit file (the `--config` flag)
//! 5. Environment variables, e.g. `HERALD__REDDIT__PASSWORD`
//!
//! Secrets have no defaults and are checked by [`HeraldConfig::validate`].

use herald_core::ListingSort;
use herald_error::{ConfigError, HeraldError, HeraldResult};
use herald_social::{RedditConfig, WordnikConfig};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Which comment the bot writes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BotVariant {
    /// Quote a dictionary example for a word from the title.
    #[default]
    Lexical,
    /// Tabulate the author's earlier posts.
    History,
}

/// `[bot]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotSection {
    /// Which composer to run
    #[serde(default)]
    pub variant: BotVariant,
}

/// `[alert]` section: email sent when the bot stops on an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Send alert email at all
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: String,
    /// SMTP submission port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Sender and recipient address; also the SMTP login
    #[serde(default)]
    pub address: String,
    /// SMTP password
    #[serde(default, skip_serializing)]
    pub password: String,
}

fn default_smtp_port() -> u16 {
    587
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            address: String::new(),
            password: String::new(),
        }
    }
}

/// `[schedule]` section: every timer the bot uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Period of one poll cycle
    pub poll_interval_seconds: u64,
    /// Quiet period after a published comment
    pub comment_cooldown_seconds: u64,
    /// Minimum spacing between Reddit requests
    pub request_interval_ms: u64,
    /// Timeout for any single HTTP request
    pub request_timeout_seconds: u64,
    /// Page size of the very first poll
    pub first_page_limit: u32,
    /// Page size of every later poll
    pub page_limit: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: 30,
            comment_cooldown_seconds: 600,
            request_interval_ms: 2000,
            request_timeout_seconds: 30,
            first_page_limit: 1,
            page_limit: 100,
        }
    }
}

impl ScheduleConfig {
    /// Poll cycle period.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    /// Post-publish quiet period.
    pub fn comment_cooldown(&self) -> Duration {
        Duration::from_secs(self.comment_cooldown_seconds)
    }

    /// Minimum spacing between Reddit requests.
    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// `[history]` section, used by the author-history variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// How many of the author's posts to list
    pub top_posts: u32,
    /// Sort order for the author's submissions
    pub sort: ListingSort,
    /// Actually submit the comment; when false the comment is only logged
    pub publish: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            top_posts: 10,
            sort: ListingSort::Top,
            publish: false,
        }
    }
}

/// Top-level Herald configuration.
///
/// # Example
///
/// ```no_run
/// use herald_bot::HeraldConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HeraldConfig::load(None)?;
/// config.validate()?;
/// println!("Polling every {:?}", config.schedule.poll_interval());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// Composer selection
    #[serde(default)]
    pub bot: BotSection,
    /// Reddit account and endpoints
    #[serde(default)]
    pub reddit: RedditConfig,
    /// Wordnik key and endpoint
    #[serde(default)]
    pub wordnik: WordnikConfig,
    /// Failure alerting
    #[serde(default)]
    pub alert: AlertConfig,
    /// Timers and page sizes
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Author-history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../herald.toml");

impl HeraldConfig {
    /// Load configuration from a specific file path, without any layering.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> HeraldResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                HeraldError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                HeraldError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load layered configuration from the standard sources.
    ///
    /// `explicit` is an optional file that overrides every other file.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> HeraldResult<Self> {
        Self::load_with_environment(explicit, Self::environment())
    }

    /// The environment source used by [`load`](Self::load).
    pub fn environment() -> Environment {
        Environment::with_prefix("HERALD")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// Load layered configuration with a caller-supplied environment source.
    #[instrument(skip(environment))]
    pub fn load_with_environment(
        explicit: Option<&Path>,
        environment: Environment,
    ) -> HeraldResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/herald/herald.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("herald").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(environment)
            .build()
            .map_err(|e| {
                HeraldError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                HeraldError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Check that the configuration can actually run.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first problem found.
    pub fn validate(&self) -> HeraldResult<()> {
        if self.reddit.username().is_empty() || self.reddit.password().is_empty() {
            return Err(ConfigError::new("reddit.username and reddit.password are required").into());
        }
        if self.bot.variant == BotVariant::Lexical && self.wordnik.api_key().is_empty() {
            return Err(ConfigError::new("wordnik.api_key is required for the lexical variant").into());
        }
        if self.alert.enabled && (self.alert.smtp_host.is_empty() || self.alert.address.is_empty()) {
            return Err(ConfigError::new("alert.smtp_host and alert.address are required when alerts are enabled").into());
        }
        if self.schedule.poll_interval_seconds == 0 {
            return Err(ConfigError::new("schedule.poll_interval_seconds must be positive").into());
        }
        if self.schedule.first_page_limit == 0 || self.schedule.page_limit == 0 {
            return Err(ConfigError::new("schedule page limits must be positive").into());
        }
        if self.bot.variant == BotVariant::History && self.history.top_posts == 0 {
            return Err(ConfigError::new("history.top_posts must be positive").into());
        }
        Ok(())
    }
}
