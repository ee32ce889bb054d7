//! `herald check-config`.

use herald_bot::HeraldConfig;
use herald_error::{ConfigError, HeraldResult};
use tracing::info;

/// Validate `config` and print it as JSON. Secrets are never serialized.
pub fn check_config(config: &HeraldConfig) -> HeraldResult<()> {
    config.validate()?;

    let rendered = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::new(format!("Failed to render configuration: {}", e)))?;
    println!("{}", rendered);

    info!(variant = %config.bot.variant, "Configuration is valid");
    Ok(())
}
