//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the herald binary.

mod check;
mod commands;
mod compose;
mod run;

pub use check::check_config;
pub use commands::{Cli, Commands};
pub use compose::compose_preview;
pub use run::run_bot;

use herald_bot::{BotVariant, HeraldConfig};
use herald_error::HeraldResult;
use std::path::Path;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(path: Option<&Path>, variant: Option<BotVariant>) -> HeraldResult<HeraldConfig> {
    let mut config = HeraldConfig::load(path)?;
    if let Some(variant) = variant {
        config.bot.variant = variant;
    }
    Ok(config)
}
