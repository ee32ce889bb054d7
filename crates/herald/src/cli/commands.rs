//! CLI command definitions.

use clap::{Parser, Subcommand};
use herald_bot::BotVariant;
use std::path::PathBuf;

/// Herald - comments on new Reddit posts with dictionary examples or the author's post history
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(about = "Comments on new Reddit posts with dictionary examples or the author's post history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file, layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and poll until interrupted or an error stops the bot
    Run {
        /// Override `bot.variant`
        #[arg(long)]
        variant: Option<BotVariant>,
    },

    /// Load and validate the configuration, then print it with secrets omitted
    CheckConfig,

    /// Compose a comment for one post and print it without posting
    Compose {
        /// Post title to pick words from
        #[arg(long)]
        title: String,

        /// Post author, for the history variant
        #[arg(long)]
        author: Option<String>,

        /// Override `bot.variant`
        #[arg(long)]
        variant: Option<BotVariant>,
    },
}
