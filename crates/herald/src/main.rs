//! Herald CLI binary.
//!
//! Polls Reddit, composes comments and posts them on a fixed cadence.

use clap::Parser;
use herald::cli::{Cli, Commands, check_config, compose_preview, load_config, run_bot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before configuration reads the environment
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    herald::init_tracing(cli.verbose, cli.json_logs)?;

    // Execute the requested command
    match cli.command {
        Commands::Run { variant } => {
            let config = load_config(cli.config.as_deref(), variant)?;
            run_bot(config).await?;
        }

        Commands::CheckConfig => {
            let config = load_config(cli.config.as_deref(), None)?;
            check_config(&config)?;
        }

        Commands::Compose {
            title,
            author,
            variant,
        } => {
            let config = load_config(cli.config.as_deref(), variant)?;
            let comment = compose_preview(&config, &title, author.as_deref()).await?;
            if comment.is_empty() {
                println!("(no comment for this title)");
            } else {
                println!("{}", comment);
            }
        }
    }

    Ok(())
}
