//! `herald run`: wire the real clients into the control loop.

use herald_bot::{
    BotVariant, ControlLoop, EmailAlerter, HeraldConfig, HistoryComposer, LexicalComposer,
    LoopSettings, NoopAlerter,
};
use herald_error::HeraldResult;
use herald_interface::{Alerter, Composer};
use herald_rate_limit::RequestPacer;
use herald_social::{RedditClient, WordnikClient};
use std::sync::Arc;
use tracing::{info, instrument};

/// Run the bot until Ctrl-C (returns `Ok`) or a fatal error (returns it).
#[instrument(skip(config), fields(variant = %config.bot.variant))]
pub async fn run_bot(config: HeraldConfig) -> HeraldResult<()> {
    config.validate()?;

    let timeout = config.schedule.request_timeout();
    let pacer = RequestPacer::new(config.schedule.request_interval());
    let platform = Arc::new(RedditClient::new(config.reddit.clone(), pacer, timeout)?);

    let composer: Arc<dyn Composer> = match config.bot.variant {
        BotVariant::Lexical => Arc::new(LexicalComposer::new(WordnikClient::new(
            config.wordnik.clone(),
            timeout,
        )?)),
        BotVariant::History => Arc::new(HistoryComposer::new(
            platform.clone(),
            config.history.clone(),
        )),
    };

    let alerter: Arc<dyn Alerter> = if config.alert.enabled {
        Arc::new(EmailAlerter::new(&config.alert)?)
    } else {
        Arc::new(NoopAlerter)
    };

    let mut bot = ControlLoop::new(
        platform,
        composer,
        alerter,
        config.reddit.credentials(),
        LoopSettings::from_config(&config),
    );

    info!(section = %config.reddit.section(), "Starting bot");

    tokio::select! {
        result = bot.run() => match result {
            Ok(never) => match never {},
            Err(e) => Err(e),
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            Ok(())
        }
    }
}
