//! The polling state machine.
//!
//! ```text
//! LoggingIn -> Polling -> Composing -> (Publishing | Skipping) -> Cooling -> Polling ...
//!                                                          any state -> Failed
//! ```
//!
//! Every error is fatal: the loop logs it with the state it happened in,
//! makes one attempt to alert, and stops.

use herald_core::{Credentials, ListingSort, Session};
use herald_error::{AuthError, HeraldError, HeraldResult};
use herald_interface::{Alerter, Composer, CompositionContext, ContentPlatform};
use herald_rate_limit::Cadence;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::{BotVariant, Cursor, HeraldConfig};

/// Where the control loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LoopState {
    /// Acquiring a session
    LoggingIn,
    /// Fetching the next listing page
    Polling,
    /// Turning a record into comment text
    Composing,
    /// Submitting a comment
    Publishing,
    /// Record produced nothing to say
    Skipping,
    /// Waiting out a cooldown or the rest of the cycle
    Cooling,
    /// Stopped on an error
    Failed,
}

/// Knobs for the control loop, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct LoopSettings {
    /// Listing section to poll
    section: String,
    /// Sort order of the polled listing
    sort: ListingSort,
    /// Cycle period
    cadence: Duration,
    /// Wait after a published comment; `None` for no wait
    cooldown: Option<Duration>,
    /// Page size of the first poll
    first_page_limit: u32,
    /// Page size of later polls
    page_limit: u32,
    /// End the cycle at the first record that produced a comment
    stop_at_first: bool,
    /// Submit comments; when false they are only logged
    publish: bool,
}

impl LoopSettings {
    /// Settings for the configured variant.
    ///
    /// The lexical variant comments on one record per cycle and cools down
    /// afterwards. The history variant works through every record, without
    /// a cooldown, and only submits when `history.publish` is set.
    pub fn from_config(config: &HeraldConfig) -> Self {
        let lexical = config.bot.variant == BotVariant::Lexical;
        Self {
            section: config.reddit.section().clone(),
            sort: *config.reddit.sort(),
            cadence: config.schedule.poll_interval(),
            cooldown: lexical.then(|| config.schedule.comment_cooldown()),
            first_page_limit: config.schedule.first_page_limit,
            page_limit: config.schedule.page_limit,
            stop_at_first: lexical,
            publish: lexical || config.history.publish,
        }
    }

    /// Replace the cadence.
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    /// Replace the post-publish cooldown.
    pub fn with_cooldown(mut self, cooldown: Option<Duration>) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Replace the publish switch.
    pub fn with_publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }
}

/// What one cycle did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Records in the fetched page
    pub fetched: usize,
    /// Records that produced a comment
    pub composed: usize,
    /// Records that produced nothing
    pub skipped: usize,
    /// Fullnames commented on
    pub published: Vec<String>,
}

/// The bot: login once, then poll, compose and publish on a fixed cadence.
pub struct ControlLoop<P, C, A> {
    platform: Arc<P>,
    composer: C,
    alerter: A,
    credentials: Credentials,
    settings: LoopSettings,
    cursor: Cursor,
    session: Option<Session>,
    state: LoopState,
}

impl<P, C, A> ControlLoop<P, C, A>
where
    P: ContentPlatform,
    C: Composer,
    A: Alerter,
{
    /// Assemble a loop from its collaborators.
    pub fn new(
        platform: Arc<P>,
        composer: C,
        alerter: A,
        credentials: Credentials,
        settings: LoopSettings,
    ) -> Self {
        let cursor = Cursor::new(settings.first_page_limit, settings.page_limit);
        Self {
            platform,
            composer,
            alerter,
            credentials,
            settings,
            cursor,
            session: None,
            state: LoopState::LoggingIn,
        }
    }

    /// Current state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Current pagination cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn transition(&mut self, next: LoopState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "State transition");
        }
        self.state = next;
    }

    /// Log in and keep the session.
    #[instrument(skip(self), fields(user = %self.credentials.username()))]
    pub async fn login(&mut self) -> HeraldResult<()> {
        self.transition(LoopState::LoggingIn);
        let session = self.platform.login(&self.credentials).await?;
        info!("Logged in");
        self.session = Some(session);
        Ok(())
    }

    /// Run one poll cycle: fetch a page, compose for its records, publish,
    /// and move the cursor.
    ///
    /// # Errors
    ///
    /// Returns the first error from any collaborator. The cursor is not
    /// advanced for a failed cycle.
    #[instrument(skip(self), fields(before = %self.cursor.before(), limit = self.cursor.limit()))]
    pub async fn run_cycle(&mut self) -> HeraldResult<CycleReport> {
        let session = self
            .session
            .clone()
            .ok_or_else(|| AuthError::new("Poll attempted before login"))?;

        self.transition(LoopState::Polling);
        let request = self
            .cursor
            .request(&self.settings.section, self.settings.sort);
        let page = self.platform.fetch_listing(&request, &session).await?;

        let mut report = CycleReport {
            fetched: page.len(),
            ..CycleReport::default()
        };
        debug!(count = page.len(), "Fetched page");

        for post in page.posts() {
            self.transition(LoopState::Composing);
            let context = CompositionContext {
                post,
                session: &session,
            };
            let text = self.composer.compose_comment(context).await?;

            if text.is_empty() {
                self.transition(LoopState::Skipping);
                debug!(post = %post.fullname(), "Nothing to say");
                report.skipped += 1;
                continue;
            }
            report.composed += 1;

            if self.settings.publish {
                self.transition(LoopState::Publishing);
                self.platform
                    .publish(post.fullname(), &text, &session)
                    .await?;
                info!(post = %post.fullname(), title = %post.title(), "Published comment");
                report.published.push(post.fullname().clone());

                if let Some(cooldown) = self.settings.cooldown {
                    self.transition(LoopState::Cooling);
                    debug!(?cooldown, "Cooling down after publish");
                    tokio::time::sleep(cooldown).await;
                }
            } else {
                info!(post = %post.fullname(), comment = %text, "Dry run, not publishing");
            }

            if self.settings.stop_at_first {
                break;
            }
        }

        self.cursor.advance(&page);
        Ok(report)
    }

    /// Log in and poll forever.
    ///
    /// Only returns on failure, after the failure has been logged and
    /// alerted. The returned error is the one that stopped the loop, never
    /// an alert failure.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> HeraldResult<Infallible> {
        match self.run_inner().await {
            Ok(never) => match never {},
            Err(e) => Err(self.fail(e).await),
        }
    }

    async fn run_inner(&mut self) -> HeraldResult<Infallible> {
        self.login().await?;
        let cadence = Cadence::new(self.settings.cadence);

        loop {
            let cycle_start = Instant::now();
            let report = self.run_cycle().await?;
            info!(
                fetched = report.fetched,
                composed = report.composed,
                skipped = report.skipped,
                published = report.published.len(),
                "Cycle complete"
            );

            self.transition(LoopState::Cooling);
            cadence.wait_for_next(cycle_start).await;
        }
    }

    async fn fail(&mut self, error: HeraldError) -> HeraldError {
        let from = self.state;
        self.transition(LoopState::Failed);
        error!(kind = error.kind().name(), state = %from, error = %error, "Bot stopped");

        if let Err(alert_error) = self.alerter.alert(&error).await {
            warn!(error = %alert_error, "Failed to send alert");
        }
        error
    }
}
