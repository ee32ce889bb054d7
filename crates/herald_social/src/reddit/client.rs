//! Reddit implementation of `ContentPlatform`.

use super::confirmation::confirm_publish;
use super::conversions::decode_listing;
use super::json_models::{LoginEnvelope, format_errors};
use crate::{RedditConfig, RedditTransport};
use async_trait::async_trait;
use herald_core::{Credentials, ListingPage, ListingRequest, ListingSort, Session};
use herald_error::{AuthError, ConfigError, HeraldResult};
use herald_interface::ContentPlatform;
use herald_rate_limit::RequestPacer;
use reqwest::{Method, Url};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Reddit API client.
///
/// All calls share one [`RedditTransport`] and therefore one request budget.
#[derive(Debug, Clone)]
pub struct RedditClient {
    transport: RedditTransport,
    config: RedditConfig,
}

impl RedditClient {
    /// Creates a new Reddit client.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoints, User-Agent and confirmation settings
    /// * `pacer` - Shared pacer enforcing the minimum request spacing
    /// * `timeout` - Per-request timeout
    pub fn new(config: RedditConfig, pacer: RequestPacer, timeout: Duration) -> HeraldResult<Self> {
        debug!(base_url = %config.base_url(), "Creating new Reddit client");
        let transport = RedditTransport::new(config.user_agent(), pacer, timeout)?;
        Ok(Self { transport, config })
    }

    /// Client settings.
    pub fn config(&self) -> &RedditConfig {
        &self.config
    }

    /// Build `<base>/<segments...>`, keeping any path already on the base.
    fn endpoint(base: &str, segments: &[&str]) -> HeraldResult<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| ConfigError::new(format!("Invalid base URL '{}': {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ConfigError::new(format!("Base URL '{}' cannot take a path", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `<base>/<section>.json`, where `section` may span several segments.
    fn listing_url(&self, section: &str) -> HeraldResult<Url> {
        let mut segments: Vec<String> = section
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        match segments.last_mut() {
            Some(last) => last.push_str(".json"),
            None => return Err(ConfigError::new("Listing section is empty").into()),
        }
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
        Self::endpoint(self.config.base_url(), &refs)
    }
}

#[async_trait]
impl ContentPlatform for RedditClient {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> HeraldResult<Session> {
        let url = Self::endpoint(
            self.config.login_url(),
            &["api", "login", credentials.username()],
        )?;
        let form = [
            ("user", credentials.username()),
            ("passwd", credentials.password()),
            ("api_type", "json"),
        ];

        let response = self.transport.send(Method::POST, url, &form, None).await?;
        let body = response.into_body();

        let envelope: LoginEnvelope = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse login response");
            AuthError::new(format!("login: unparseable response: {}", body))
        })?;

        let (cookie, modhash) = envelope
            .json
            .data
            .map(|data| (data.cookie, data.modhash))
            .unwrap_or_default();

        if modhash.is_empty() {
            let reason = if envelope.json.errors.is_empty() {
                body
            } else {
                format_errors(&envelope.json.errors)
            };
            error!(reason = %reason, "Login rejected");
            return Err(AuthError::new(format!("login: {}", reason)).into());
        }

        info!("Logged in");
        Ok(Session::new(format!("reddit_session={}", cookie), modhash))
    }

    #[instrument(skip(self, session), fields(section = %request.section(), before = %request.before(), limit = request.limit()))]
    async fn fetch_listing(
        &self,
        request: &ListingRequest,
        session: &Session,
    ) -> HeraldResult<ListingPage> {
        let mut url = self.listing_url(request.section())?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("sort", request.sort().as_ref())
                .append_pair("limit", &request.limit().to_string());
            if !request.before().is_empty() {
                query.append_pair("before", request.before());
            }
        }

        let response = self
            .transport
            .send(Method::GET, url, &[], Some(session))
            .await?
            .require_success()?;

        let page = decode_listing(response.body())?;
        debug!(posts = page.len(), "Fetched listing");
        Ok(page)
    }

    #[instrument(skip(self, session))]
    async fn fetch_author_posts(
        &self,
        author: &str,
        sort: ListingSort,
        limit: u32,
        session: &Session,
    ) -> HeraldResult<ListingPage> {
        let mut url = Self::endpoint(
            self.config.base_url(),
            &["user", author, "submitted.json"],
        )?;
        url.query_pairs_mut()
            .append_pair("sort", sort.as_ref())
            .append_pair("limit", &limit.to_string());

        let response = self
            .transport
            .send(Method::GET, url, &[], Some(session))
            .await?
            .require_success()?;

        let page = decode_listing(response.body())?;
        debug!(posts = page.len(), "Fetched author posts");
        Ok(page)
    }

    #[instrument(skip(self, text, session), fields(text_len = text.len()))]
    async fn publish(&self, target: &str, text: &str, session: &Session) -> HeraldResult<()> {
        let url = Self::endpoint(self.config.base_url(), &["api", "comment"])?;
        let form = [
            ("thing_id", target),
            ("text", text),
            ("uh", session.anti_forgery_token().as_str()),
            ("api_type", "json"),
        ];

        let response = self
            .transport
            .send(Method::POST, url, &form, Some(session))
            .await?;

        confirm_publish(
            *self.config.confirmation(),
            *response.status(),
            response.body(),
            self.config.attribution_marker(),
        )
        .inspect_err(|e| error!(error = %e, "Comment not confirmed"))?;

        info!("Comment published");
        Ok(())
    }
}
