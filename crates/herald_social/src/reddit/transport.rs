//! Paced HTTP transport for Reddit.

use herald_core::Session;
use herald_error::{HeraldResult, TransportError};
use herald_rate_limit::RequestPacer;
use reqwest::header::{CONTENT_TYPE, COOKIE, USER_AGENT};
use reqwest::{Client, Method, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, error, instrument};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct TransportResponse {
    /// HTTP status
    status: StatusCode,
    /// Response body as text
    body: String,
}

impl TransportResponse {
    /// Fail with a transport error unless the status is 2xx.
    #[track_caller]
    pub fn require_success(self) -> HeraldResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(TransportError::status(self.status.as_u16(), self.body).into())
        }
    }

    /// Consume the response, yielding its body.
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Every Reddit request goes through here.
///
/// Sets the fixed User-Agent and form Content-Type, adds the session cookie
/// when given one, and waits on the shared [`RequestPacer`] before
/// dispatch.
#[derive(Debug, Clone)]
pub struct RedditTransport {
    client: Client,
    pacer: RequestPacer,
    user_agent: String,
}

impl RedditTransport {
    /// Create a transport.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn new(
        user_agent: impl Into<String>,
        pacer: RequestPacer,
        timeout: Duration,
    ) -> HeraldResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            TransportError::new(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            pacer,
            user_agent: user_agent.into(),
        })
    }

    /// The pacer shared by every request on this transport.
    pub fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }

    /// Send one request.
    ///
    /// The form is sent as the body for every method except `GET`.
    ///
    /// # Errors
    ///
    /// Returns a transport error on connection failure, timeout, or when
    /// the body cannot be read. Non-2xx statuses are returned, not raised;
    /// see [`TransportResponse::require_success`].
    #[instrument(skip(self, form, session), fields(method = %method, path = %url.path()))]
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        form: &[(&str, &str)],
        session: Option<&Session>,
    ) -> HeraldResult<TransportResponse> {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header(USER_AGENT, &self.user_agent)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE);

        if let Some(session) = session {
            request = request.header(COOKIE, session.session_token());
        }

        if method != Method::GET {
            request = request.form(form);
        }

        let permit = self.pacer.acquire().await;

        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "Request failed");
            TransportError::new(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            TransportError::new(format!("Failed to read response body: {}", e))
        })?;

        drop(permit);

        debug!(status = %status, bytes = body.len(), "Request completed");
        Ok(TransportResponse { status, body })
    }
}
