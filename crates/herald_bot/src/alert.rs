//! Failure alerting.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use herald_error::{AlertError, ConfigError, HeraldError, HeraldResult};
use herald_interface::Alerter;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, instrument, warn};

use crate::AlertConfig;

/// Subject line of every alert.
pub const ALERT_SUBJECT: &str = "Herald: An error occurred!";

/// Alert body: RFC 3339 timestamp, a blank line, then the error.
pub fn alert_body(error: &HeraldError, at: DateTime<Utc>) -> String {
    format!(
        "{}\n\n{}",
        at.to_rfc3339_opts(SecondsFormat::Secs, true),
        error
    )
}

/// Sends alerts as plaintext email over SMTP (STARTTLS, PLAIN auth).
///
/// The configured address is both sender and recipient.
pub struct EmailAlerter {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    mailbox: Mailbox,
}

impl std::fmt::Debug for EmailAlerter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailAlerter")
            .field("mailbox", &self.mailbox)
            .finish_non_exhaustive()
    }
}

impl EmailAlerter {
    /// Build an alerter from the `[alert]` section.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the address does not parse or the
    /// relay host is unusable.
    pub fn new(config: &AlertConfig) -> HeraldResult<Self> {
        let mailbox: Mailbox = config.address.parse().map_err(|e| {
            ConfigError::new(format!("Invalid alert.address {:?}: {}", config.address, e))
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| ConfigError::new(format!("Invalid alert.smtp_host: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.address.clone(),
                config.password.clone(),
            ))
            .authentication(vec![Mechanism::Plain])
            .build();

        Ok(Self { transport, mailbox })
    }
}

#[async_trait]
impl Alerter for EmailAlerter {
    #[instrument(skip(self, error), fields(to = %self.mailbox))]
    async fn alert(&self, error: &HeraldError) -> Result<(), AlertError> {
        let email = Message::builder()
            .from(self.mailbox.clone())
            .to(self.mailbox.clone())
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(alert_body(error, Utc::now()))
            .map_err(|e| AlertError::new(format!("Failed to build alert email: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AlertError::new(format!("Failed to send alert email: {}", e)))?;

        info!("Alert sent");
        Ok(())
    }
}

/// Alerter used when email alerts are disabled; only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAlerter;

#[async_trait]
impl Alerter for NoopAlerter {
    async fn alert(&self, error: &HeraldError) -> Result<(), AlertError> {
        warn!(error = %error, "Alerting disabled, not sending");
        Ok(())
    }
}
