//! Deciding whether a submitted comment was accepted.

use super::json_models::{CommentEnvelope, format_errors};
use herald_error::{PublishError, PublishErrorKind};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How a comment response is checked.
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
pub enum PublishConfirmation {
    /// Status code plus the `json.errors` / `json.data.things` envelope;
    /// falls back to the marker when the body is not that envelope.
    #[default]
    Structured,
    /// Only look for the attribution marker in the raw body.
    Marker,
}

/// Check a comment response.
///
/// # Errors
///
/// Returns a publish error when the response does not confirm the comment.
///
/// # Examples
///
/// ```
/// use herald_social::{PublishConfirmation, confirm_publish};
/// use reqwest::StatusCode;
///
/// let ok = confirm_publish(PublishConfirmation::Marker, StatusCode::OK, "I'm a bot", "a bot");
/// assert!(ok.is_ok());
///
/// let missing = confirm_publish(PublishConfirmation::Marker, StatusCode::OK, "{}", "a bot");
/// assert!(missing.is_err());
/// ```
pub fn confirm_publish(
    mode: PublishConfirmation,
    status: StatusCode,
    body: &str,
    marker: &str,
) -> Result<(), PublishError> {
    match mode {
        PublishConfirmation::Marker => confirm_by_marker(body, marker),
        PublishConfirmation::Structured => {
            if !status.is_success() {
                return Err(PublishError::new(PublishErrorKind::Status {
                    status: status.as_u16(),
                    body: body.to_string(),
                }));
            }

            match serde_json::from_str::<CommentEnvelope>(body) {
                Ok(envelope) => {
                    if !envelope.json.errors.is_empty() {
                        return Err(PublishError::new(PublishErrorKind::Rejected(
                            format_errors(&envelope.json.errors),
                        )));
                    }
                    let things = envelope.json.data.map(|d| d.things.len()).unwrap_or(0);
                    if things == 0 {
                        return Err(PublishError::new(PublishErrorKind::MissingConfirmation(
                            body.to_string(),
                        )));
                    }
                    debug!(things, "Comment confirmed by envelope");
                    Ok(())
                }
                Err(e) => {
                    warn!(error = %e, "Comment response is not a JSON envelope, checking marker");
                    confirm_by_marker(body, marker)
                }
            }
        }
    }
}

fn confirm_by_marker(body: &str, marker: &str) -> Result<(), PublishError> {
    if !marker.is_empty() && body.contains(marker) {
        Ok(())
    } else {
        Err(PublishError::new(PublishErrorKind::MissingConfirmation(
            body.to_string(),
        )))
    }
}
