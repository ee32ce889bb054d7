//! Comment publishing errors.

/// Specific publish failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PublishErrorKind {
    /// The platform answered with a non-success status code.
    #[display("Comment rejected with status {}: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The platform reported errors in its response envelope.
    #[display("Comment rejected by platform: {}", _0)]
    Rejected(String),

    /// The response carried neither a structured success field nor the
    /// expected attribution marker.
    #[display("Confirmation missing from response: {}", _0)]
    MissingConfirmation(String),
}

/// Publish error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    kind: PublishErrorKind,
    line: u32,
    file: &'static str,
}

impl PublishError {
    /// Create a new publish error with caller location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PublishErrorKind {
        &self.kind
    }
}

impl From<PublishErrorKind> for PublishError {
    #[track_caller]
    fn from(kind: PublishErrorKind) -> Self {
        Self::new(kind)
    }
}
