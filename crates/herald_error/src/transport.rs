//! Transport error types.

/// Network or HTTP-layer failure with source location.
///
/// Covers connection failures, timeouts, unreadable bodies and unexpected
/// status codes from collaborators that do not define their own error shape.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", message, line, file)]
pub struct TransportError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, when a response was received
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_error::TransportError;
    ///
    /// let err = TransportError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a TransportError for a response with an unexpected status code.
    #[track_caller]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("HTTP {}: {}", status, message.into()),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}
