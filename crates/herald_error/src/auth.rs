//! Authentication error types.

/// Login was rejected, or the login response had an unexpected shape.
///
/// The two cases are not distinguished: both mean the bot cannot act.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Auth Error: {} at line {} in {}", message, line, file)]
pub struct AuthError {
    /// Error message, usually including the platform's response
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
