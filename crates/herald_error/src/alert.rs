//! Alert dispatch error types.

/// The failure alert itself could not be delivered.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Alert Error: {} at line {} in {}", message, line, file)]
pub struct AlertError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AlertError {
    /// Create a new AlertError with the given message at the current location.
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
