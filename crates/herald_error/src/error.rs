//! Top-level error wrapper types.

use crate::{AlertError, AuthError, ConfigError, DecodeError, PublishError, TransportError};

/// All error categories the bot can hit.
///
/// # Examples
///
/// ```
/// use herald_error::{HeraldError, TransportError};
///
/// let transport = TransportError::new("Connection failed");
/// let err: HeraldError = transport.into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// assert_eq!(err.kind().name(), "transport");
/// ```
#[derive(
    Debug, derive_more::From, derive_more::Display, derive_more::Error, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum HeraldErrorKind {
    /// Network or HTTP failure
    #[from(TransportError)]
    Transport(TransportError),
    /// Malformed response envelope
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Login rejected or malformed
    #[from(AuthError)]
    Auth(AuthError),
    /// Comment not confirmed
    #[from(PublishError)]
    Publish(PublishError),
    /// Alert dispatch failed
    #[from(AlertError)]
    Alert(AlertError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

impl HeraldErrorKind {
    /// Short snake_case name of the category, for log fields.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Herald error with kind discrimination.
///
/// # Examples
///
/// ```
/// use herald_error::{HeraldResult, ConfigError};
///
/// fn might_fail() -> HeraldResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Herald Error: {}", _0)]
pub struct HeraldError(Box<HeraldErrorKind>);

impl HeraldError {
    /// Create a new error from a kind.
    pub fn new(kind: HeraldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HeraldErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HeraldErrorKind
impl<T> From<T> for HeraldError
where
    T: Into<HeraldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Herald operations.
pub type HeraldResult<T> = std::result::Result<T, HeraldError>;
