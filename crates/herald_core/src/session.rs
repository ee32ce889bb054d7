//! Authenticated session state.

/// Session acquired at login and held for the life of the process.
///
/// There is no refresh: once the platform stops accepting the session the
/// next call fails and the bot stops.
#[derive(Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Session {
    /// Cookie header value, e.g. `reddit_session=...`
    session_token: String,
    /// Anti-forgery token (modhash) sent with state-changing requests
    anti_forgery_token: String,
}

impl Session {
    /// Create a session from its two tokens.
    pub fn new(session_token: impl Into<String>, anti_forgery_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            anti_forgery_token: anti_forgery_token.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("session_token", &"<redacted>")
            .field("anti_forgery_token", &"<redacted>")
            .finish()
    }
}
