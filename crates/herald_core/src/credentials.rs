//! Login credentials.

use serde::Deserialize;

/// Username and password for the platform account.
///
/// The password never appears in `Debug` output.
///
/// # Examples
///
/// ```
/// use herald_core::Credentials;
///
/// let creds = Credentials::new("wordbot", "hunter2");
/// assert_eq!(creds.username(), "wordbot");
/// assert!(!format!("{:?}", creds).contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
