use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// API key typed in by the user for a single request. Never stored, never logged.
pub struct ApiCredential(SecretString);

impl ApiCredential {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret().trim()
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential([REDACTED])")
    }
}
