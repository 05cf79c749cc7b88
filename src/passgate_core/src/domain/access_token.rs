use secrecy::{ExposeSecret, Secret};

/// An opaque access token produced by a
/// [`crate::ports::services::TokenIssuer`].
///
/// The core assumes no internal structure. `Debug` is redacted; equality
/// compares the underlying string.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }
}

impl AsRef<Secret<String>> for AccessToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for AccessToken {}
