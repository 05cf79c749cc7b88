use secrecy::Secret;
use serde::Deserialize;

/// Raw credentials as extracted from an inbound request.
///
/// Both fields may be empty here; the authenticate use-case rejects empty
/// input with a missing-parameter error before touching any collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    email: Secret<String>,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: Secret<String>, password: Secret<String>) -> Self {
        Self { email, password }
    }

    /// Consumes the credentials, yielding `(email, password)`.
    pub fn into_parts(self) -> (Secret<String>, Secret<String>) {
        (self.email, self.password)
    }
}
