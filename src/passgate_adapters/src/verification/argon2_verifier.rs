use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use passgate_core::{CredentialVerifier, Password, PasswordHash, VerifierError};

/// Credential verifier backed by Argon2id over PHC-format stored hashes.
///
/// A wrong password is a `false` verdict; only an unparseable stored hash
/// or an operational problem becomes an error.
#[derive(Default, Clone)]
pub struct Argon2CredentialVerifier;

impl Argon2CredentialVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Hashes a password into storable PHC form.
    ///
    /// Intended for seeding repositories and test fixtures; the verifier
    /// itself never writes hashes.
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    pub async fn hash_password(password: Password) -> Result<PasswordHash, VerifierError> {
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| VerifierError::Unexpected(e.to_string()))
            })
        })
        .await
        .map_err(|e| VerifierError::Unexpected(e.to_string()))?;

        result
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for Argon2CredentialVerifier {
    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        stored: &PasswordHash,
    ) -> Result<bool, VerifierError> {
        let current_span: tracing::Span = tracing::Span::current();
        let candidate = candidate.clone();
        let stored = stored.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected: PhcHash<'_> = PhcHash::new(stored.as_ref().expose_secret())
                    .map_err(|_| VerifierError::MalformedHash)?;

                match hasher()?.verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &expected,
                ) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(VerifierError::Unexpected(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| VerifierError::Unexpected(e.to_string()))?;

        result
    }
}

fn hasher() -> Result<Argon2<'static>, VerifierError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| VerifierError::Unexpected(e.to_string()))?,
    ))
}
