use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    access_token::AccessToken,
    password::{Password, PasswordHash},
    user::UserId,
};

// CredentialVerifier port trait and errors
#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("stored password hash is malformed")]
    MalformedHash,
    #[error("unexpected verifier error: {0}")]
    Unexpected(String),
}

impl PartialEq for VerifierError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedHash, Self::MalformedHash) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Port trait for comparing a plaintext password against a stored hash.
///
/// The verdict is a value: a mismatch is `Ok(false)`. Errors are reserved
/// for operational faults so callers never mistake a broken hash store for
/// a wrong password. A production implementation is expected to compare in
/// constant time; this contract does not enforce it.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        candidate: &Password,
        stored: &PasswordHash,
    ) -> Result<bool, VerifierError>;
}

// TokenIssuer port trait and errors
#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("unexpected issuer error: {0}")]
    Unexpected(String),
}

impl PartialEq for IssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
        }
    }
}

/// Port trait for producing an access token for an authenticated user.
///
/// Tokens are opaque to the core; unpredictability and uniqueness are the
/// implementation's responsibility.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, user_id: &UserId) -> Result<AccessToken, IssuerError>;
}
