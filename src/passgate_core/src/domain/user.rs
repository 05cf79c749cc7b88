use thiserror::Error;

use crate::domain::{email::Email, password::PasswordHash};

/// Validation errors for credential fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Opaque user identifier, assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored user, as handed out by a [`crate::ports::repositories::UserRepository`].
///
/// The core only reads records; creating and persisting them belongs to the
/// repository side.
#[derive(Debug, Clone)]
pub struct UserRecord {
    id: UserId,
    email: Email,
    password_hash: PasswordHash,
}

impl UserRecord {
    pub fn new(id: UserId, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
