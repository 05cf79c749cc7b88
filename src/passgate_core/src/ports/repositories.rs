use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::UserRecord};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("transient repository error: {0}")]
    Transient(String),
    #[error("unexpected repository error: {0}")]
    Unexpected(String),
}

impl PartialEq for RepositoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Transient(_), Self::Transient(_)) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Port trait for looking up stored users by email.
///
/// A lookup miss is `Ok(None)`, not an error; errors are reserved for
/// operational faults. The core never retries a transient fault itself.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, RepositoryError>;
}
