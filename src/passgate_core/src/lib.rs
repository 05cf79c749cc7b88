pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::AccessToken,
    credentials::Credentials,
    email::Email,
    password::{Password, PasswordHash},
    user::{UserError, UserId, UserRecord},
};

pub use ports::{
    repositories::{RepositoryError, UserRepository},
    services::{CredentialVerifier, IssuerError, TokenIssuer, VerifierError},
};
