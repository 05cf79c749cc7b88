//! # Passgate - Authentication Use-Case Library
//!
//! This is a facade crate that re-exports all public APIs from the passgate
//! components. Use this crate to get access to the whole authentication
//! pipeline in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! passgate = { path = "../passgate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Credentials`, `Email`, `Password`, `UserRecord`,
//!   `AccessToken`, etc.
//! - **Port traits**: `UserRepository`, `CredentialVerifier`, `TokenIssuer`
//! - **Use cases**: `AuthenticateUseCase`
//! - **Adapters**: `HashMapUserRepository`, `Argon2CredentialVerifier`,
//!   `UuidTokenIssuer`

/// Core domain types and value objects
pub mod core {
    pub use passgate_core::*;
}

// Re-export most commonly used core types at the root level
pub use passgate_core::{
    AccessToken, Credentials, Email, Password, PasswordHash, UserError, UserId, UserRecord,
};

/// Port trait definitions
pub mod ports {
    pub use passgate_core::{
        CredentialVerifier, IssuerError, RepositoryError, TokenIssuer, UserRepository,
        VerifierError,
    };
}

// Re-export port traits at root level
pub use passgate_core::{
    CredentialVerifier, IssuerError, RepositoryError, TokenIssuer, UserRepository, VerifierError,
};

/// Application use cases
pub mod use_cases {
    pub use passgate_application::*;
}

// Re-export use cases at root level
pub use passgate_application::{
    AuthError, AuthResult, AuthenticateUseCase, DenialReason, MissingField,
};

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use passgate_adapters::persistence::*;
    }

    /// Credential verification implementations
    pub mod verification {
        pub use passgate_adapters::verification::*;
    }

    /// Token issuer implementations
    pub mod token {
        pub use passgate_adapters::token::*;
    }
}

// Re-export commonly used adapters at root level
pub use passgate_adapters::{Argon2CredentialVerifier, HashMapUserRepository, UuidTokenIssuer};

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
