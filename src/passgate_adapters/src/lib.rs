pub mod persistence;
pub mod token;
pub mod verification;

pub use persistence::HashMapUserRepository;
pub use token::UuidTokenIssuer;
pub use verification::Argon2CredentialVerifier;
