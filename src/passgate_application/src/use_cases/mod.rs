mod authenticate;

pub use authenticate::{AuthError, AuthResult, AuthenticateUseCase, DenialReason, MissingField};
