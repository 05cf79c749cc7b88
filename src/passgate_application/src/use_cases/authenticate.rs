use std::fmt;

use passgate_core::{
    AccessToken, Credentials, CredentialVerifier, Email, IssuerError, Password, RepositoryError,
    TokenIssuer, UserRepository, VerifierError,
};

/// Outcome of an authentication attempt
#[derive(Debug, PartialEq)]
pub enum AuthResult {
    /// Credentials checked out; the issuer produced a token
    Granted(AccessToken),
    /// A legitimate but unsuccessful attempt
    Denied(DenialReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Unknown email or wrong password; deliberately not distinguished
    InvalidCredentials,
}

/// The credential field a caller failed to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Email,
    Password,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for the authenticate use case.
///
/// `MissingParameter` is caller misuse. The remaining variants carry
/// collaborator faults through unmodified; a storage or crypto fault is
/// never reported as invalid credentials.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing parameter: {0}")]
    MissingParameter(MissingField),
    #[error("user repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("credential verifier error: {0}")]
    Verifier(#[from] VerifierError),
    #[error("token issuer error: {0}")]
    Issuer(#[from] IssuerError),
}

/// Authenticate use case - turns raw credentials into an access token or a
/// well-defined failure.
///
/// Validation order is fixed: email presence, then password presence. Only
/// then are the collaborators consulted, in lookup → verify → issue order.
/// The struct holds no per-call state, so one instance serves any number of
/// concurrent attempts.
pub struct AuthenticateUseCase<R, V, I>
where
    R: UserRepository,
    V: CredentialVerifier,
    I: TokenIssuer,
{
    repository: R,
    verifier: V,
    issuer: I,
}

impl<R, V, I> AuthenticateUseCase<R, V, I>
where
    R: UserRepository,
    V: CredentialVerifier,
    I: TokenIssuer,
{
    pub fn new(repository: R, verifier: V, issuer: I) -> Self {
        Self {
            repository,
            verifier,
            issuer,
        }
    }

    /// Execute the authenticate use case
    ///
    /// # Arguments
    /// * `credentials` - Raw email/password pair from the request adapter
    ///
    /// # Returns
    /// `AuthResult` classifying the attempt, or `AuthError` for caller
    /// misuse and collaborator faults
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip(self, credentials))]
    pub async fn execute(&self, credentials: Credentials) -> Result<AuthResult, AuthError> {
        let (email, password) = credentials.into_parts();
        let email = Email::try_from(email)
            .map_err(|_| AuthError::MissingParameter(MissingField::Email))?;
        let password = Password::try_from(password)
            .map_err(|_| AuthError::MissingParameter(MissingField::Password))?;

        let Some(record) = self.repository.find_by_email(&email).await? else {
            // Indistinguishable from a wrong password so registered emails
            // cannot be probed
            return Ok(AuthResult::Denied(DenialReason::InvalidCredentials));
        };

        let matches = self
            .verifier
            .verify(&password, record.password_hash())
            .await?;
        if !matches {
            return Ok(AuthResult::Denied(DenialReason::InvalidCredentials));
        }

        let token = self.issuer.issue(record.id()).await?;
        Ok(AuthResult::Granted(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use passgate_core::{PasswordHash, UserId, UserRecord};
    use secrecy::{ExposeSecret, Secret};

    // Mock implementations for testing

    #[derive(Clone, Default)]
    struct StubRepository {
        records: HashMap<String, UserRecord>,
    }

    impl StubRepository {
        fn with_record(record: UserRecord) -> Self {
            let mut records = HashMap::new();
            records.insert(record.email().as_ref().expose_secret().clone(), record);
            Self { records }
        }
    }

    #[async_trait::async_trait]
    impl UserRepository for StubRepository {
        async fn find_by_email(
            &self,
            email: &Email,
        ) -> Result<Option<UserRecord>, RepositoryError> {
            Ok(self.records.get(email.as_ref().expose_secret()).cloned())
        }
    }

    struct FailingRepository;

    #[async_trait::async_trait]
    impl UserRepository for FailingRepository {
        async fn find_by_email(
            &self,
            _email: &Email,
        ) -> Result<Option<UserRecord>, RepositoryError> {
            Err(RepositoryError::Transient("connection reset".to_string()))
        }
    }

    struct UnreachableRepository;

    #[async_trait::async_trait]
    impl UserRepository for UnreachableRepository {
        async fn find_by_email(
            &self,
            _email: &Email,
        ) -> Result<Option<UserRecord>, RepositoryError> {
            unimplemented!()
        }
    }

    #[derive(Clone)]
    struct StubVerifier {
        matches: bool,
    }

    #[async_trait::async_trait]
    impl CredentialVerifier for StubVerifier {
        async fn verify(
            &self,
            _candidate: &Password,
            _stored: &PasswordHash,
        ) -> Result<bool, VerifierError> {
            Ok(self.matches)
        }
    }

    struct FailingVerifier;

    #[async_trait::async_trait]
    impl CredentialVerifier for FailingVerifier {
        async fn verify(
            &self,
            _candidate: &Password,
            _stored: &PasswordHash,
        ) -> Result<bool, VerifierError> {
            Err(VerifierError::MalformedHash)
        }
    }

    struct UnreachableVerifier;

    #[async_trait::async_trait]
    impl CredentialVerifier for UnreachableVerifier {
        async fn verify(
            &self,
            _candidate: &Password,
            _stored: &PasswordHash,
        ) -> Result<bool, VerifierError> {
            unimplemented!()
        }
    }

    #[derive(Clone)]
    struct CountingIssuer {
        token: String,
        calls: Arc<AtomicUsize>,
        seen_user: Arc<Mutex<Option<String>>>,
    }

    impl CountingIssuer {
        fn returning(token: &str) -> Self {
            Self {
                token: token.to_string(),
                calls: Arc::new(AtomicUsize::new(0)),
                seen_user: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait::async_trait]
    impl TokenIssuer for CountingIssuer {
        async fn issue(&self, user_id: &UserId) -> Result<AccessToken, IssuerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_user.lock().unwrap() = Some(user_id.as_str().to_string());
            Ok(AccessToken::new(Secret::from(self.token.clone())))
        }
    }

    struct FailingIssuer;

    #[async_trait::async_trait]
    impl TokenIssuer for FailingIssuer {
        async fn issue(&self, _user_id: &UserId) -> Result<AccessToken, IssuerError> {
            Err(IssuerError::Unexpected("signing backend down".to_string()))
        }
    }

    struct UnreachableIssuer;

    #[async_trait::async_trait]
    impl TokenIssuer for UnreachableIssuer {
        async fn issue(&self, _user_id: &UserId) -> Result<AccessToken, IssuerError> {
            unimplemented!()
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials::new(
            Secret::from(email.to_string()),
            Secret::from(password.to_string()),
        )
    }

    fn record(id: &str, email: &str, hash: &str) -> UserRecord {
        UserRecord::new(
            UserId::new(id),
            Email::try_from(Secret::from(email.to_string())).unwrap(),
            PasswordHash::new(Secret::from(hash.to_string())),
        )
    }

    #[tokio::test]
    async fn test_missing_email_fails_before_any_lookup() {
        let use_case = AuthenticateUseCase::new(
            UnreachableRepository,
            UnreachableVerifier,
            UnreachableIssuer,
        );

        let result = use_case.execute(credentials("", "any_password")).await;
        assert!(matches!(
            result,
            Err(AuthError::MissingParameter(MissingField::Email))
        ));
    }

    #[tokio::test]
    async fn test_missing_email_reported_before_missing_password() {
        let use_case = AuthenticateUseCase::new(
            UnreachableRepository,
            UnreachableVerifier,
            UnreachableIssuer,
        );

        let result = use_case.execute(credentials("", "")).await;
        assert!(matches!(
            result,
            Err(AuthError::MissingParameter(MissingField::Email))
        ));
    }

    #[tokio::test]
    async fn test_missing_password_fails_before_any_lookup() {
        let use_case = AuthenticateUseCase::new(
            UnreachableRepository,
            UnreachableVerifier,
            UnreachableIssuer,
        );

        let result = use_case.execute(credentials("a@b.com", "")).await;
        assert!(matches!(
            result,
            Err(AuthError::MissingParameter(MissingField::Password))
        ));
    }

    #[tokio::test]
    async fn test_unknown_email_is_denied() {
        let use_case = AuthenticateUseCase::new(
            StubRepository::default(),
            UnreachableVerifier,
            UnreachableIssuer,
        );

        let result = use_case.execute(credentials("a@b.com", "pw1")).await;
        assert!(matches!(
            result,
            Ok(AuthResult::Denied(DenialReason::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_wrong_password_is_denied_without_issuing() {
        let issuer = CountingIssuer::returning("tok-unused");
        let use_case = AuthenticateUseCase::new(
            StubRepository::with_record(record("42", "a@b.com", "H")),
            StubVerifier { matches: false },
            issuer.clone(),
        );

        let result = use_case.execute(credentials("a@b.com", "wrong")).await;
        assert!(matches!(
            result,
            Ok(AuthResult::Denied(DenialReason::InvalidCredentials))
        ));
        assert_eq!(issuer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_credentials_yield_the_issuers_token() {
        let issuer = CountingIssuer::returning("tok-xyz");
        let use_case = AuthenticateUseCase::new(
            StubRepository::with_record(record("42", "a@b.com", "H")),
            StubVerifier { matches: true },
            issuer.clone(),
        );

        let result = use_case.execute(credentials("a@b.com", "right")).await;
        let expected = AccessToken::new(Secret::from("tok-xyz".to_string()));
        assert!(matches!(result, Ok(AuthResult::Granted(token)) if token == expected));
        assert_eq!(issuer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(issuer.seen_user.lock().unwrap().as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_repository_fault_propagates() {
        let use_case =
            AuthenticateUseCase::new(FailingRepository, UnreachableVerifier, UnreachableIssuer);

        let result = use_case.execute(credentials("a@b.com", "pw1")).await;
        assert!(matches!(
            result,
            Err(AuthError::Repository(RepositoryError::Transient(_)))
        ));
    }

    #[tokio::test]
    async fn test_verifier_fault_propagates() {
        let use_case = AuthenticateUseCase::new(
            StubRepository::with_record(record("42", "a@b.com", "H")),
            FailingVerifier,
            UnreachableIssuer,
        );

        let result = use_case.execute(credentials("a@b.com", "pw1")).await;
        assert!(matches!(
            result,
            Err(AuthError::Verifier(VerifierError::MalformedHash))
        ));
    }

    #[tokio::test]
    async fn test_issuer_fault_propagates() {
        let use_case = AuthenticateUseCase::new(
            StubRepository::with_record(record("42", "a@b.com", "H")),
            StubVerifier { matches: true },
            FailingIssuer,
        );

        let result = use_case.execute(credentials("a@b.com", "right")).await;
        assert!(matches!(
            result,
            Err(AuthError::Issuer(IssuerError::Unexpected(_)))
        ));
    }

    #[tokio::test]
    async fn test_repeated_attempts_classify_identically() {
        let issuer = CountingIssuer::returning("tok-xyz");
        let use_case = AuthenticateUseCase::new(
            StubRepository::with_record(record("42", "a@b.com", "H")),
            StubVerifier { matches: true },
            issuer.clone(),
        );

        let first = use_case.execute(credentials("a@b.com", "right")).await;
        let second = use_case.execute(credentials("a@b.com", "right")).await;
        assert!(matches!(first, Ok(AuthResult::Granted(_))));
        assert!(matches!(second, Ok(AuthResult::Granted(_))));
        assert_eq!(issuer.calls.load(Ordering::SeqCst), 2);
    }
}
