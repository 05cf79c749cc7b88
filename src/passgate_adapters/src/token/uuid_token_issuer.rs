use secrecy::Secret;
use uuid::Uuid;

use passgate_core::{AccessToken, IssuerError, TokenIssuer, UserId};

/// Token issuer producing random opaque tokens.
///
/// Tokens carry no claims and no signature; anything needing verifiable
/// structure belongs in a different issuer implementation.
#[derive(Default, Clone)]
pub struct UuidTokenIssuer;

impl UuidTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TokenIssuer for UuidTokenIssuer {
    async fn issue(&self, _user_id: &UserId) -> Result<AccessToken, IssuerError> {
        let token = Uuid::new_v4().simple().to_string();
        Ok(AccessToken::new(Secret::from(token)))
    }
}
