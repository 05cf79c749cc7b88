mod uuid_token_issuer;

pub use uuid_token_issuer::UuidTokenIssuer;
