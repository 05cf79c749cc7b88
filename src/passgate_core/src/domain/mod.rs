pub mod access_token;
pub mod credentials;
pub mod email;
pub mod password;
pub mod user;
