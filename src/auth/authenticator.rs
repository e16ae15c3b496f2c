//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use super::types::AuthConfig;
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::Basic { username, password } => {
                req.basic_auth(username, Some(password.expose_secret()))
            }
        }
    }

    /// Check whether requests will carry credentials
    pub fn is_authenticated(&self) -> bool {
        !matches!(self.config, AuthConfig::None)
    }
}
