//! Auth configuration types

use crate::config::ConnectionConfig;
use secrecy::SecretString;

/// Authentication configuration
#[derive(Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: SecretString,
    },
}

impl AuthConfig {
    /// Basic credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        AuthConfig::Basic {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Basic credentials taken from a connection config
    pub fn from_connection(config: &ConnectionConfig) -> Self {
        Self::basic(config.username.clone(), config.password())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}
