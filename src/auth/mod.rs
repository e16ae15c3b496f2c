//! Authentication module
//!
//! The Web API accepts HTTP Basic credentials only. `Authenticator` signs
//! outgoing requests without ever exposing the password in logs or `Debug`
//! output.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
