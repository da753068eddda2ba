use std::fmt;

use aws_smithy_types::DateTime;
use secrecy::{ExposeSecret, SecretString};

pub mod broker;
pub mod exchange;
pub mod sts;

/// Role that was assumed; not secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumedIdentity {
    pub arn: String,
}

/// AWS temporary credentials structure
#[derive(Clone, PartialEq)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime,
}

impl fmt::Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &"<redacted>")
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Result of a successful exchange: both halves or nothing
#[derive(Debug, Clone, PartialEq)]
pub struct AssumedRole {
    pub identity: AssumedIdentity,
    pub credentials: TemporaryCredentials,
}

/// Contents of the web identity token file.
///
/// Zeroized on drop and never printed by `Debug`.
pub struct WebIdentityToken(SecretString);

impl WebIdentityToken {
    pub fn new(token: String) -> Self {
        Self(SecretString::new(token))
    }

    /// Token text. Callers must not log it.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for WebIdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WebIdentityToken").field(&"<redacted>").finish()
    }
}

// Re-export commonly used types (functions should be accessed via module path)
pub use broker::{BrokerConnector, IdentityBroker, WebIdentityRequest};
pub use sts::{StsBroker, StsConnector};
