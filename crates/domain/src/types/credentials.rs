//! Long-lived API credentials
//!
//! Exchanged once for a bearer token at client construction. Secrets are
//! wrapped so they never show up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};

/// Credentials issued by Dinero for an integration
#[derive(Debug)]
pub struct Credentials {
    api_key: SecretString,
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from their raw parts.
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// The organization API key (sent as both username and password).
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}
