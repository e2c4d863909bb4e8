//! API authentication with the OAuth2 password grant
//!
//! Dinero integrations exchange their long-lived credentials for a bearer
//! token exactly once, when the client is constructed. There is no refresh:
//! an expired token surfaces as an HTTP 401 on the next resource call.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dinero_core::{HttpRequest, HttpTransport, RequestBody};
use dinero_domain::constants::{AUTHORIZATION_HEADER, TOKEN_GRANT_TYPE, TOKEN_SCOPE};
use dinero_domain::{Credentials, DineroError, HttpMethod, Result};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Trait for obtaining a bearer token
///
/// This trait allows dependency injection and testing with mock providers.
pub trait TokenProvider: Send + Sync {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// Returns `DineroError::Auth` when the exchange is rejected or yields no
    /// token, or `DineroError::Network` when the endpoint is unreachable.
    fn authenticate(&self, credentials: &Credentials) -> Result<SecretString>;
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Token provider performing the password-grant exchange over a transport
pub struct PasswordGrantProvider {
    transport: Arc<dyn HttpTransport>,
    auth_url: String,
}

impl PasswordGrantProvider {
    /// Create a provider posting to `auth_url` through `transport`
    pub fn new(transport: Arc<dyn HttpTransport>, auth_url: impl Into<String>) -> Self {
        Self { transport, auth_url: auth_url.into() }
    }

    fn token_request(&self, credentials: &Credentials) -> HttpRequest {
        let basic = STANDARD
            .encode(format!("{}:{}", credentials.client_id(), credentials.client_secret()));

        HttpRequest::new(HttpMethod::Post, self.auth_url.clone())
            .with_header(AUTHORIZATION_HEADER, format!("Basic {basic}"))
            .with_body(RequestBody::Form(vec![
                ("grant_type".to_string(), TOKEN_GRANT_TYPE.to_string()),
                ("scope".to_string(), TOKEN_SCOPE.to_string()),
                ("username".to_string(), credentials.api_key().to_string()),
                ("password".to_string(), credentials.api_key().to_string()),
            ]))
    }
}

impl TokenProvider for PasswordGrantProvider {
    #[instrument(skip_all, fields(auth_url = %self.auth_url, client_id = %credentials.client_id()))]
    fn authenticate(&self, credentials: &Credentials) -> Result<SecretString> {
        debug!("Requesting access token");

        let response = self.transport.send(self.token_request(credentials))?;
        if !response.is_success() {
            return Err(DineroError::Auth(format!(
                "Token exchange failed with status {}: {}",
                response.status,
                response.text()
            )));
        }

        let token = serde_json::from_slice::<TokenResponse>(&response.body)
            .map_err(|e| DineroError::Auth(format!("Token response is not valid JSON: {e}")))?
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                DineroError::Auth("Token response did not contain an access_token".to_string())
            })?;

        info!("API authentication successful");
        Ok(SecretString::from(token))
    }
}

impl std::fmt::Debug for PasswordGrantProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordGrantProvider").field("auth_url", &self.auth_url).finish()
    }
}
