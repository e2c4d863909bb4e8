//! Configuration management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTH_URL, DEFAULT_BASE_URL};

/// Client configuration (everything except credentials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Resource base endpoint, without trailing slash
    pub base_url: String,
    /// OAuth2 token endpoint
    pub auth_url: String,
    /// Organization scope applied at construction
    pub organization_id: Option<String>,
    /// Transport timeout; `None` leaves requests unbounded
    pub timeout_secs: Option<u64>,
    /// Dump every exchange to the debug sink
    pub debug: bool,
    /// Directory holding `{prefix}_{operation}_schema.json` documents
    pub schema_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Transport timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            organization_id: None,
            timeout_secs: None,
            debug: false,
            schema_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.dinero.dk/v1");
        assert_eq!(config.auth_url, "https://authz.dinero.dk/dineroapi/oauth/token");
        assert!(config.timeout().is_none());
        assert!(config.organization_id.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
organization_id = "12345"
timeout_secs = 15
"#,
        )
        .unwrap();

        assert_eq!(config.organization_id.as_deref(), Some("12345"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
