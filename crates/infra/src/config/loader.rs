//! Configuration loader
//!
//! Loads credentials and client settings from environment variables or
//! files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DINERO_API_KEY`: Organization API key (required)
//! - `DINERO_CLIENT_ID`: OAuth client id (required)
//! - `DINERO_CLIENT_SECRET`: OAuth client secret (required)
//! - `DINERO_ORGANIZATION_ID`: Initial organization scope
//! - `DINERO_BASE_URL`: Resource base endpoint
//! - `DINERO_AUTH_URL`: Token endpoint
//! - `DINERO_TIMEOUT_SECS`: Transport timeout in seconds (unset = none)
//! - `DINERO_DEBUG`: Dump every exchange (true/false)
//! - `DINERO_SCHEMA_DIR`: Directory of validation schemas
//!
//! ## File Layout
//! ```toml
//! [credentials]
//! api_key = "..."
//! client_id = "..."
//! client_secret = "..."
//!
//! [client]
//! organization_id = "12345"
//! schema_dir = "schemas"
//! ```
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./dinero.{json,toml}` then `./config.{json,toml}` (current working
//!    directory)
//! 2. The same names in the parent and grandparent directories
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use dinero_domain::{ClientConfig, Credentials, DineroError, Result};
use serde::Deserialize;

const CONFIG_FILE_NAMES: [&str; 4] = ["dinero.json", "dinero.toml", "config.json", "config.toml"];
const SEARCH_PREFIXES: [&str; 3] = ["", "..", "../.."];

/// Everything needed to construct a client
#[derive(Debug)]
pub struct DineroSettings {
    pub credentials: Credentials,
    pub client: ClientConfig,
}

#[derive(Deserialize)]
struct SettingsFile {
    credentials: CredentialsFile,
    #[serde(default)]
    client: ClientConfig,
}

#[derive(Deserialize)]
struct CredentialsFile {
    api_key: String,
    client_id: String,
    client_secret: String,
}

impl From<SettingsFile> for DineroSettings {
    fn from(file: SettingsFile) -> Self {
        let CredentialsFile { api_key, client_id, client_secret } = file.credentials;
        Self { credentials: Credentials::new(api_key, client_id, client_secret), client: file.client }
    }
}

/// Load settings with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DineroError::Config` if settings cannot be loaded from either
/// source.
pub fn load() -> Result<DineroSettings> {
    match load_from_env() {
        Ok(settings) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(settings)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load settings from environment variables
///
/// # Errors
/// Returns `DineroError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<DineroSettings> {
    let credentials = Credentials::new(
        env_var("DINERO_API_KEY")?,
        env_var("DINERO_CLIENT_ID")?,
        env_var("DINERO_CLIENT_SECRET")?,
    );

    let defaults = ClientConfig::default();
    let timeout_secs = optional_env_var("DINERO_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| DineroError::Config(format!("Invalid timeout seconds: {e}")))
        })
        .transpose()?;

    let client = ClientConfig {
        base_url: optional_env_var("DINERO_BASE_URL").unwrap_or(defaults.base_url),
        auth_url: optional_env_var("DINERO_AUTH_URL").unwrap_or(defaults.auth_url),
        organization_id: optional_env_var("DINERO_ORGANIZATION_ID"),
        timeout_secs,
        debug: env_bool("DINERO_DEBUG", false),
        schema_dir: optional_env_var("DINERO_SCHEMA_DIR").map(PathBuf::from),
    };

    Ok(DineroSettings { credentials, client })
}

/// Load settings from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DineroError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<DineroSettings> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DineroError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DineroError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DineroError::Config(format!("Failed to read config file: {e}")))?;

    parse_settings(&contents, &config_path)
}

/// Parse settings from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_settings(contents: &str, path: &Path) -> Result<DineroSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let file: SettingsFile = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DineroError::Config(format!("Invalid TOML format: {e}")))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| DineroError::Config(format!("Invalid JSON format: {e}")))?,
        _ => return Err(DineroError::Config(format!("Unsupported config format: {extension}"))),
    };

    Ok(file.into())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| {
            SEARCH_PREFIXES.iter().flat_map(move |prefix| {
                CONFIG_FILE_NAMES.iter().map(move |name| root.join(prefix).join(name))
            })
        })
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| DineroError::Config(format!("Missing required environment variable: {key}")))
}

/// Get optional environment variable, treating blank values as unset
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 9] = [
        "DINERO_API_KEY",
        "DINERO_CLIENT_ID",
        "DINERO_CLIENT_SECRET",
        "DINERO_ORGANIZATION_ID",
        "DINERO_BASE_URL",
        "DINERO_AUTH_URL",
        "DINERO_TIMEOUT_SECS",
        "DINERO_DEBUG",
        "DINERO_SCHEMA_DIR",
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    fn set_required_env() {
        std::env::set_var("DINERO_API_KEY", "key");
        std::env::set_var("DINERO_CLIENT_ID", "client");
        std::env::set_var("DINERO_CLIENT_SECRET", "secret");
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("DINERO_TEST_BOOL_YES", "YES");
        std::env::set_var("DINERO_TEST_BOOL_OFF", "off");
        std::env::remove_var("DINERO_TEST_BOOL_MISSING");

        assert!(env_bool("DINERO_TEST_BOOL_YES", false));
        assert!(!env_bool("DINERO_TEST_BOOL_OFF", true));
        assert!(env_bool("DINERO_TEST_BOOL_MISSING", true));

        std::env::remove_var("DINERO_TEST_BOOL_YES");
        std::env::remove_var("DINERO_TEST_BOOL_OFF");
    }

    #[test]
    fn test_load_from_env_required_only() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();

        let settings = load_from_env().expect("settings from env");
        assert_eq!(settings.credentials.api_key(), "key");
        assert_eq!(settings.credentials.client_id(), "client");
        assert_eq!(settings.client, ClientConfig::default());

        clear_env();
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("DINERO_ORGANIZATION_ID", "98765");
        std::env::set_var("DINERO_BASE_URL", "http://localhost:9000/v1");
        std::env::set_var("DINERO_AUTH_URL", "http://localhost:9000/token");
        std::env::set_var("DINERO_TIMEOUT_SECS", "20");
        std::env::set_var("DINERO_DEBUG", "true");
        std::env::set_var("DINERO_SCHEMA_DIR", "/srv/schemas");

        let settings = load_from_env().expect("settings from env");
        let client = settings.client;
        assert_eq!(client.organization_id.as_deref(), Some("98765"));
        assert_eq!(client.base_url, "http://localhost:9000/v1");
        assert_eq!(client.auth_url, "http://localhost:9000/token");
        assert_eq!(client.timeout(), Some(Duration::from_secs(20)));
        assert!(client.debug);
        assert_eq!(client.schema_dir, Some(PathBuf::from("/srv/schemas")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("DINERO_API_KEY", "key");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DineroError::Config(ref msg) if msg.contains("DINERO_CLIENT_ID")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("DINERO_TIMEOUT_SECS", "soon");

        assert!(matches!(load_from_env(), Err(DineroError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_parse_settings_toml() {
        let toml_content = r#"
[credentials]
api_key = "k"
client_id = "id"
client_secret = "s"

[client]
organization_id = "42"
debug = true
"#;

        let settings = parse_settings(toml_content, Path::new("dinero.toml")).unwrap();
        assert_eq!(settings.credentials.client_secret(), "s");
        assert_eq!(settings.client.organization_id.as_deref(), Some("42"));
        assert!(settings.client.debug);
        assert!(settings.client.timeout().is_none());
    }

    #[test]
    fn test_parse_settings_json_without_client_table() {
        let json_content = r#"{
            "credentials": {"api_key": "k", "client_id": "id", "client_secret": "s"}
        }"#;

        let settings = parse_settings(json_content, Path::new("dinero.json")).unwrap();
        assert_eq!(settings.client, ClientConfig::default());
    }

    #[test]
    fn test_parse_settings_missing_credentials() {
        let result = parse_settings("[client]\ndebug = true\n", Path::new("dinero.toml"));
        assert!(matches!(result, Err(DineroError::Config(_))));
    }

    #[test]
    fn test_parse_settings_unsupported_format() {
        let result = parse_settings("some content", Path::new("dinero.yaml"));
        assert!(matches!(result, Err(DineroError::Config(ref msg)) if msg.contains("yaml")));
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/dinero.toml")));
        assert!(matches!(result, Err(DineroError::Config(_))));
    }
}
