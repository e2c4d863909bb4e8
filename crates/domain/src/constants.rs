//! Client constants
//!
//! Centralized location for the fixed endpoints and well-known paths of the
//! Dinero API.

// Remote endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.dinero.dk/v1";
pub const DEFAULT_AUTH_URL: &str = "https://authz.dinero.dk/dineroapi/oauth/token";

// Token exchange
pub const TOKEN_GRANT_TYPE: &str = "password";
pub const TOKEN_SCOPE: &str = "read write";

// Organization-agnostic resource paths
pub const ORGANIZATIONS_PATH: &str = "organizations";
pub const HEALTH_CHECK_PATH: &str = "health/startup";

/// Paths that may be requested while no organization scope is set.
pub const ORGANIZATION_AGNOSTIC_PATHS: [&str; 2] = [ORGANIZATIONS_PATH, HEALTH_CHECK_PATH];

// Schema lookup
pub const SCHEMA_NAME_SUFFIX: &str = "schema";
pub const SCHEMA_FILE_EXTENSION: &str = "json";

// Headers
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const REDACTED: &str = "<redacted>";

/// Whether `path` may be requested without an organization scope.
#[must_use]
pub fn is_organization_agnostic(path: &str) -> bool {
    ORGANIZATION_AGNOSTIC_PATHS.contains(&path)
}
