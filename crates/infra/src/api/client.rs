//! Dinero API client
//!
//! [`DineroClient`] authenticates once at construction and then hands out
//! resource clients that all share the same engine, session and validator.
//!
//! # Concurrency
//!
//! The client is `Send + Sync` and every call is a single blocking exchange.
//! The organization scope is shared mutable state: switching it while other
//! threads are issuing calls on the same client is a race the client does not
//! guard against. Use one client per organization, or synchronize switching
//! externally.
//!
//! # Token lifetime
//!
//! The bearer token is never refreshed. Once it expires every call fails
//! with `DineroError::Transport { status: 401, .. }`
//! (see [`DineroError::is_unauthorized`]); build a new client to continue.

use std::sync::Arc;

use dinero_core::{DebugSink, HttpTransport, SchemaSource, SchemaValidator};
use dinero_domain::constants::{HEALTH_CHECK_PATH, ORGANIZATIONS_PATH};
use dinero_domain::{ClientConfig, Credentials, DineroError, HttpMethod, Result};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::auth::{PasswordGrantProvider, TokenProvider};
use super::context::ApiContext;
use super::debug_sink::TracingDebugSink;
use super::engine::{ApiCall, RequestEngine, Session};
use crate::config::{self, DineroSettings};
use crate::http::ReqwestTransport;
use crate::resources::{
    AccountingYears, Accounts, Attachments, Contacts, Entries, Files, Invoices, Vouchers,
};
use crate::schemas::{SchemaDirectory, StaticSchemas};

const USER_AGENT: &str = concat!("dinero-client/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the Dinero REST API
#[derive(Debug, Clone)]
pub struct DineroClient {
    ctx: Arc<ApiContext>,
}

impl DineroClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> DineroClientBuilder {
        DineroClientBuilder::default()
    }

    /// Authenticate with `credentials` and build a client from `config`.
    ///
    /// # Errors
    /// `DineroError::Auth` if the token exchange fails; the client is not
    /// created.
    pub fn connect(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::builder().config(config).credentials(credentials).build()
    }

    /// Build a client from environment variables, falling back to a config
    /// file (see [`crate::config::load`]).
    pub fn from_env() -> Result<Self> {
        let DineroSettings { credentials, client } = config::load()?;
        Self::connect(client, credentials)
    }

    /// List the organizations the credentials can access. Needs no
    /// organization scope.
    pub fn list_organizations(&self) -> Result<Value> {
        self.ctx.engine().execute(ApiCall::new(HttpMethod::Get, ORGANIZATIONS_PATH))
    }

    /// Probe the service's startup health endpoint. Needs no organization
    /// scope.
    pub fn check_health(&self) -> Result<Value> {
        self.ctx.engine().execute(ApiCall::new(HttpMethod::Get, HEALTH_CHECK_PATH))
    }

    /// Scope subsequent calls to `organization_id`.
    ///
    /// # Errors
    /// `DineroError::Config` if the id is blank.
    pub fn set_organization(&self, organization_id: impl Into<String>) -> Result<()> {
        let organization_id = organization_id.into();
        if organization_id.trim().is_empty() {
            return Err(DineroError::Config("Organization ID must not be empty".to_string()));
        }
        debug!(organization_id = %organization_id, "Switching organization scope");
        self.ctx.engine().session().set_organization_id(Some(organization_id));
        Ok(())
    }

    /// Drop the organization scope; only organization-agnostic calls work
    /// afterwards.
    pub fn clear_organization(&self) {
        self.ctx.engine().session().set_organization_id(None);
    }

    pub fn organization(&self) -> Option<String> {
        self.ctx.engine().session().organization_id()
    }

    /// Toggle the per-exchange debug dump.
    pub fn set_debug(&self, enabled: bool) {
        self.ctx.engine().set_debug(enabled);
    }

    pub fn is_debug(&self) -> bool {
        self.ctx.engine().is_debug()
    }

    pub fn accounting_years(&self) -> AccountingYears {
        AccountingYears::new(Arc::clone(&self.ctx))
    }

    pub fn accounts(&self) -> Accounts {
        Accounts::new(Arc::clone(&self.ctx))
    }

    pub fn attachments(&self) -> Attachments {
        Attachments::new(Arc::clone(&self.ctx))
    }

    pub fn contacts(&self) -> Contacts {
        Contacts::new(Arc::clone(&self.ctx))
    }

    pub fn entries(&self) -> Entries {
        Entries::new(Arc::clone(&self.ctx))
    }

    pub fn invoices(&self) -> Invoices {
        Invoices::new(Arc::clone(&self.ctx))
    }

    pub fn vouchers(&self) -> Vouchers {
        Vouchers::new(Arc::clone(&self.ctx))
    }

    pub fn files(&self) -> Files {
        Files::new(Arc::clone(&self.ctx))
    }
}

/// Builder for [`DineroClient`]
///
/// Every collaborator has a production default; tests swap in their own
/// transport, token provider, schema source or debug sink.
#[derive(Default)]
pub struct DineroClientBuilder {
    config: Option<ClientConfig>,
    credentials: Option<Credentials>,
    transport: Option<Arc<dyn HttpTransport>>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    schemas: Option<Arc<dyn SchemaSource>>,
    debug_sink: Option<Arc<dyn DebugSink>>,
}

impl DineroClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credentials exchanged for a token at build time
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use `transport` for both the token exchange and resource calls
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Override the schema source (takes precedence over `schema_dir`)
    pub fn schemas(mut self, schemas: Arc<dyn SchemaSource>) -> Self {
        self.schemas = Some(schemas);
        self
    }

    pub fn debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.debug_sink = Some(sink);
        self
    }

    /// Authenticate and build the client
    ///
    /// # Errors
    ///
    /// - `DineroError::Config` if credentials are missing or the transport
    ///   cannot be created
    /// - `DineroError::Auth` / `DineroError::Network` if the token exchange
    ///   fails
    #[instrument(skip_all)]
    pub fn build(self) -> Result<DineroClient> {
        let config = self.config.unwrap_or_default();
        let credentials = self
            .credentials
            .ok_or_else(|| DineroError::Config("Credentials not set".to_string()))?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::builder()
                    .timeout(config.timeout())
                    .user_agent(USER_AGENT)
                    .build()?,
            ),
        };

        let token_provider = self.token_provider.unwrap_or_else(|| {
            Arc::new(PasswordGrantProvider::new(Arc::clone(&transport), config.auth_url.clone()))
        });
        let token = token_provider.authenticate(&credentials)?;

        let schemas: Arc<dyn SchemaSource> = match (self.schemas, &config.schema_dir) {
            (Some(schemas), _) => schemas,
            (None, Some(dir)) => Arc::new(SchemaDirectory::new(dir.clone())),
            (None, None) => Arc::new(StaticSchemas::new()),
        };

        let sink = self.debug_sink.unwrap_or_else(|| Arc::new(TracingDebugSink));
        let session = Session::new(token, config.organization_id.clone());
        let engine = RequestEngine::new(transport, config.base_url.clone(), session, sink);
        engine.set_debug(config.debug);

        info!(
            base_url = %engine.base_url(),
            organization_id = ?config.organization_id,
            "Dinero client ready"
        );

        Ok(DineroClient {
            ctx: Arc::new(ApiContext::new(engine, SchemaValidator::new(schemas))),
        })
    }
}
