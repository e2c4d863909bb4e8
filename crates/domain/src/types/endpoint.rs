//! Endpoint descriptors
//!
//! Every business operation is a static `(resource, verb, path template,
//! operation)` tuple. Resource clients hold tables of these instead of
//! formatting paths by hand.

use std::fmt;

use crate::errors::{DineroError, Result};
use crate::impl_selector_conversions;
use crate::types::http::HttpMethod;

/// Resource families exposed under the organization scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    AccountingYears,
    Accounts,
    Attachments,
    Contacts,
    ContactStates,
    Entries,
    Invoices,
    Vouchers,
    Files,
}

impl Resource {
    /// Path root below the organization scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountingYears => "accountingyears",
            Self::Accounts => "accounts",
            Self::Attachments => "attachments",
            Self::Contacts => "contacts",
            Self::ContactStates => "state-of-account",
            Self::Entries => "entries",
            Self::Invoices => "invoices",
            Self::Vouchers => "vouchers/manuel",
            Self::Files => "files",
        }
    }

    /// Name root used to look up validation schemas.
    #[must_use]
    pub const fn schema_prefix(self) -> &'static str {
        match self {
            Self::AccountingYears => "accounting_year",
            Self::Accounts => "account",
            Self::Attachments => "attachment",
            Self::Contacts => "contact",
            Self::ContactStates => "contact_state",
            Self::Entries => "entry",
            Self::Invoices => "invoice",
            Self::Vouchers => "voucher",
            Self::Files => "file",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account listing/creation variant
///
/// Selects both the path suffix (`accounts/{kind}`) and the schema prefix
/// (`account_{kind}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Entry,
    Deposit,
    Purchase,
}

impl_selector_conversions!(AccountKind {
    Entry => "entry",
    Deposit => "deposit",
    Purchase => "purchase",
});

impl AccountKind {
    /// Only entry and deposit accounts can be created; purchase accounts are
    /// list-only.
    #[must_use]
    pub const fn is_creatable(self) -> bool {
        matches!(self, Self::Entry | Self::Deposit)
    }

    /// Reject kinds that cannot be created.
    ///
    /// # Errors
    /// Returns `DineroError::Config` for [`AccountKind::Purchase`].
    pub fn ensure_creatable(self) -> Result<Self> {
        if self.is_creatable() {
            Ok(self)
        } else {
            Err(DineroError::Config(format!("Invalid account type for create: {self}")))
        }
    }

    /// Schema prefix for this account variant.
    #[must_use]
    pub fn schema_prefix(self) -> String {
        format!("{}_{}", Resource::Accounts.schema_prefix(), self.as_str())
    }
}

/// Static description of one business operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub resource: Resource,
    pub method: HttpMethod,
    /// Path below the resource root; `{name}` placeholders are filled in order
    pub path_template: &'static str,
    /// Operation name used for schema lookup
    pub operation: &'static str,
    /// Whether the payload or query is checked against a schema first
    pub validated: bool,
}

impl Endpoint {
    #[must_use]
    pub const fn new(
        resource: Resource,
        method: HttpMethod,
        path_template: &'static str,
        operation: &'static str,
    ) -> Self {
        Self { resource, method, path_template, operation, validated: false }
    }

    /// Mark the endpoint as schema-validated.
    #[must_use]
    pub const fn validated(mut self) -> Self {
        self.validated = true;
        self
    }

    #[must_use]
    pub const fn schema_prefix(&self) -> &'static str {
        self.resource.schema_prefix()
    }

    /// Render the resource path, percent-encoding each argument.
    ///
    /// # Errors
    /// Returns `DineroError::Config` when the argument count does not match
    /// the template or an argument is empty.
    pub fn path(&self, args: &[&str]) -> Result<String> {
        let mut rendered = String::from(self.resource.as_str());
        let mut args = args.iter();

        if !self.path_template.is_empty() {
            rendered.push('/');
            let mut rest = self.path_template;
            while let Some(start) = rest.find('{') {
                rendered.push_str(&rest[..start]);
                let end = rest[start..].find('}').map(|offset| start + offset).ok_or_else(|| {
                    DineroError::Config(format!("Unclosed placeholder in {}", self.path_template))
                })?;
                let placeholder = &rest[start..=end];
                let value = args.next().ok_or_else(|| {
                    DineroError::Config(format!("Missing value for {placeholder}"))
                })?;
                if value.trim().is_empty() {
                    return Err(DineroError::Config(format!("Empty value for {placeholder}")));
                }
                rendered.push_str(&urlencoding::encode(value));
                rest = &rest[end + 1..];
            }
            rendered.push_str(rest);
        }

        if args.next().is_some() {
            return Err(DineroError::Config(format!(
                "Too many path arguments for {} {}",
                self.method, self.resource
            )));
        }

        Ok(rendered)
    }
}
