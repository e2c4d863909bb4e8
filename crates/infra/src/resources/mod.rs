//! Resource clients
//!
//! One thin client per resource family. Each binds its business operations
//! to static [`Endpoint`](dinero_domain::Endpoint) descriptors and shares a
//! single [`ApiContext`](crate::api::ApiContext) with the others.

pub mod accounting_years;
pub mod accounts;
pub mod attachments;
mod booking;
pub mod contacts;
pub mod entries;
pub mod files;
pub mod invoices;
pub mod vouchers;

pub use accounting_years::AccountingYears;
pub use accounts::Accounts;
pub use attachments::Attachments;
pub use contacts::{ContactStates, Contacts};
pub use entries::Entries;
pub use files::{DownloadOutcome, Files};
pub use invoices::Invoices;
pub use vouchers::Vouchers;
