//! Integration tests for pre-flight schema validation
//!
//! A payload that violates a registered schema must never reach the
//! transport; a missing schema lets the call through unchecked.

mod support;

use dinero_domain::{AccountKind, DineroError};
use dinero_infra::StaticSchemas;
use serde_json::{json, Value};
use support::{MockTransport, ORG};

fn contact_schema() -> Value {
    json!({
        "type": "object",
        "required": ["Name", "CountryKey", "IsPerson"],
        "properties": {
            "Name": {"type": "string", "minLength": 1},
            "CountryKey": {"type": "string", "enum": ["DK", "SE", "NO", "DE"]},
            "IsPerson": {"type": "boolean"}
        }
    })
}

fn list_params_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "fields": {"type": "string"},
            "changesSince": {"type": "string", "format": "date-time"},
            "page": {"type": "integer", "minimum": 0}
        },
        "additionalProperties": false
    })
}

#[test]
fn test_schema_violation_blocks_the_request() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new().with_schema("contact_create_schema", contact_schema());
    let client = support::client_with(&transport, Some(ORG), schemas);

    let invalid = json!({"Name": "Acme", "CountryKey": "US", "IsPerson": false});
    match client.contacts().create(&invalid) {
        Err(DineroError::Validation(message)) => {
            assert!(message.starts_with("Invalid data for contact create:"), "{message}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);

    let valid = json!({"Name": "Acme", "CountryKey": "DK", "IsPerson": false});
    client.contacts().create(&valid).unwrap();
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_missing_schema_lets_any_payload_through() {
    let transport = MockTransport::new();
    let client = support::client(&transport);

    client.contacts().update("c1", &json!({"anything": ["goes"]})).unwrap();
    client.invoices().create(&json!(42), false).unwrap();
    assert_eq!(transport.call_count(), 2);
}

#[test]
fn test_update_uses_its_own_schema() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new().with_schema("contact_create_schema", contact_schema());
    let client = support::client_with(&transport, Some(ORG), schemas);

    // Only the create schema exists, so a partial update is not checked.
    client.contacts().update("c1", &json!({"Name": ""})).unwrap();
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_query_parameters_are_validated() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new().with_schema("invoice_list_schema", list_params_schema());
    let client = support::client_with(&transport, Some(ORG), schemas);

    let result = client.invoices().list(Some(&json!({"page": -1})));
    assert!(matches!(result, Err(DineroError::Validation(_))));

    let result = client.invoices().list(Some(&json!({"sort": "Number"})));
    assert!(matches!(result, Err(DineroError::Validation(_))));
    assert_eq!(transport.call_count(), 0);

    client.invoices().list(Some(&json!({"fields": "Guid", "page": 2}))).unwrap();
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_absent_params_are_validated_as_empty_object() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new()
        .with_schema("entry_list_schema", json!({"type": "object", "required": ["fromDate"]}));
    let client = support::client_with(&transport, Some(ORG), schemas);

    assert!(matches!(client.entries().list(None), Err(DineroError::Validation(_))));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_entry_changes_share_the_list_schema() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new()
        .with_schema("entry_list_schema", json!({"type": "object", "required": ["changesFrom"]}));
    let client = support::client_with(&transport, Some(ORG), schemas);

    let result = client.entries().list_changes(Some(&json!({"changesTo": "2024-01-31"})));
    match result {
        Err(DineroError::Validation(message)) => assert!(message.contains("entry list")),
        other => panic!("expected validation error, got {other:?}"),
    }

    client.entries().list_changes(Some(&json!({"changesFrom": "2024-01-01"}))).unwrap();
    assert_eq!(transport.last_call().url, support::url("entries/changes"));
}

#[test]
fn test_contact_state_validates_under_its_own_prefix() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new().with_schema(
        "contact_state_get_schema",
        json!({"type": "object", "properties": {"hideClosed": {"type": "boolean"}}}),
    );
    let client = support::client_with(&transport, Some(ORG), schemas);

    let result = client.contacts().state().get("c1", Some(&json!({"hideClosed": "yes"})));
    assert!(matches!(result, Err(DineroError::Validation(ref msg)) if msg.contains("contact_state get")));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_account_kind_selects_schema() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new()
        .with_schema(
            "account_deposit_create_schema",
            json!({"type": "object", "required": ["Name", "AccountNumber"]}),
        )
        .with_schema("account_purchase_list_schema", list_params_schema());
    let client = support::client_with(&transport, Some(ORG), schemas);

    // The entry variant has no schema and goes through unchecked.
    client.accounts().create(&json!({"Name": "Cash"}), AccountKind::Entry).unwrap();
    assert_eq!(transport.call_count(), 1);

    let result = client.accounts().create(&json!({"Name": "Bank"}), AccountKind::Deposit);
    assert!(matches!(result, Err(DineroError::Validation(ref msg)) if msg.contains("account_deposit create")));

    let result = client.accounts().list(Some(&json!({"unknown": 1})), AccountKind::Purchase);
    assert!(matches!(result, Err(DineroError::Validation(_))));
    assert_eq!(transport.call_count(), 1);

    client.accounts().list(Some(&json!({"fields": "Name"})), AccountKind::Purchase).unwrap();
    assert_eq!(transport.last_call().url, support::url("accounts/purchase"));
}

#[test]
fn test_purchase_accounts_cannot_be_created() {
    let transport = MockTransport::new();
    let schemas = StaticSchemas::new()
        .with_schema("account_purchase_create_schema", json!({"type": "object"}));
    let client = support::client_with(&transport, Some(ORG), schemas);

    let result = client.accounts().create(&json!({"Name": "Supplies"}), AccountKind::Purchase);
    match result {
        Err(DineroError::Config(message)) => assert!(message.contains("purchase")),
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_account_kind_selector_parsing() {
    assert_eq!("deposit".parse::<AccountKind>().unwrap(), AccountKind::Deposit);
    assert!(matches!("savings".parse::<AccountKind>(), Err(DineroError::Config(_))));
}

#[test]
fn test_malformed_schema_is_a_configuration_error() {
    let transport = MockTransport::new();
    let schemas =
        StaticSchemas::new().with_schema("voucher_create_schema", json!({"type": "not-a-type"}));
    let client = support::client_with(&transport, Some(ORG), schemas);

    assert!(matches!(
        client.vouchers().create(&json!({}), false),
        Err(DineroError::Config(_))
    ));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_binary_and_identifier_only_calls_skip_validation() {
    let transport = MockTransport::new();
    // A schema that rejects everything: only validated operations consult it.
    let reject_all = json!({"not": {}});
    let schemas = StaticSchemas::new()
        .with_schema("invoice_delete_schema", reject_all.clone())
        .with_schema("invoice_book_schema", reject_all.clone())
        .with_schema("invoice_get_schema", reject_all);
    let client = support::client_with(&transport, Some(ORG), schemas);

    client.invoices().delete("i1", "t1").unwrap();
    client.invoices().book("i1", "t1").unwrap();
    client.invoices().get("i1").unwrap();
    assert_eq!(transport.call_count(), 3);
}
