//! Create-then-book composite shared by invoices and vouchers
//!
//! The two steps are independent remote calls. If booking fails, the draft
//! created by the first call stays on the server and the caller receives the
//! booking error; nothing is rolled back.

use dinero_domain::{DineroError, Endpoint, Result};
use serde_json::{json, Value};
use tracing::warn;

use crate::api::{ApiContext, Payload};

const GUID_FIELD: &str = "Guid";
const TIMESTAMP_FIELD: &str = "Timestamp";

/// Body carrying the optimistic-concurrency timestamp.
pub(super) fn timestamp_body(timestamp: &str) -> Value {
    json!({ "timestamp": timestamp })
}

/// Run `create`, then, when `auto_book` is set, `book` the created record.
///
/// Returns the create response either way.
pub(super) fn create_then_book(
    ctx: &ApiContext,
    create: &Endpoint,
    book: &Endpoint,
    data: &Value,
    auto_book: bool,
) -> Result<Value> {
    let created = ctx.dispatch(create, &[], Payload::Body(data))?;
    if !auto_book {
        return Ok(created);
    }

    let guid = string_field(&created, GUID_FIELD)?;
    let timestamp = string_field(&created, TIMESTAMP_FIELD)?;

    let body = timestamp_body(timestamp);
    if let Err(err) = ctx.dispatch(book, &[guid], Payload::Body(&body)) {
        warn!(
            resource = %create.resource,
            guid = %guid,
            error.kind = err.label(),
            error = %err,
            "Booking failed after successful create; draft left in place"
        );
        return Err(err);
    }

    Ok(created)
}

fn string_field<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value.get(field).and_then(Value::as_str).ok_or_else(|| {
        DineroError::InvalidResponse(format!("Create response is missing {field}; cannot book"))
    })
}
