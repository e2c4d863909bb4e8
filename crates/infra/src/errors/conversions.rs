//! Conversions from external infrastructure errors into domain errors.

use dinero_domain::DineroError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DineroError);

impl From<InfraError> for DineroError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DineroError> for InfraError {
    fn from(value: DineroError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDineroError {
    fn into_dinero(self) -> DineroError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DineroError */
/* -------------------------------------------------------------------------- */

impl IntoDineroError for HttpError {
    fn into_dinero(self) -> DineroError {
        if self.is_timeout() {
            return DineroError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DineroError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return DineroError::Config(format!("Invalid HTTP request: {self}"));
        }

        // Statuses never reach here: the transport hands every response back.
        DineroError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_dinero())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DineroError */
/* -------------------------------------------------------------------------- */

impl IntoDineroError for JsonError {
    fn into_dinero(self) -> DineroError {
        DineroError::InvalidResponse(format!("Response body is not valid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_dinero())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    #[test]
    fn connection_refused_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED

        let client = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().unwrap_err();

        let mapped: DineroError = InfraError::from(error).into();
        match mapped {
            DineroError::Network(msg) => assert!(msg.to_lowercase().contains("connection")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_maps_to_invalid_response() {
        let error = serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err();
        let mapped: DineroError = InfraError::from(error).into();
        assert!(matches!(mapped, DineroError::InvalidResponse(_)));
    }
}
