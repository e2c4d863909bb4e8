//! Debug dump of API exchanges through `tracing`

use dinero_core::{DebugExchange, DebugSink};
use tracing::info;

/// Target used for debug dumps; filter on it to isolate exchange traces.
pub const DEBUG_TARGET: &str = "dinero::debug";

/// Emits each exchange as one `info` event on [`DEBUG_TARGET`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDebugSink;

impl DebugSink for TracingDebugSink {
    fn record(&self, exchange: &DebugExchange) {
        let headers = render_pairs(&exchange.headers);
        let query = render_pairs(&exchange.query);

        info!(
            target: DEBUG_TARGET,
            method = %exchange.method,
            url = %exchange.url,
            headers = %headers,
            query = %query,
            request_body = %exchange.request_body,
            status = exchange.status,
            response_body = %exchange.response_body,
            "API exchange"
        );
    }
}

fn render_pairs(pairs: &[(String, String)]) -> String {
    pairs.iter().map(|(key, value)| format!("{key}: {value}")).collect::<Vec<_>>().join(", ")
}
