// crates/elasticsearch-connector/src/examples.rs
// ============================================================================
// Module: Connector Config Examples
// Description: Canonical example connector configuration.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The example uses nested tables, which flatten to dotted option keys when
//! loaded, so `[sink.bulk-flush]` with `max-actions` yields
//! `sink.bulk-flush.max-actions`.

/// Returns a canonical example connector configuration in TOML.
#[must_use]
pub fn example_toml() -> String {
    String::from(
        r#"hosts = ["http://es-node-1:9200", "http://es-node-2:9200"]
index = "orders"
username = "elastic"
password = "changeme"
format = "json"

[document-id]
key-delimiter = "$"

[connection]
path-prefix = "/v1"
request-timeout = "2s"
timeout = "5s"

[socket]
timeout = "30s"

[sink]
delivery-guarantee = "at-least-once"
parallelism = 2

[sink.bulk-flush]
max-actions = 500
max-size = "4mb"
interval = "2s"

[sink.bulk-flush.backoff]
strategy = "exponential"
max-retries = 3
delay = "250ms"
"#,
    )
}
