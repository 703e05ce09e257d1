// crates/elasticsearch-connector/tests/common/mod.rs
// =============================================================================
// Module: Connector Test Helpers
// Description: Shared helpers for connector resolution tests.
// Purpose: Reduce duplication across elasticsearch-connector integration tests.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use connector_options::Configuration;
use elasticsearch_connector::ValidationError;

/// Returns a store with only the required options set.
pub fn minimal_store() -> Configuration {
    Configuration::new().with("hosts", "http://localhost:9200").with("index", "orders")
}

/// Asserts that a result failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ValidationError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
