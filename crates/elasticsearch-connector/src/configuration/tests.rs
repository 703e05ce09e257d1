// crates/elasticsearch-connector/src/configuration/tests.rs
// ============================================================================
// Module: Configuration Resolver Tests
// Description: Unit tests for accessor defaults and backoff bundling.
// Purpose: Pin default values and the retry policy assembly rules.
// Dependencies: connector-options, elasticsearch-connector
// ============================================================================

//! ## Overview
//! Covers accessor defaults against a minimal store and the conditions under
//! which a backoff policy is produced.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use connector_options::Configuration;

use super::ElasticsearchConfiguration;
use crate::error::ValidationError;
use crate::policy::BackoffPolicy;
use crate::policy::DeliveryGuarantee;
use crate::policy::FlushBackoffType;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Store with only the required options.
fn minimal() -> Configuration {
    Configuration::new().with("hosts", "http://localhost:9200").with("index", "orders")
}

// ============================================================================
// SECTION: Default Tests
// ============================================================================

#[test]
fn defaults_apply_when_unset() {
    let store = minimal();
    let config = ElasticsearchConfiguration::new(&store);
    assert_eq!(config.bulk_flush_max_actions().unwrap(), 1000);
    assert_eq!(config.bulk_flush_max_byte_size().unwrap(), 2 * 1024 * 1024);
    assert_eq!(config.bulk_flush_interval().unwrap(), 1000);
    assert_eq!(config.delivery_guarantee().unwrap(), DeliveryGuarantee::AtLeastOnce);
    assert_eq!(config.key_delimiter().unwrap(), "_");
    assert_eq!(config.format().unwrap(), "json");
}

#[test]
fn optional_accessors_are_absent_when_unset() {
    let store = minimal();
    let config = ElasticsearchConfiguration::new(&store);
    assert_eq!(config.username().unwrap(), None);
    assert_eq!(config.password().unwrap(), None);
    assert_eq!(config.path_prefix().unwrap(), None);
    assert_eq!(config.bulk_flush_backoff_type().unwrap(), None);
    assert_eq!(config.bulk_flush_backoff_retries().unwrap(), None);
    assert_eq!(config.bulk_flush_backoff_delay().unwrap(), None);
    assert_eq!(config.connection_request_timeout().unwrap(), None);
    assert_eq!(config.connection_timeout().unwrap(), None);
    assert_eq!(config.socket_timeout().unwrap(), None);
    assert_eq!(config.sink_parallelism().unwrap(), None);
}

#[test]
fn resolver_is_copy() {
    let store = minimal();
    let config = ElasticsearchConfiguration::new(&store);
    let copy = config;
    assert_eq!(config.index().unwrap(), copy.index().unwrap());
}

// ============================================================================
// SECTION: Backoff Tests
// ============================================================================

#[test]
fn backoff_absent_without_strategy() {
    let store = minimal().with("sink.bulk-flush.backoff.max-retries", 3_i64);
    let config = ElasticsearchConfiguration::new(&store);
    assert_eq!(config.bulk_flush_backoff().unwrap(), None);
}

#[test]
fn backoff_absent_for_none_strategy() {
    let store = minimal().with("sink.bulk-flush.backoff.strategy", "none");
    let config = ElasticsearchConfiguration::new(&store);
    assert_eq!(config.bulk_flush_backoff().unwrap(), None);
}

#[test]
fn backoff_bundles_strategy_retries_and_delay() {
    let store = minimal()
        .with("sink.bulk-flush.backoff.strategy", "CONSTANT")
        .with("sink.bulk-flush.backoff.max-retries", 5_i64)
        .with("sink.bulk-flush.backoff.delay", "50ms");
    let config = ElasticsearchConfiguration::new(&store);
    assert_eq!(
        config.bulk_flush_backoff().unwrap(),
        Some(BackoffPolicy {
            strategy: FlushBackoffType::Constant,
            max_retries: 5,
            delay_ms: 50,
        })
    );
}

#[test]
fn retrying_strategy_without_delay_is_rejected() {
    let store = minimal()
        .with("sink.bulk-flush.backoff.strategy", "exponential")
        .with("sink.bulk-flush.backoff.max-retries", 5_i64);
    let config = ElasticsearchConfiguration::new(&store);
    let err = config.bulk_flush_backoff().unwrap_err();
    assert_eq!(
        err,
        ValidationError::Invalid(
            "'sink.bulk-flush.backoff.max-retries' and 'sink.bulk-flush.backoff.delay' must be \
             set when 'sink.bulk-flush.backoff.strategy' is 'exponential'"
                .to_string()
        )
    );
}
