//! Cross-field validation tests for elasticsearch-connector.
// crates/elasticsearch-connector/tests/cross_field_validation.rs
// =============================================================================
// Module: Cross-Field Validation Tests
// Description: Validate connector rules spanning one or more options.
// Purpose: Ensure each rule rejects with its operator-facing message.
// =============================================================================

use connector_options::Configuration;
use elasticsearch_connector::ElasticsearchConfiguration;
use elasticsearch_connector::ValidationError;

mod common;

type TestResult = Result<(), String>;

/// Runs connector validation against `store`.
fn validate(store: &Configuration) -> Result<(), ValidationError> {
    ElasticsearchConfiguration::new(store).validate()
}

// ============================================================================
// SECTION: Baseline
// ============================================================================

#[test]
fn minimal_store_is_valid() -> TestResult {
    validate(&common::minimal_store()).map_err(|err| err.to_string())
}

#[test]
fn empty_index_is_rejected() -> TestResult {
    let store = common::minimal_store().with("index", "");
    common::assert_invalid(validate(&store), "'index' must not be empty")
}

#[test]
fn missing_index_is_rejected() -> TestResult {
    let store = Configuration::new().with("hosts", "http://localhost:9200");
    common::assert_invalid(validate(&store), "missing required option 'index'")
}

#[test]
fn invalid_host_is_rejected() -> TestResult {
    let store = common::minimal_store().with("hosts", "http://localhost");
    common::assert_invalid(validate(&store), "Missing port.")
}

// ============================================================================
// SECTION: Bulk Flush
// ============================================================================

#[test]
fn zero_max_actions_is_rejected() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.max-actions", 0_i64);
    common::assert_invalid(
        validate(&store),
        "'sink.bulk-flush.max-actions' must be at least 1. Got: 0",
    )
}

#[test]
fn disabled_max_actions_is_accepted() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.max-actions", -1_i64);
    validate(&store).map_err(|err| err.to_string())
}

#[test]
fn sub_mebibyte_max_size_is_rejected() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.max-size", "512kb");
    common::assert_invalid(
        validate(&store),
        "'sink.bulk-flush.max-size' must be in MB granularity. Got: 512kb",
    )
}

#[test]
fn fractional_mebibyte_max_size_is_rejected() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.max-size", "1536kb");
    common::assert_invalid(validate(&store), "must be in MB granularity. Got: 1536kb")
}

#[test]
fn disabled_max_size_is_accepted() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.max-size", "0");
    validate(&store).map_err(|err| err.to_string())
}

#[test]
fn zero_backoff_retries_is_rejected() -> TestResult {
    let store = common::minimal_store()
        .with("sink.bulk-flush.backoff.strategy", "constant")
        .with("sink.bulk-flush.backoff.max-retries", 0_i64)
        .with("sink.bulk-flush.backoff.delay", "100ms");
    common::assert_invalid(
        validate(&store),
        "'sink.bulk-flush.backoff.max-retries' must be at least 1. Got: 0",
    )
}

#[test]
fn retrying_strategy_requires_retries() -> TestResult {
    let store = common::minimal_store()
        .with("sink.bulk-flush.backoff.strategy", "constant")
        .with("sink.bulk-flush.backoff.delay", "100ms");
    common::assert_invalid(validate(&store), "must be set when 'sink.bulk-flush.backoff.strategy'")
}

#[test]
fn none_strategy_needs_no_retry_settings() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.backoff.strategy", "none");
    validate(&store).map_err(|err| err.to_string())
}

// ============================================================================
// SECTION: Credentials
// ============================================================================

#[test]
fn username_without_password_is_rejected() -> TestResult {
    let store = common::minimal_store().with("username", "elastic");
    common::assert_invalid(
        validate(&store),
        "'username' and 'password' must be set at the same time. Got: username 'elastic' and \
         password ''",
    )
}

#[test]
fn blank_password_is_rejected() -> TestResult {
    let store = common::minimal_store().with("username", "elastic").with("password", "  ");
    common::assert_invalid(validate(&store), "must be set at the same time")
}

#[test]
fn blank_username_is_ignored() -> TestResult {
    let store = common::minimal_store().with("username", " ");
    validate(&store).map_err(|err| err.to_string())
}

#[test]
fn complete_credentials_are_accepted() -> TestResult {
    let store = common::minimal_store().with("username", "elastic").with("password", "s3cret");
    validate(&store).map_err(|err| err.to_string())
}

// ============================================================================
// SECTION: Parallelism
// ============================================================================

#[test]
fn zero_parallelism_is_rejected() -> TestResult {
    let store = common::minimal_store().with("sink.parallelism", 0_i64);
    common::assert_invalid(validate(&store), "'sink.parallelism' must be at least 1. Got: 0")
}

// ============================================================================
// SECTION: Unknown Keys
// ============================================================================

#[test]
fn unknown_keys_are_listed() -> TestResult {
    let store = common::minimal_store().with("sink.bulk-flush.max-action", 10_i64);
    let config = ElasticsearchConfiguration::new(&store);
    let result = config.validate_unknown_keys();
    common::assert_invalid(result.clone(), "Unsupported options found for 'elasticsearch-7'")?;
    common::assert_invalid(result.clone(), "Unsupported options:\n\nsink.bulk-flush.max-action\n")?;
    common::assert_invalid(result, "Supported options:\n\n")
}

#[test]
fn registered_keys_are_accepted() -> TestResult {
    let store = common::minimal_store()
        .with("username", "elastic")
        .with("password", "s3cret")
        .with("sink.bulk-flush.interval", "5s");
    ElasticsearchConfiguration::new(&store).validate_unknown_keys().map_err(|err| err.to_string())
}

#[test]
fn format_prefixed_keys_are_accepted() -> TestResult {
    let store = common::minimal_store().with("json.fail-on-missing-field", true);
    ElasticsearchConfiguration::new(&store).validate_unknown_keys().map_err(|err| err.to_string())
}
