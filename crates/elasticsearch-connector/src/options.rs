// crates/elasticsearch-connector/src/options.rs
// ============================================================================
// Module: Elasticsearch Connector Options
// Description: Registry of option descriptors recognized by the connector.
// Purpose: One constant per key with its type, default, and description.
// Dependencies: connector-options, crate::policy
// ============================================================================

//! ## Overview
//! Keys follow the dotted naming used in connector table definitions, for
//! example `sink.bulk-flush.max-actions`. Options with a default resolve to
//! that default when unset; the remaining options are either required
//! (`hosts`, `index`) or optional and resolve to absent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use connector_options::ConfigOption;
use connector_options::MemorySize;
use connector_options::OptionDescriptor;

use crate::policy::DeliveryGuarantee;
use crate::policy::FlushBackoffType;

// ============================================================================
// SECTION: Connection Options
// ============================================================================

/// Elasticsearch hosts to connect to, in failover preference order.
pub const HOSTS_OPTION: ConfigOption<Vec<String>> = ConfigOption::new("hosts")
    .with_description("One or more Elasticsearch hosts to connect to, as 'http://host_name:port'.");

/// Index that documents are written to.
pub const INDEX_OPTION: ConfigOption<String> = ConfigOption::new("index")
    .with_description("Elasticsearch index for every record.");

/// Username for basic authentication.
pub const USERNAME_OPTION: ConfigOption<String> = ConfigOption::new("username")
    .with_description("Username used to connect to the Elasticsearch instance.");

/// Password for basic authentication.
pub const PASSWORD_OPTION: ConfigOption<String> = ConfigOption::new("password")
    .with_description("Password used to connect to the Elasticsearch instance.");

/// Path prepended to every REST request.
pub const CONNECTION_PATH_PREFIX_OPTION: ConfigOption<String> = ConfigOption::new(
    "connection.path-prefix",
)
.with_description("Prefix string added to every REST communication, for example '/v1'.");

/// Timeout for leasing a connection from the client pool.
pub const CONNECTION_REQUEST_TIMEOUT_OPTION: ConfigOption<Duration> =
    ConfigOption::new("connection.request-timeout")
        .with_description("Timeout for requesting a connection from the connection manager.");

/// Timeout for establishing a connection.
pub const CONNECTION_TIMEOUT_OPTION: ConfigOption<Duration> = ConfigOption::new(
    "connection.timeout",
)
.with_description("Timeout for establishing a connection.");

/// Socket read timeout.
pub const SOCKET_TIMEOUT_OPTION: ConfigOption<Duration> = ConfigOption::new("socket.timeout")
    .with_description("Maximum period of inactivity between two consecutive data packets.");

// ============================================================================
// SECTION: Document Options
// ============================================================================

/// Delimiter joining composite primary key fields into a document id.
pub const KEY_DELIMITER_OPTION: ConfigOption<String> =
    ConfigOption::new("document-id.key-delimiter")
        .with_default("_")
        .with_description("Delimiter for composite keys, e.g. '$' would result in 'KEY1$KEY2$KEY3'.");

/// Serialization format of document bodies.
pub const FORMAT_OPTION: ConfigOption<String> = ConfigOption::new("format")
    .with_default("json")
    .with_description("Format used to serialize records into documents.");

// ============================================================================
// SECTION: Sink Options
// ============================================================================

/// Maximum buffered actions per bulk request.
pub const BULK_FLUSH_MAX_ACTIONS_OPTION: ConfigOption<i32> =
    ConfigOption::new("sink.bulk-flush.max-actions")
        .with_default("1000")
        .with_description("Maximum number of buffered actions per bulk request; -1 disables.");

/// Maximum buffered bytes per bulk request.
pub const BULK_FLUSH_MAX_SIZE_OPTION: ConfigOption<MemorySize> =
    ConfigOption::new("sink.bulk-flush.max-size")
        .with_default("2mb")
        .with_description("Maximum size in memory of buffered actions per bulk request; 0 disables.");

/// Interval between scheduled bulk flushes.
pub const BULK_FLUSH_INTERVAL_OPTION: ConfigOption<Duration> =
    ConfigOption::new("sink.bulk-flush.interval")
        .with_default("1s")
        .with_description("Interval at which buffered actions are flushed.");

/// Retry delay strategy for failed bulk requests.
pub const BULK_FLUSH_BACKOFF_TYPE_OPTION: ConfigOption<FlushBackoffType> =
    ConfigOption::new("sink.bulk-flush.backoff.strategy")
        .with_description("Retry strategy for failed bulk requests: constant, exponential or none.");

/// Maximum retries for a failed bulk request.
pub const BULK_FLUSH_BACKOFF_MAX_RETRIES_OPTION: ConfigOption<i32> =
    ConfigOption::new("sink.bulk-flush.backoff.max-retries")
        .with_description("Maximum number of retries for a failed bulk request.");

/// Delay between retries of a failed bulk request.
pub const BULK_FLUSH_BACKOFF_DELAY_OPTION: ConfigOption<Duration> =
    ConfigOption::new("sink.bulk-flush.backoff.delay")
        .with_description("Delay between retries; the base delay for exponential backoff.");

/// Delivery semantics for outgoing writes.
pub const DELIVERY_GUARANTEE_OPTION: ConfigOption<DeliveryGuarantee> =
    ConfigOption::new("sink.delivery-guarantee")
        .with_default("at-least-once")
        .with_description("Delivery guarantee: exactly-once, at-least-once or none.");

/// Parallelism of the sink writers.
pub const SINK_PARALLELISM_OPTION: ConfigOption<i32> = ConfigOption::new("sink.parallelism")
    .with_description("Parallelism of the sink; unset uses the upstream parallelism.");

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Returns descriptors for options the connector requires.
#[must_use]
pub fn required_options() -> Vec<OptionDescriptor> {
    vec![HOSTS_OPTION.descriptor(true), INDEX_OPTION.descriptor(true)]
}

/// Returns descriptors for options the connector accepts but does not require.
#[must_use]
pub fn optional_options() -> Vec<OptionDescriptor> {
    vec![
        KEY_DELIMITER_OPTION.descriptor(false),
        USERNAME_OPTION.descriptor(false),
        PASSWORD_OPTION.descriptor(false),
        BULK_FLUSH_MAX_ACTIONS_OPTION.descriptor(false),
        BULK_FLUSH_MAX_SIZE_OPTION.descriptor(false),
        BULK_FLUSH_INTERVAL_OPTION.descriptor(false),
        BULK_FLUSH_BACKOFF_TYPE_OPTION.descriptor(false),
        BULK_FLUSH_BACKOFF_MAX_RETRIES_OPTION.descriptor(false),
        BULK_FLUSH_BACKOFF_DELAY_OPTION.descriptor(false),
        CONNECTION_PATH_PREFIX_OPTION.descriptor(false),
        CONNECTION_REQUEST_TIMEOUT_OPTION.descriptor(false),
        CONNECTION_TIMEOUT_OPTION.descriptor(false),
        SOCKET_TIMEOUT_OPTION.descriptor(false),
        FORMAT_OPTION.descriptor(false),
        DELIVERY_GUARANTEE_OPTION.descriptor(false),
        SINK_PARALLELISM_OPTION.descriptor(false),
    ]
}

/// Returns every recognized option, required first.
#[must_use]
pub fn all_options() -> Vec<OptionDescriptor> {
    let mut options = required_options();
    options.extend(optional_options());
    options
}
