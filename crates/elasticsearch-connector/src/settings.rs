// crates/elasticsearch-connector/src/settings.rs
// ============================================================================
// Module: Resolved Sink Settings
// Description: Fully resolved, validated connector settings.
// Purpose: Hand the sink client one value instead of a store reference.
// Dependencies: serde, crate::endpoint, crate::policy
// ============================================================================

//! ## Overview
//! [`SinkSettings`] is produced by
//! [`ElasticsearchConfiguration::resolve`](crate::ElasticsearchConfiguration::resolve)
//! after validation succeeds. Sizes are bytes and durations are milliseconds.
//! The password is never serialized and is redacted from debug output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::policy::BackoffPolicy;
use crate::policy::DeliveryGuarantee;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Bulk flush thresholds and retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkFlushSettings {
    /// Maximum buffered actions; `-1` disables the threshold.
    pub max_actions: i32,
    /// Maximum buffered bytes; `0` disables the threshold.
    pub max_size_bytes: u64,
    /// Flush interval in milliseconds.
    pub interval_ms: u64,
    /// Retry policy, absent when retries are disabled.
    pub backoff: Option<BackoffPolicy>,
}

/// Client connection timeouts in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionSettings {
    /// Timeout for leasing a pooled connection.
    pub request_timeout_ms: Option<u64>,
    /// Timeout for establishing a connection.
    pub connect_timeout_ms: Option<u64>,
    /// Socket inactivity timeout.
    pub socket_timeout_ms: Option<u64>,
    /// Path prepended to every request.
    pub path_prefix: Option<String>,
}

/// Validated connector settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SinkSettings {
    /// Cluster nodes in failover preference order.
    pub hosts: Vec<Endpoint>,
    /// Target index.
    pub index: String,
    /// Composite document id delimiter.
    pub key_delimiter: String,
    /// Basic-auth username.
    pub username: Option<String>,
    /// Basic-auth password.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Delivery semantics.
    pub delivery_guarantee: DeliveryGuarantee,
    /// Bulk flush settings.
    pub bulk_flush: BulkFlushSettings,
    /// Connection settings.
    pub connection: ConnectionSettings,
    /// Document serialization format.
    pub format: String,
    /// Sink parallelism override.
    pub parallelism: Option<i32>,
}

impl SinkSettings {
    /// Returns basic-auth credentials when both parts are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

impl fmt::Debug for SinkSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkSettings")
            .field("hosts", &self.hosts)
            .field("index", &self.index)
            .field("key_delimiter", &self.key_delimiter)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("delivery_guarantee", &self.delivery_guarantee)
            .field("bulk_flush", &self.bulk_flush)
            .field("connection", &self.connection)
            .field("format", &self.format)
            .field("parallelism", &self.parallelism)
            .finish()
    }
}
