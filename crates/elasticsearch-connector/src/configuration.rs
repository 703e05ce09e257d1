// crates/elasticsearch-connector/src/configuration.rs
// ============================================================================
// Module: Elasticsearch Configuration Resolver
// Description: Typed accessors over a borrowed option store.
// Purpose: Resolve every connector setting and enforce cross-option rules.
// Dependencies: connector-options, tracing, crate::{endpoint, options, policy}
// ============================================================================

//! ## Overview
//! [`ElasticsearchConfiguration`] borrows a [`ReadableConfig`] store and
//! answers each connector setting on demand. Accessors never cache: every
//! call reads the store again, so two calls against the same store agree.
//!
//! Required options without defaults report [`ConfigError::MissingOption`].
//! Optional options resolve to `None` when unset. Sizes are returned in
//! bytes and durations in milliseconds, matching the sink client's units.
//!
//! [`ElasticsearchConfiguration::validate`] layers the connector's
//! cross-option rules on top of per-option parsing, and
//! [`ElasticsearchConfiguration::resolve`] produces a [`SinkSettings`] value
//! once validation passes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use connector_options::ConfigError;
use connector_options::MemorySize;
use connector_options::ReadableConfig;
use connector_options::duration_to_millis;
use tracing::debug;
use tracing::warn;

use crate::endpoint::Endpoint;
use crate::endpoint::parse_endpoint;
use crate::error::ValidationError;
use crate::options::BULK_FLUSH_BACKOFF_DELAY_OPTION;
use crate::options::BULK_FLUSH_BACKOFF_MAX_RETRIES_OPTION;
use crate::options::BULK_FLUSH_BACKOFF_TYPE_OPTION;
use crate::options::BULK_FLUSH_INTERVAL_OPTION;
use crate::options::BULK_FLUSH_MAX_ACTIONS_OPTION;
use crate::options::BULK_FLUSH_MAX_SIZE_OPTION;
use crate::options::CONNECTION_PATH_PREFIX_OPTION;
use crate::options::CONNECTION_REQUEST_TIMEOUT_OPTION;
use crate::options::CONNECTION_TIMEOUT_OPTION;
use crate::options::DELIVERY_GUARANTEE_OPTION;
use crate::options::FORMAT_OPTION;
use crate::options::HOSTS_OPTION;
use crate::options::INDEX_OPTION;
use crate::options::KEY_DELIMITER_OPTION;
use crate::options::PASSWORD_OPTION;
use crate::options::SINK_PARALLELISM_OPTION;
use crate::options::SOCKET_TIMEOUT_OPTION;
use crate::options::USERNAME_OPTION;
use crate::options::all_options;
use crate::policy::BackoffPolicy;
use crate::policy::DeliveryGuarantee;
use crate::policy::FlushBackoffType;
use crate::settings::BulkFlushSettings;
use crate::settings::ConnectionSettings;
use crate::settings::SinkSettings;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Factory identifier used in unsupported-option reports.
pub const CONNECTOR_IDENTIFIER: &str = "elasticsearch-7";

/// Sentinel disabling the max-actions flush threshold.
const DISABLED_MAX_ACTIONS: i32 = -1;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Typed, read-only view of Elasticsearch connector options.
pub struct ElasticsearchConfiguration<'a, C: ReadableConfig + ?Sized> {
    /// Borrowed option store.
    config: &'a C,
}

impl<C: ReadableConfig + ?Sized> Clone for ElasticsearchConfiguration<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ReadableConfig + ?Sized> Copy for ElasticsearchConfiguration<'_, C> {}

impl<'a, C: ReadableConfig + ?Sized> ElasticsearchConfiguration<'a, C> {
    /// Wraps an option store.
    #[must_use]
    pub const fn new(config: &'a C) -> Self {
        Self {
            config,
        }
    }

    /// Returns the wrapped store.
    #[must_use]
    pub const fn config(&self) -> &'a C {
        self.config
    }

    // ------------------------------------------------------------------------
    // Bulk flush
    // ------------------------------------------------------------------------

    /// Maximum buffered actions per bulk request; `-1` disables the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not an
    /// integer in `i32` range.
    pub fn bulk_flush_max_actions(&self) -> Result<i32, ConfigError> {
        self.config.get(&BULK_FLUSH_MAX_ACTIONS_OPTION)
    }

    /// Maximum buffered bytes per bulk request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// memory size.
    pub fn bulk_flush_max_byte_size(&self) -> Result<u64, ConfigError> {
        self.config.get(&BULK_FLUSH_MAX_SIZE_OPTION).map(MemorySize::bytes)
    }

    /// Flush interval in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// duration.
    pub fn bulk_flush_interval(&self) -> Result<u64, ConfigError> {
        self.config.get(&BULK_FLUSH_INTERVAL_OPTION).map(duration_to_millis)
    }

    /// Retry strategy for failed bulk requests, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown strategy token.
    pub fn bulk_flush_backoff_type(&self) -> Result<Option<FlushBackoffType>, ConfigError> {
        self.config.get_optional(&BULK_FLUSH_BACKOFF_TYPE_OPTION)
    }

    /// Maximum retries for a failed bulk request, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not an
    /// integer in `i32` range.
    pub fn bulk_flush_backoff_retries(&self) -> Result<Option<i32>, ConfigError> {
        self.config.get_optional(&BULK_FLUSH_BACKOFF_MAX_RETRIES_OPTION)
    }

    /// Delay between retries in milliseconds, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// duration.
    pub fn bulk_flush_backoff_delay(&self) -> Result<Option<u64>, ConfigError> {
        Ok(self.config.get_optional(&BULK_FLUSH_BACKOFF_DELAY_OPTION)?.map(duration_to_millis))
    }

    /// Complete retry policy, or `None` when no retrying strategy is set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when a retrying strategy lacks
    /// its retry count or delay.
    pub fn bulk_flush_backoff(&self) -> Result<Option<BackoffPolicy>, ValidationError> {
        let Some(strategy) = self.bulk_flush_backoff_type()? else {
            return Ok(None);
        };
        if !strategy.retries() {
            return Ok(None);
        }
        match (self.bulk_flush_backoff_retries()?, self.bulk_flush_backoff_delay()?) {
            (Some(max_retries), Some(delay_ms)) => Ok(Some(BackoffPolicy {
                strategy,
                max_retries,
                delay_ms,
            })),
            _ => Err(ValidationError::Invalid(format!(
                "'{}' and '{}' must be set when '{}' is '{strategy}'",
                BULK_FLUSH_BACKOFF_MAX_RETRIES_OPTION.key(),
                BULK_FLUSH_BACKOFF_DELAY_OPTION.key(),
                BULK_FLUSH_BACKOFF_TYPE_OPTION.key(),
            ))),
        }
    }

    /// Delivery semantics for outgoing writes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown guarantee token.
    pub fn delivery_guarantee(&self) -> Result<DeliveryGuarantee, ConfigError> {
        self.config.get(&DELIVERY_GUARANTEE_OPTION)
    }

    /// Sink parallelism override, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not an
    /// integer in `i32` range.
    pub fn sink_parallelism(&self) -> Result<Option<i32>, ConfigError> {
        self.config.get_optional(&SINK_PARALLELISM_OPTION)
    }

    // ------------------------------------------------------------------------
    // Document
    // ------------------------------------------------------------------------

    /// Target index.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingOption`] when `index` is unset.
    pub fn index(&self) -> Result<String, ConfigError> {
        self.config.get(&INDEX_OPTION)
    }

    /// Delimiter for composite document ids.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// string.
    pub fn key_delimiter(&self) -> Result<String, ConfigError> {
        self.config.get(&KEY_DELIMITER_OPTION)
    }

    /// Document serialization format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// string.
    pub fn format(&self) -> Result<String, ConfigError> {
        self.config.get(&FORMAT_OPTION)
    }

    // ------------------------------------------------------------------------
    // Connection
    // ------------------------------------------------------------------------

    /// Basic-auth username, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// string.
    pub fn username(&self) -> Result<Option<String>, ConfigError> {
        self.config.get_optional(&USERNAME_OPTION)
    }

    /// Basic-auth password, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// string.
    pub fn password(&self) -> Result<Option<String>, ConfigError> {
        self.config.get_optional(&PASSWORD_OPTION)
    }

    /// Path prepended to every REST request, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// string.
    pub fn path_prefix(&self) -> Result<Option<String>, ConfigError> {
        self.config.get_optional(&CONNECTION_PATH_PREFIX_OPTION)
    }

    /// Connection pool lease timeout, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// duration.
    pub fn connection_request_timeout(&self) -> Result<Option<Duration>, ConfigError> {
        self.config.get_optional(&CONNECTION_REQUEST_TIMEOUT_OPTION)
    }

    /// Connection establishment timeout, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// duration.
    pub fn connection_timeout(&self) -> Result<Option<Duration>, ConfigError> {
        self.config.get_optional(&CONNECTION_TIMEOUT_OPTION)
    }

    /// Socket inactivity timeout, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the stored value is not a
    /// duration.
    pub fn socket_timeout(&self) -> Result<Option<Duration>, ConfigError> {
        self.config.get_optional(&SOCKET_TIMEOUT_OPTION)
    }

    /// Cluster nodes in configured order.
    ///
    /// Every entry must parse; the first invalid entry fails the whole list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Config`] when `hosts` is unset or not a
    /// string list, and [`ValidationError::Endpoint`] for the first invalid
    /// host.
    pub fn hosts(&self) -> Result<Vec<Endpoint>, ValidationError> {
        let hosts = self.config.get(&HOSTS_OPTION)?;
        let endpoints = hosts
            .iter()
            .map(|host| parse_endpoint(host, HOSTS_OPTION.key()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(endpoints)
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Checks the connector's cross-option rules.
    ///
    /// # Errors
    ///
    /// Returns the first failing option read or rule, in option order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.index()?.is_empty() {
            return Err(invalid(format!("'{}' must not be empty", INDEX_OPTION.key())));
        }
        if self.hosts()?.is_empty() {
            return Err(invalid(format!("'{}' must not be empty", HOSTS_OPTION.key())));
        }
        let max_actions = self.bulk_flush_max_actions()?;
        if max_actions != DISABLED_MAX_ACTIONS && max_actions < 1 {
            return Err(invalid(format!(
                "'{}' must be at least 1. Got: {max_actions}",
                BULK_FLUSH_MAX_ACTIONS_OPTION.key()
            )));
        }
        let max_size = self.config.get(&BULK_FLUSH_MAX_SIZE_OPTION)?;
        if max_size != MemorySize::ZERO && !max_size.is_whole_mebibytes() {
            return Err(invalid(format!(
                "'{}' must be in MB granularity. Got: {max_size}",
                BULK_FLUSH_MAX_SIZE_OPTION.key()
            )));
        }
        if let Some(retries) = self.bulk_flush_backoff_retries()?
            && retries < 1
        {
            return Err(invalid(format!(
                "'{}' must be at least 1. Got: {retries}",
                BULK_FLUSH_BACKOFF_MAX_RETRIES_OPTION.key()
            )));
        }
        self.bulk_flush_backoff()?;
        self.validate_credentials()?;
        if let Some(parallelism) = self.sink_parallelism()?
            && parallelism < 1
        {
            return Err(invalid(format!(
                "'{}' must be at least 1. Got: {parallelism}",
                SINK_PARALLELISM_OPTION.key()
            )));
        }
        Ok(())
    }

    /// Rejects keys the connector does not recognize.
    ///
    /// Keys prefixed with the configured format identifier, such as
    /// `json.fail-on-missing-field`, belong to the format and are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] listing unsupported and supported
    /// keys, or [`ValidationError::Config`] when `format` cannot be read.
    pub fn validate_unknown_keys(&self) -> Result<(), ValidationError> {
        let registry = all_options();
        let format_prefix = format!("{}.", self.format()?);
        let mut unsupported: Vec<&str> = self
            .config
            .keys()
            .into_iter()
            .filter(|key| !key.starts_with(&format_prefix))
            .filter(|key| !registry.iter().any(|descriptor| descriptor.matches(key)))
            .collect();
        if unsupported.is_empty() {
            return Ok(());
        }
        unsupported.sort_unstable();
        warn!(
            connector = CONNECTOR_IDENTIFIER,
            unsupported = %unsupported.join(", "),
            "rejected unsupported connector options"
        );
        let mut supported: Vec<&str> = registry.iter().map(|descriptor| descriptor.key).collect();
        supported.sort_unstable();
        Err(invalid(format!(
            "Unsupported options found for '{CONNECTOR_IDENTIFIER}'.\n\nUnsupported \
             options:\n\n{}\n\nSupported options:\n\n{}",
            unsupported.join("\n"),
            supported.join("\n"),
        )))
    }

    /// Validates, then resolves every setting into one value.
    ///
    /// # Errors
    ///
    /// Returns the first failure reported by [`Self::validate`] or by an
    /// accessor.
    pub fn resolve(&self) -> Result<SinkSettings, ValidationError> {
        self.validate()?;
        let settings = SinkSettings {
            hosts: self.hosts()?,
            index: self.index()?,
            key_delimiter: self.key_delimiter()?,
            username: self.username()?,
            password: self.password()?,
            delivery_guarantee: self.delivery_guarantee()?,
            bulk_flush: BulkFlushSettings {
                max_actions: self.bulk_flush_max_actions()?,
                max_size_bytes: self.bulk_flush_max_byte_size()?,
                interval_ms: self.bulk_flush_interval()?,
                backoff: self.bulk_flush_backoff()?,
            },
            connection: ConnectionSettings {
                request_timeout_ms: self.connection_request_timeout()?.map(duration_to_millis),
                connect_timeout_ms: self.connection_timeout()?.map(duration_to_millis),
                socket_timeout_ms: self.socket_timeout()?.map(duration_to_millis),
                path_prefix: self.path_prefix()?,
            },
            format: self.format()?,
            parallelism: self.sink_parallelism()?,
        };
        debug!(
            index = %settings.index,
            hosts = settings.hosts.len(),
            delivery_guarantee = %settings.delivery_guarantee,
            "resolved elasticsearch connector settings"
        );
        Ok(settings)
    }

    /// A non-blank username requires a non-blank password.
    fn validate_credentials(&self) -> Result<(), ValidationError> {
        let Some(username) = self.username()?.filter(|username| !username.trim().is_empty())
        else {
            return Ok(());
        };
        let password = self.password()?.unwrap_or_default();
        if password.trim().is_empty() {
            return Err(invalid(format!(
                "'{}' and '{}' must be set at the same time. Got: username '{username}' and \
                 password '{password}'",
                USERNAME_OPTION.key(),
                PASSWORD_OPTION.key(),
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a rule violation error.
const fn invalid(message: String) -> ValidationError {
    ValidationError::Invalid(message)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
