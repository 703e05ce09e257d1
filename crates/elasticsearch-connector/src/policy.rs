// crates/elasticsearch-connector/src/policy.rs
// ============================================================================
// Module: Delivery and Backoff Policies
// Description: Closed enums for delivery guarantee and flush backoff options.
// Purpose: Reject unknown policy tokens at the option layer.
// Dependencies: connector-options, serde
// ============================================================================

//! ## Overview
//! Policy options are closed enums. Tokens are matched case-insensitively
//! with `_` and `-` treated alike, so `AT_LEAST_ONCE` and `at-least-once`
//! both select [`DeliveryGuarantee::AtLeastOnce`]. These values are consumed
//! by the sink client; nothing here executes retries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use connector_options::OptionKind;
use connector_options::OptionValue;
use connector_options::RawValue;
use connector_options::enum_from_raw;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Delivery Guarantee
// ============================================================================

/// Delivery semantics for outgoing writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryGuarantee {
    /// Records are written exactly once.
    ExactlyOnce,
    /// Records are written at least once; duplicates are possible.
    #[default]
    AtLeastOnce,
    /// No guarantee; records may be lost.
    None,
}

impl DeliveryGuarantee {
    /// Accepted option tokens.
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("exactly-once", Self::ExactlyOnce),
        ("at-least-once", Self::AtLeastOnce),
        ("none", Self::None),
    ];

    /// Returns the canonical option token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactlyOnce => "exactly-once",
            Self::AtLeastOnce => "at-least-once",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DeliveryGuarantee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OptionValue for DeliveryGuarantee {
    const KIND: OptionKind = OptionKind::Enum;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        enum_from_raw(raw, Self::TOKENS)
    }
}

// ============================================================================
// SECTION: Flush Backoff
// ============================================================================

/// Delay strategy between retries of a failed bulk flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushBackoffType {
    /// Same delay before every retry.
    Constant,
    /// Delay doubles with each retry.
    Exponential,
    /// Retries disabled.
    None,
}

impl FlushBackoffType {
    /// Accepted option tokens.
    const TOKENS: &'static [(&'static str, Self)] = &[
        ("constant", Self::Constant),
        ("exponential", Self::Exponential),
        ("none", Self::None),
    ];

    /// Returns the canonical option token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Exponential => "exponential",
            Self::None => "none",
        }
    }

    /// Returns true when the strategy performs retries.
    #[must_use]
    pub const fn retries(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for FlushBackoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OptionValue for FlushBackoffType {
    const KIND: OptionKind = OptionKind::Enum;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        enum_from_raw(raw, Self::TOKENS)
    }
}

/// Complete retry policy handed to the sink client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackoffPolicy {
    /// Delay strategy.
    pub strategy: FlushBackoffType,
    /// Maximum retries per bulk request.
    pub max_retries: i32,
    /// Base delay in milliseconds.
    pub delay_ms: u64,
}
