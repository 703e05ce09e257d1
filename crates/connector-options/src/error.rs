// crates/connector-options/src/error.rs
// ============================================================================
// Module: Connector Option Errors
// Description: Error taxonomy for option lookup, parsing, and loading.
// Purpose: Surface precise, operator-facing messages for bad configuration.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure raised by the option store carries the offending key and,
//! where applicable, the raw value and the expected type so the message can
//! be shown to an operator verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::value::OptionKind;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Option store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// A required option has neither a value nor a default.
    #[error("missing required option '{key}'")]
    MissingOption {
        /// Key of the missing option.
        key: String,
    },
    /// A stored value could not be converted to the option type.
    #[error("could not parse value '{value}' for option '{key}' as {kind}: {reason}")]
    InvalidValue {
        /// Key of the offending option.
        key: String,
        /// Raw value as written by the operator.
        value: String,
        /// Expected option type.
        kind: OptionKind,
        /// Parser failure detail.
        reason: String,
    },
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}
