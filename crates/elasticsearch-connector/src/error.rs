// crates/elasticsearch-connector/src/error.rs
// ============================================================================
// Module: Connector Validation Errors
// Description: User-facing errors raised while resolving connector options.
// Purpose: One error type for callers to surface verbatim to operators.
// Dependencies: connector-options, thiserror, crate::endpoint
// ============================================================================

//! ## Overview
//! [`ValidationError`] wraps option store failures, host parsing failures,
//! and cross-option rule violations. Messages are complete on their own; the
//! connector bootstrap is expected to print them unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use connector_options::ConfigError;
use thiserror::Error;

use crate::endpoint::EndpointError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Connector configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option could not be read or converted.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A host string is invalid.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    /// Options are individually valid but violate a connector rule.
    #[error("{0}")]
    Invalid(String),
}
