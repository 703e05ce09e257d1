// crates/elasticsearch-connector/src/endpoint.rs
// ============================================================================
// Module: Endpoint Parsing
// Description: Strict parser for `scheme://host:port` host strings.
// Purpose: Reject incomplete host strings with the missing part named.
// Dependencies: serde, thiserror, url
// ============================================================================

//! ## Overview
//! A host string is first split syntactically into an optional scheme, a host,
//! and an optional port. Syntax failures are reported as malformed; a
//! syntactically valid string that lacks a port or a scheme is reported with
//! that component named. Checks run in that order, so `localhost` reports a
//! missing port before a missing scheme.
//!
//! Hosts are normalized by the `url` host parser: domains are lowercased and
//! IPv6 literals keep their brackets.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use url::Host;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator between scheme and authority.
const SCHEME_SEPARATOR: &str = "://";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Validated network address of one cluster node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    /// Lowercased URI scheme, e.g. `http`.
    scheme: String,
    /// Normalized host name or address literal.
    host: String,
    /// TCP port.
    port: u16,
}

impl Endpoint {
    /// Returns the scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Builds a URL for client construction.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when the scheme and host cannot form a URL.
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SCHEME_SEPARATOR}{}:{}", self.scheme, self.host, self.port)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Syntax failure underlying a malformed host string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointSyntaxError {
    /// The string is empty.
    #[error("host string is empty")]
    Empty,
    /// The string contains whitespace.
    #[error("host string contains whitespace")]
    Whitespace,
    /// The scheme contains characters outside `[A-Za-z0-9+.-]` or does not
    /// start with a letter.
    #[error("invalid scheme '{0}'")]
    InvalidScheme(String),
    /// The host part failed to parse.
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        /// Host text.
        host: String,
        /// Host parser failure.
        #[source]
        source: url::ParseError,
    },
    /// An IPv6 literal is missing its closing bracket.
    #[error("unterminated IPv6 literal")]
    UnterminatedIpv6,
    /// The port is not a number between 0 and 65535.
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    /// A path, query, or fragment follows the authority.
    #[error("unexpected path, query or fragment '{0}'")]
    UnexpectedPath(String),
}

/// Host string validation failure, naming the option it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// The host string is not syntactically valid.
    #[error(
        "Could not parse host '{host}' in option '{option}'. It should follow the format \
         'http://host_name:port'."
    )]
    Malformed {
        /// Original host string.
        host: String,
        /// Option key the host came from.
        option: String,
        /// Syntax failure.
        #[source]
        source: EndpointSyntaxError,
    },
    /// The host string has no port.
    #[error(
        "Could not parse host '{host}' in option '{option}'. It should follow the format \
         'http://host_name:port'. Missing port."
    )]
    MissingPort {
        /// Original host string.
        host: String,
        /// Option key the host came from.
        option: String,
    },
    /// The host string has no scheme.
    #[error(
        "Could not parse host '{host}' in option '{option}'. It should follow the format \
         'http://host_name:port'. Missing scheme."
    )]
    MissingScheme {
        /// Original host string.
        host: String,
        /// Option key the host came from.
        option: String,
    },
}

impl EndpointError {
    /// Returns the original host string.
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::Malformed {
                host, ..
            }
            | Self::MissingPort {
                host, ..
            }
            | Self::MissingScheme {
                host, ..
            } => host,
        }
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses one host string read from `option`.
///
/// # Errors
///
/// Returns [`EndpointError::Malformed`] for syntax errors,
/// [`EndpointError::MissingPort`] when no port is present, and
/// [`EndpointError::MissingScheme`] when no scheme is present.
pub fn parse_endpoint(raw: &str, option: &str) -> Result<Endpoint, EndpointError> {
    let parts = split_endpoint(raw).map_err(|source| EndpointError::Malformed {
        host: raw.to_string(),
        option: option.to_string(),
        source,
    })?;
    let Some(port) = parts.port else {
        return Err(EndpointError::MissingPort {
            host: raw.to_string(),
            option: option.to_string(),
        });
    };
    let Some(scheme) = parts.scheme else {
        return Err(EndpointError::MissingScheme {
            host: raw.to_string(),
            option: option.to_string(),
        });
    };
    Ok(Endpoint {
        scheme,
        host: parts.host,
        port,
    })
}

/// Syntactic components of a host string.
struct EndpointParts {
    /// Lowercased scheme, absent when none was written.
    scheme: Option<String>,
    /// Normalized host.
    host: String,
    /// Port, absent when none was written.
    port: Option<u16>,
}

/// Splits a host string into components without judging completeness.
fn split_endpoint(raw: &str) -> Result<EndpointParts, EndpointSyntaxError> {
    if raw.is_empty() {
        return Err(EndpointSyntaxError::Empty);
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(EndpointSyntaxError::Whitespace);
    }
    let (scheme, authority) = match raw.split_once(SCHEME_SEPARATOR) {
        Some((scheme, authority)) => (parse_scheme(scheme)?, authority),
        None => (None, raw),
    };
    if let Some(index) = authority.find(['/', '?', '#']) {
        return Err(EndpointSyntaxError::UnexpectedPath(authority[index..].to_string()));
    }
    let (host_text, port_text) = split_authority(authority)?;
    let host = Host::parse(host_text).map_err(|source| EndpointSyntaxError::InvalidHost {
        host: host_text.to_string(),
        source,
    })?;
    let port = port_text.map(parse_port).transpose()?;
    Ok(EndpointParts {
        scheme,
        host: host.to_string(),
        port,
    })
}

/// Validates and lowercases a scheme; an empty scheme counts as absent.
fn parse_scheme(scheme: &str) -> Result<Option<String>, EndpointSyntaxError> {
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return Ok(None);
    };
    let valid = first.is_ascii_alphabetic()
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));
    if !valid {
        return Err(EndpointSyntaxError::InvalidScheme(scheme.to_string()));
    }
    Ok(Some(scheme.to_ascii_lowercase()))
}

/// Splits an authority into host text and optional port text.
fn split_authority(authority: &str) -> Result<(&str, Option<&str>), EndpointSyntaxError> {
    if authority.starts_with('[') {
        let end = authority.find(']').ok_or(EndpointSyntaxError::UnterminatedIpv6)?;
        let (host, rest) = authority.split_at(end + 1);
        if rest.is_empty() {
            return Ok((host, None));
        }
        return rest
            .strip_prefix(':')
            .map(|port| (host, Some(port)))
            .ok_or_else(|| EndpointSyntaxError::InvalidPort(rest.to_string()));
    }
    Ok(match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    })
}

/// Parses a decimal port number.
fn parse_port(text: &str) -> Result<u16, EndpointSyntaxError> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(EndpointSyntaxError::InvalidPort(text.to_string()));
    }
    text.parse().map_err(|_| EndpointSyntaxError::InvalidPort(text.to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
