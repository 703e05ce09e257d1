// crates/elasticsearch-connector/src/endpoint/tests.rs
// ============================================================================
// Module: Endpoint Parsing Tests
// Description: Unit tests for host string splitting and classification.
// Purpose: Pin which failure each malformed or incomplete host reports.
// Dependencies: elasticsearch-connector
// ============================================================================

//! ## Overview
//! Validates the three-way classification (malformed, missing port, missing
//! scheme), the precedence between them, and host normalization.

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

use std::error::Error as _;

use super::EndpointError;
use super::EndpointSyntaxError;
use super::parse_endpoint;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Option key reported in errors.
const OPTION: &str = "hosts";

/// Returns the syntax failure behind a malformed host.
fn syntax_error(raw: &str) -> EndpointSyntaxError {
    match parse_endpoint(raw, OPTION).expect_err("expected malformed host") {
        EndpointError::Malformed {
            source, ..
        } => source,
        other => panic!("expected malformed host for '{raw}', got {other}"),
    }
}

// ============================================================================
// SECTION: Success Tests
// ============================================================================

#[test]
fn parses_complete_host() {
    let endpoint = parse_endpoint("http://localhost:9200", OPTION).unwrap();
    assert_eq!(endpoint.scheme(), "http");
    assert_eq!(endpoint.host(), "localhost");
    assert_eq!(endpoint.port(), 9200);
    assert_eq!(endpoint.to_string(), "http://localhost:9200");
}

#[test]
fn scheme_and_domain_are_lowercased() {
    let endpoint = parse_endpoint("HTTPS://Search.Example.COM:443", OPTION).unwrap();
    assert_eq!(endpoint.scheme(), "https");
    assert_eq!(endpoint.host(), "search.example.com");
    assert_eq!(endpoint.port(), 443);
}

#[test]
fn explicit_default_port_is_kept() {
    let endpoint = parse_endpoint("http://node:80", OPTION).unwrap();
    assert_eq!(endpoint.port(), 80);
}

#[test]
fn ipv4_and_ipv6_literals_parse() {
    let v4 = parse_endpoint("http://127.0.0.1:9200", OPTION).unwrap();
    assert_eq!(v4.host(), "127.0.0.1");
    let v6 = parse_endpoint("http://[::1]:9201", OPTION).unwrap();
    assert_eq!(v6.host(), "[::1]");
    assert_eq!(v6.port(), 9201);
}

#[test]
fn endpoint_builds_client_url() {
    let endpoint = parse_endpoint("https://es.internal:9243", OPTION).unwrap();
    let url = endpoint.to_url().unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("es.internal"));
    assert_eq!(url.port(), Some(9243));
}

// ============================================================================
// SECTION: Classification Tests
// ============================================================================

#[test]
fn missing_port_is_named() {
    let err = parse_endpoint("http://localhost", OPTION).unwrap_err();
    assert!(matches!(err, EndpointError::MissingPort { .. }));
    assert_eq!(
        err.to_string(),
        "Could not parse host 'http://localhost' in option 'hosts'. It should follow the format \
         'http://host_name:port'. Missing port."
    );
}

#[test]
fn missing_scheme_is_named() {
    let err = parse_endpoint("localhost:9200", OPTION).unwrap_err();
    assert!(matches!(err, EndpointError::MissingScheme { .. }));
    assert!(err.to_string().ends_with("Missing scheme."));
    assert_eq!(err.host(), "localhost:9200");
}

#[test]
fn empty_scheme_counts_as_missing() {
    let err = parse_endpoint("://localhost:9200", OPTION).unwrap_err();
    assert!(matches!(err, EndpointError::MissingScheme { .. }));
}

#[test]
fn missing_port_takes_precedence_over_missing_scheme() {
    let err = parse_endpoint("localhost", OPTION).unwrap_err();
    assert!(matches!(err, EndpointError::MissingPort { .. }));
}

#[test]
fn malformed_message_has_format_hint_and_cause() {
    let err = parse_endpoint("://:::", OPTION).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not parse host '://:::' in option 'hosts'. It should follow the format \
         'http://host_name:port'."
    );
    assert!(err.source().is_some());
}

// ============================================================================
// SECTION: Syntax Tests
// ============================================================================

#[test]
fn empty_string_is_malformed() {
    assert_eq!(syntax_error(""), EndpointSyntaxError::Empty);
}

#[test]
fn whitespace_is_malformed() {
    assert_eq!(syntax_error("http://local host:9200"), EndpointSyntaxError::Whitespace);
    assert_eq!(syntax_error(" http://localhost:9200"), EndpointSyntaxError::Whitespace);
}

#[test]
fn bad_scheme_is_malformed() {
    assert_eq!(
        syntax_error("9http://localhost:9200"),
        EndpointSyntaxError::InvalidScheme("9http".to_string())
    );
}

#[test]
fn bad_port_is_malformed() {
    assert_eq!(syntax_error("http://localhost:abc"), EndpointSyntaxError::InvalidPort("abc".into()));
    assert_eq!(syntax_error("http://localhost:"), EndpointSyntaxError::InvalidPort(String::new()));
    assert_eq!(
        syntax_error("http://localhost:70000"),
        EndpointSyntaxError::InvalidPort("70000".into())
    );
    assert_eq!(syntax_error("http://localhost:+80"), EndpointSyntaxError::InvalidPort("+80".into()));
}

#[test]
fn path_suffix_is_malformed() {
    assert_eq!(
        syntax_error("http://localhost:9200/es"),
        EndpointSyntaxError::UnexpectedPath("/es".to_string())
    );
}

#[test]
fn empty_host_is_malformed() {
    assert!(matches!(syntax_error("http://:9200"), EndpointSyntaxError::InvalidHost { .. }));
}

#[test]
fn credentials_in_host_are_malformed() {
    assert!(matches!(
        syntax_error("http://user@localhost:9200"),
        EndpointSyntaxError::InvalidHost { .. }
    ));
}

#[test]
fn unterminated_ipv6_is_malformed() {
    assert_eq!(syntax_error("http://[::1:9200"), EndpointSyntaxError::UnterminatedIpv6);
}
