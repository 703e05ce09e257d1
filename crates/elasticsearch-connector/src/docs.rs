// crates/elasticsearch-connector/src/docs.rs
// ============================================================================
// Module: Connector Options Docs Generator
// Description: Markdown reference for Elasticsearch connector options.
// Purpose: Keep option docs in sync with the option registry.
// Dependencies: thiserror, std, crate::options
// ============================================================================

//! ## Overview
//! Renders the option registry as a markdown table. Output is deterministic:
//! required options come first, then optional options in registry order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use connector_options::OptionDescriptor;
use thiserror::Error;

use crate::options::optional_options;
use crate::options::required_options;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated option docs.
const DOCS_PATH: &str = "Docs/connectors/elasticsearch.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when writing or verifying option docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while reading or writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the connector options markdown reference.
#[must_use]
pub fn options_markdown() -> String {
    let mut out = String::new();
    out.push_str("# Elasticsearch Connector Options\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("Options configure an Elasticsearch 7 sink. Durations accept `500ms`, `10s`\n");
    out.push_str("or a bare millisecond count. Memory sizes use binary units, so `2mb` is\n");
    out.push_str("2097152 bytes. String lists accept an array or a `;`-separated string.\n\n");
    out.push_str("| Option | Type | Required | Default | Description |\n");
    out.push_str("| --- | --- | --- | --- | --- |\n");
    for descriptor in required_options().iter().chain(optional_options().iter()) {
        out.push_str(&render_row(descriptor));
    }
    out
}

/// Writes the generated docs to `path` or the standard location.
///
/// # Errors
///
/// Returns [`DocsError::Io`] when file output fails.
pub fn write_options_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    fs::write(path, options_markdown().as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError::Io`] when the file cannot be read and
/// [`DocsError::Drift`] when its content differs.
pub fn verify_options_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != options_markdown() {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders one table row.
fn render_row(descriptor: &OptionDescriptor) -> String {
    let required = if descriptor.required { "yes" } else { "no" };
    let default = descriptor.default.map_or_else(|| "n/a".to_string(), |text| format!("`{text}`"));
    format!(
        "| `{}` | {} | {required} | {default} | {} |\n",
        descriptor.key,
        descriptor.kind.as_str(),
        escape_cell(descriptor.description),
    )
}

/// Escapes pipe characters inside a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
