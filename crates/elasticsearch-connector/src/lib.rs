// crates/elasticsearch-connector/src/lib.rs
// ============================================================================
// Module: Elasticsearch Connector Library
// Description: Option registry and configuration resolution for an
//              Elasticsearch 7 sink.
// Purpose: Turn a raw option store into validated sink settings.
// Dependencies: connector-options, serde, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! The connector declares its options in [`options`], parses host strings in
//! [`endpoint`], and resolves everything through
//! [`ElasticsearchConfiguration`], which borrows any
//! [`connector_options::ReadableConfig`] store.
//!
//! ```no_run
//! use connector_options::Configuration;
//! use elasticsearch_connector::ElasticsearchConfiguration;
//!
//! let store = Configuration::new()
//!     .with("hosts", "http://localhost:9200")
//!     .with("index", "orders");
//! let settings = ElasticsearchConfiguration::new(&store).resolve();
//! assert!(settings.is_ok());
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod configuration;
pub mod docs;
pub mod endpoint;
pub mod error;
pub mod examples;
pub mod options;
pub mod policy;
pub mod settings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use configuration::CONNECTOR_IDENTIFIER;
pub use configuration::ElasticsearchConfiguration;
pub use docs::DocsError;
pub use docs::options_markdown;
pub use docs::verify_options_docs;
pub use docs::write_options_docs;
pub use endpoint::Endpoint;
pub use endpoint::EndpointError;
pub use endpoint::EndpointSyntaxError;
pub use endpoint::parse_endpoint;
pub use error::ValidationError;
pub use examples::example_toml;
pub use options::all_options;
pub use options::optional_options;
pub use options::required_options;
pub use policy::BackoffPolicy;
pub use policy::DeliveryGuarantee;
pub use policy::FlushBackoffType;
pub use settings::BulkFlushSettings;
pub use settings::ConnectionSettings;
pub use settings::SinkSettings;
