// crates/connector-options/src/lib.rs
// ============================================================================
// Module: Connector Options Library
// Description: Typed option descriptors over a raw key/value store.
// Purpose: Single place where connector option types and defaults are parsed.
// Dependencies: byte-unit, humantime, serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! `connector-options` turns loosely-typed key/value configuration into typed
//! values. Connectors declare [`ConfigOption`] constants and resolve them
//! through the [`ReadableConfig`] capability; [`Configuration`] is the
//! in-memory store, loadable from TOML.
//!
//! Unit conversion lives here: duration expressions (`10s`) and size
//! expressions (`5mb`) are parsed once, with the same rules for operator
//! input and declared defaults.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod duration;
pub mod error;
pub mod memory_size;
pub mod option;
pub mod store;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use duration::duration_to_millis;
pub use duration::parse_duration;
pub use error::ConfigError;
pub use memory_size::MemorySize;
pub use option::ConfigOption;
pub use option::OptionDescriptor;
pub use store::Configuration;
pub use store::ReadableConfig;
pub use value::LIST_SEPARATOR;
pub use value::OptionKind;
pub use value::OptionValue;
pub use value::RawValue;
pub use value::enum_from_raw;
