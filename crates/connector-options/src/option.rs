// crates/connector-options/src/option.rs
// ============================================================================
// Module: Option Descriptors
// Description: Typed descriptors naming one recognized configuration key.
// Purpose: Bind a key, its type, default, and fallback keys in one constant.
// Dependencies: serde, crate::value, crate::error
// ============================================================================

//! ## Overview
//! A [`ConfigOption`] is a `const`-constructible descriptor. Defaults are
//! stored as raw text and parsed with the same rules as operator input, so a
//! default can never bypass validation. [`OptionDescriptor`] is the
//! type-erased view used by registries and generated docs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::error::ConfigError;
use crate::value::OptionKind;
use crate::value::OptionValue;
use crate::value::RawValue;

// ============================================================================
// SECTION: Typed Descriptor
// ============================================================================

/// Descriptor for one configuration key holding a value of type `T`.
pub struct ConfigOption<T> {
    /// Primary key.
    key: &'static str,
    /// Keys consulted, in order, when the primary key is unset.
    fallback_keys: &'static [&'static str],
    /// Default written as raw option text.
    default: Option<&'static str>,
    /// Operator-facing description.
    description: &'static str,
    /// Value type marker.
    marker: PhantomData<fn() -> T>,
}

impl<T> ConfigOption<T> {
    /// Creates a descriptor with no default.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            fallback_keys: &[],
            default: None,
            description: "",
            marker: PhantomData,
        }
    }

    /// Sets the default, written exactly as an operator would write it.
    #[must_use]
    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Sets keys consulted when the primary key is unset.
    #[must_use]
    pub const fn with_fallback_keys(self, fallback_keys: &'static [&'static str]) -> Self {
        Self {
            fallback_keys,
            ..self
        }
    }

    /// Sets the operator-facing description.
    #[must_use]
    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    /// Returns the primary key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the fallback keys.
    #[must_use]
    pub const fn fallback_keys(&self) -> &'static [&'static str] {
        self.fallback_keys
    }

    /// Returns the raw default text.
    #[must_use]
    pub const fn default_text(&self) -> Option<&'static str> {
        self.default
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Returns true when the option carries a default.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

impl<T: OptionValue> ConfigOption<T> {
    /// Converts a stored value under this option's key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value does not parse.
    pub fn parse(&self, raw: &RawValue) -> Result<T, ConfigError> {
        self.parse_under(self.key, raw)
    }

    /// Converts a stored value found under `key` (primary or fallback).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value does not parse.
    pub fn parse_under(&self, key: &str, raw: &RawValue) -> Result<T, ConfigError> {
        T::from_raw(raw).map_err(|reason| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            kind: T::KIND,
            reason,
        })
    }

    /// Parses the default, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the default text does not
    /// parse as `T`.
    pub fn default_value(&self) -> Result<Option<T>, ConfigError> {
        self.default.map(|text| self.parse(&RawValue::from(text))).transpose()
    }

    /// Returns the type-erased descriptor.
    #[must_use]
    pub const fn descriptor(&self, required: bool) -> OptionDescriptor {
        OptionDescriptor {
            key: self.key,
            kind: T::KIND,
            required,
            default: self.default,
            fallback_keys: self.fallback_keys,
            description: self.description,
        }
    }
}

impl<T> Clone for ConfigOption<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConfigOption<T> {}

impl<T> fmt::Debug for ConfigOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOption")
            .field("key", &self.key)
            .field("fallback_keys", &self.fallback_keys)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Type-Erased Descriptor
// ============================================================================

/// Type-erased option metadata for registries and docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    /// Primary key.
    pub key: &'static str,
    /// Semantic type.
    pub kind: OptionKind,
    /// Whether the connector requires the option.
    pub required: bool,
    /// Raw default text.
    pub default: Option<&'static str>,
    /// Fallback keys.
    pub fallback_keys: &'static [&'static str],
    /// Operator-facing description.
    pub description: &'static str,
}

impl OptionDescriptor {
    /// Returns true when `key` names this option directly or via fallback.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.key == key || self.fallback_keys.contains(&key)
    }
}
