// crates/connector-options/src/store.rs
// ============================================================================
// Module: Option Store
// Description: Typed lookup capability and the in-memory option store.
// Purpose: Resolve descriptors against raw key/value entries.
// Dependencies: toml, tracing, crate::option, crate::value
// ============================================================================

//! ## Overview
//! [`ReadableConfig`] is the capability consumers depend on: implementors
//! only expose raw entries, and typed lookups (`get`, `get_optional`,
//! `get_or`) are provided on top. [`Configuration`] is the in-memory store,
//! loadable from TOML where nested tables flatten into dotted keys.
//!
//! Lookup semantics:
//! - `get` applies the descriptor default and fails when neither a value nor
//!   a default exists.
//! - `get_optional` ignores the default: unset means `None`.
//! - Fallback keys are consulted in order after the primary key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs;
use std::iter;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::option::ConfigOption;
use crate::value::OptionValue;
use crate::value::RawValue;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Separator joining nested TOML table names into option keys.
const KEY_SEPARATOR: char = '.';

// ============================================================================
// SECTION: Readable Capability
// ============================================================================

/// Read-only typed access to configuration entries.
pub trait ReadableConfig {
    /// Returns the raw value stored under `key`.
    fn raw(&self, key: &str) -> Option<&RawValue>;

    /// Returns every key present in the store.
    fn keys(&self) -> Vec<&str>;

    /// Finds the first stored value for the option, checking the primary key
    /// before fallback keys.
    fn find<T>(&self, option: &ConfigOption<T>) -> Option<(&'static str, &RawValue)> {
        iter::once(option.key())
            .chain(option.fallback_keys().iter().copied())
            .find_map(|key| self.raw(key).map(|raw| (key, raw)))
    }

    /// Returns true when the option has a stored value.
    fn contains<T>(&self, option: &ConfigOption<T>) -> bool {
        self.find(option).is_some()
    }

    /// Resolves a required option, applying the descriptor default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingOption`] when the option is unset and
    /// has no default, or [`ConfigError::InvalidValue`] when it fails to parse.
    fn get<T: OptionValue>(&self, option: &ConfigOption<T>) -> Result<T, ConfigError> {
        match self.find(option) {
            Some((key, raw)) => option.parse_under(key, raw),
            None => option.default_value()?.ok_or_else(|| ConfigError::MissingOption {
                key: option.key().to_string(),
            }),
        }
    }

    /// Resolves an optional option; unset yields `None` regardless of default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a stored value fails to parse.
    fn get_optional<T: OptionValue>(
        &self,
        option: &ConfigOption<T>,
    ) -> Result<Option<T>, ConfigError> {
        self.find(option).map(|(key, raw)| option.parse_under(key, raw)).transpose()
    }

    /// Resolves an option, substituting `fallback` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a stored value fails to parse.
    fn get_or<T: OptionValue>(&self, option: &ConfigOption<T>, fallback: T) -> Result<T, ConfigError> {
        Ok(self.get_optional(option)?.unwrap_or(fallback))
    }
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory option store keyed by option key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    /// Raw entries ordered by key.
    entries: BTreeMap<String, RawValue>,
}

impl Configuration {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, returning the previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the store with an additional entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.entries.remove(key)
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, RawValue> {
        self.entries.iter()
    }

    /// Parses TOML text; nested tables become dotted keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML and
    /// [`ConfigError::Invalid`] for duplicate keys or arrays of tables.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let mut entries = BTreeMap::new();
        flatten_table(None, table, &mut entries)?;
        Ok(Self {
            entries,
        })
    }

    /// Loads a TOML file with size, encoding, and path limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path is invalid, the file cannot be
    /// read, or its content is not valid option TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config = Self::from_toml_str(content)?;
        debug!(path = %path.display(), options = config.len(), "loaded connector options");
        Ok(config)
    }
}

impl ReadableConfig for Configuration {
    fn raw(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a RawValue);
    type IntoIter = btree_map::Iter<'a, String, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Flattens a TOML table into dotted option keys.
fn flatten_table(
    prefix: Option<&str>,
    table: toml::Table,
    entries: &mut BTreeMap<String, RawValue>,
) -> Result<(), ConfigError> {
    for (name, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{name}"),
            None => name,
        };
        if let toml::Value::Table(nested) = value {
            flatten_table(Some(&key), nested, entries)?;
            continue;
        }
        let raw = raw_from_toml(&key, value)?;
        if entries.contains_key(&key) {
            return Err(ConfigError::Invalid(format!("option '{key}' is defined more than once")));
        }
        entries.insert(key, raw);
    }
    Ok(())
}

/// Converts a non-table TOML value into a raw option value.
fn raw_from_toml(key: &str, value: toml::Value) -> Result<RawValue, ConfigError> {
    match value {
        toml::Value::String(text) => Ok(RawValue::String(text)),
        toml::Value::Integer(number) => Ok(RawValue::Integer(number)),
        toml::Value::Float(number) => Ok(RawValue::Float(number)),
        toml::Value::Boolean(flag) => Ok(RawValue::Boolean(flag)),
        toml::Value::Datetime(datetime) => Ok(RawValue::String(datetime.to_string())),
        toml::Value::Array(items) => items
            .into_iter()
            .map(|item| raw_from_toml(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(RawValue::List),
        toml::Value::Table(_) => {
            Err(ConfigError::Invalid(format!("option '{key}' must not contain tables")))
        }
    }
}

/// Validates a config path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
