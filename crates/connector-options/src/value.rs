// crates/connector-options/src/value.rs
// ============================================================================
// Module: Option Values
// Description: Raw stored values and their conversion into typed options.
// Purpose: Centralize coercion rules shared by every option type.
// Dependencies: serde, crate::duration, crate::memory_size
// ============================================================================

//! ## Overview
//! The store keeps loosely-typed [`RawValue`]s. Each option type implements
//! [`OptionValue`] to convert a raw value into its typed form. Conversions
//! are strict: a value of the wrong shape is rejected with a reason instead
//! of being replaced by a default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::duration::parse_duration;
use crate::memory_size::MemorySize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator for string lists written as a single string.
pub const LIST_SEPARATOR: char = ';';

// ============================================================================
// SECTION: Raw Values
// ============================================================================

/// Loosely-typed value as written by the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Text value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Ordered list of values.
    List(Vec<Self>),
}

impl RawValue {
    /// Returns a short label for the value shape, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{LIST_SEPARATOR}")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// SECTION: Option Kinds
// ============================================================================

/// Semantic type of an option, used in docs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Signed integer.
    Integer,
    /// `true` / `false`.
    Boolean,
    /// Free-form text.
    String,
    /// Ordered list of strings.
    StringList,
    /// Duration expression such as `10s`.
    Duration,
    /// Size expression such as `5mb`.
    MemorySize,
    /// One of a closed set of tokens.
    Enum,
}

impl OptionKind {
    /// Returns the human-readable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::StringList => "string list",
            Self::Duration => "duration",
            Self::MemorySize => "memory size",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Typed Conversion
// ============================================================================

/// Conversion from a stored [`RawValue`] into a typed option value.
pub trait OptionValue: Sized {
    /// Semantic type reported for this option value.
    const KIND: OptionKind;

    /// Converts a raw value.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the value has the wrong shape or
    /// cannot be parsed.
    fn from_raw(raw: &RawValue) -> Result<Self, String>;
}

impl OptionValue for i64 {
    const KIND: OptionKind = OptionKind::Integer;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        match raw {
            RawValue::Integer(value) => Ok(*value),
            RawValue::String(text) => {
                text.trim().parse().map_err(|_| format!("'{text}' is not an integer"))
            }
            other => Err(shape_mismatch(Self::KIND, other)),
        }
    }
}

impl OptionValue for i32 {
    const KIND: OptionKind = OptionKind::Integer;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        let wide = i64::from_raw(raw)?;
        Self::try_from(wide).map_err(|_| format!("{wide} is out of range for a 32-bit integer"))
    }
}

impl OptionValue for bool {
    const KIND: OptionKind = OptionKind::Boolean;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        match raw {
            RawValue::Boolean(value) => Ok(*value),
            RawValue::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(format!("'{text}' is not 'true' or 'false'")),
            },
            other => Err(shape_mismatch(Self::KIND, other)),
        }
    }
}

impl OptionValue for String {
    const KIND: OptionKind = OptionKind::String;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        match raw {
            RawValue::List(_) => Err(shape_mismatch(Self::KIND, raw)),
            scalar => Ok(scalar.to_string()),
        }
    }
}

impl OptionValue for Vec<String> {
    const KIND: OptionKind = OptionKind::StringList;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        match raw {
            RawValue::List(items) => items.iter().map(String::from_raw).collect(),
            RawValue::String(text) => {
                Ok(text.split(LIST_SEPARATOR).map(|item| item.trim().to_string()).collect())
            }
            other => Err(shape_mismatch(Self::KIND, other)),
        }
    }
}

impl OptionValue for Duration {
    const KIND: OptionKind = OptionKind::Duration;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        match raw {
            RawValue::String(text) => parse_duration(text),
            RawValue::Integer(millis) => u64::try_from(*millis)
                .map(Self::from_millis)
                .map_err(|_| format!("duration {millis} must not be negative")),
            other => Err(shape_mismatch(Self::KIND, other)),
        }
    }
}

impl OptionValue for MemorySize {
    const KIND: OptionKind = OptionKind::MemorySize;

    fn from_raw(raw: &RawValue) -> Result<Self, String> {
        match raw {
            RawValue::String(text) => Self::parse(text),
            RawValue::Integer(bytes) => u64::try_from(*bytes)
                .map(Self::from_bytes)
                .map_err(|_| format!("memory size {bytes} must not be negative")),
            other => Err(shape_mismatch(Self::KIND, other)),
        }
    }
}

/// Resolves an enum option from its textual token.
///
/// Matching ignores ASCII case and treats `_` and `-` as the same character,
/// so `AT_LEAST_ONCE` and `at-least-once` select the same variant. Tokens in
/// `variants` must be lowercase and hyphenated.
///
/// # Errors
///
/// Returns a reason listing the accepted tokens when nothing matches.
pub fn enum_from_raw<T: Copy>(raw: &RawValue, variants: &[(&str, T)]) -> Result<T, String> {
    let RawValue::String(text) = raw else {
        return Err(shape_mismatch(OptionKind::Enum, raw));
    };
    let normalized = text.trim().to_ascii_lowercase().replace('_', "-");
    variants.iter().find(|(token, _)| *token == normalized).map(|(_, variant)| *variant).ok_or_else(
        || {
            let accepted: Vec<&str> = variants.iter().map(|(token, _)| *token).collect();
            format!("'{text}' is not one of {}", accepted.join(", "))
        },
    )
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Formats a reason for a value whose shape cannot hold the option kind.
fn shape_mismatch(kind: OptionKind, raw: &RawValue) -> String {
    format!("expected {kind}, found {}", raw.type_name())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
