// crates/connector-options/src/memory_size.rs
// ============================================================================
// Module: Memory Size Expressions
// Description: Byte-size option values written as "5mb", "512kb", "1gb".
// Purpose: Resolve size expressions to exact byte counts.
// Dependencies: byte-unit, serde
// ============================================================================

//! ## Overview
//! Size expressions are an unsigned integer followed by an optional unit.
//! Units are binary and case-insensitive: `kb` is 1024 bytes and `mb` is
//! 1024 * 1024 bytes. A missing unit means bytes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use byte_unit::Byte;
use byte_unit::Unit;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Accepted unit spellings and the binary unit they map to.
const UNIT_ALIASES: &[(&[&str], Unit)] = &[
    (&["", "b", "bytes"], Unit::B),
    (&["k", "kb", "kibibytes"], Unit::KiB),
    (&["m", "mb", "mebibytes"], Unit::MiB),
    (&["g", "gb", "gibibytes"], Unit::GiB),
    (&["t", "tb", "tebibytes"], Unit::TiB),
];

/// Display suffixes from the largest unit down, with their byte multipliers.
const DISPLAY_UNITS: &[(&str, u64)] = &[
    ("tb", 1 << 40),
    ("gb", 1 << 30),
    ("mb", 1 << 20),
    ("kb", 1 << 10),
];

// ============================================================================
// SECTION: Types
// ============================================================================

/// Exact byte count parsed from a size expression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemorySize(u64);

impl MemorySize {
    /// Zero bytes.
    pub const ZERO: Self = Self(0);

    /// Bytes in one mebibyte.
    pub const MEBIBYTE: u64 = 1 << 20;

    /// Creates a size from a byte count.
    #[must_use]
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Creates a size from a mebibyte count, returning `None` on overflow.
    #[must_use]
    pub const fn from_mebibytes(mebibytes: u64) -> Option<Self> {
        match mebibytes.checked_mul(Self::MEBIBYTE) {
            Some(bytes) => Some(Self(bytes)),
            None => None,
        }
    }

    /// Returns the size in bytes.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Parses a size expression such as `5mb` or `1024`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the expression has no leading
    /// number, an unknown unit, or overflows 64 bits.
    pub fn parse(text: &str) -> Result<Self, String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err("memory size must not be empty".to_string());
        }
        let split = trimmed.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(trimmed.len());
        let (number, unit_text) = trimmed.split_at(split);
        if number.is_empty() {
            return Err(format!("memory size '{trimmed}' must start with a number"));
        }
        let value: u64 =
            number.parse().map_err(|_| format!("memory size '{trimmed}' is out of range"))?;
        let unit_text = unit_text.trim();
        let unit = lookup_unit(unit_text).ok_or_else(|| {
            format!("memory size unit '{unit_text}' is not recognised; expected b, kb, mb, gb or tb")
        })?;
        let byte = Byte::from_u64_with_unit(value, unit)
            .ok_or_else(|| format!("memory size '{trimmed}' is out of range"))?;
        Ok(Self(byte.as_u64()))
    }

    /// Returns true when the size is a whole, non-zero number of mebibytes.
    #[must_use]
    pub const fn is_whole_mebibytes(self) -> bool {
        self.0 >= Self::MEBIBYTE && self.0 % Self::MEBIBYTE == 0
    }
}

impl FromStr for MemorySize {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 != 0 {
            for (suffix, multiplier) in DISPLAY_UNITS {
                if self.0 % multiplier == 0 {
                    return write!(f, "{}{suffix}", self.0 / multiplier);
                }
            }
        }
        write!(f, "{}b", self.0)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps a unit spelling to its binary unit, ignoring case.
fn lookup_unit(text: &str) -> Option<Unit> {
    let lowered = text.to_ascii_lowercase();
    UNIT_ALIASES
        .iter()
        .find(|(aliases, _)| aliases.contains(&lowered.as_str()))
        .map(|(_, unit)| *unit)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
