//! Property-based tests for option value parsing.
//!
//! ## Purpose
//! These tests exercise unit conversion with randomized inputs to prove the
//! size and duration parsers agree with their arithmetic definitions and never
//! panic on arbitrary text.
//!
//! ## What is covered
//! - `<n>mb` resolves to `n * 1024 * 1024` bytes.
//! - `<n>ms` and `<n>s` resolve to the matching millisecond counts.
//! - `;`-separated lists preserve element order.
//! - Arbitrary text never panics the parsers.
// crates/connector-options/tests/proptest_values.rs
// ============================================================================
// Module: Option Value Property-Based Tests
// Description: Randomized checks for unit conversion and list splitting.
// Purpose: Ensure value parsing is exact and panic-free.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use connector_options::MemorySize;
use connector_options::OptionValue;
use connector_options::RawValue;
use connector_options::duration_to_millis;
use connector_options::parse_duration;
use proptest::prelude::*;

proptest! {
    #[test]
    fn mebibyte_expressions_are_exact(count in 0_u64..1_000_000) {
        let size = MemorySize::parse(&format!("{count}mb")).unwrap();
        prop_assert_eq!(size.bytes(), count * 1024 * 1024);
    }

    #[test]
    fn millisecond_expressions_are_exact(millis in 0_u64..10_000_000) {
        let duration = parse_duration(&format!("{millis}ms")).unwrap();
        prop_assert_eq!(duration_to_millis(duration), millis);
    }

    #[test]
    fn second_expressions_scale_by_thousand(seconds in 0_u64..1_000_000) {
        let duration = parse_duration(&format!("{seconds}s")).unwrap();
        prop_assert_eq!(duration_to_millis(duration), seconds * 1000);
    }

    #[test]
    fn separated_lists_preserve_order(items in proptest::collection::vec("[a-z0-9:/.]{1,16}", 1..8)) {
        let raw = RawValue::from(items.join(";"));
        let parsed = Vec::<String>::from_raw(&raw).unwrap();
        prop_assert_eq!(parsed, items);
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,32}") {
        let _ = MemorySize::parse(&text);
        let _ = parse_duration(&text);
    }
}
