//! Property-based tests for the distance and duration formatters.
//!
//! # Invariants tested
//!
//! - **Well-formed output:** non-empty ASCII ending in a known unit suffix.
//! - **No overflowed units:** minutes never reach 60, hours never reach 24.
//! - **Monotonic kilometres:** the whole-kilometre part never decreases as the
//!   distance grows.

use proptest::prelude::*;
use travelcompare_core::{DAY, HOUR, format_distance, format_duration};

/// Parse the leading integer of a formatted distance such as `"12.3 km"`.
fn leading_number(text: &str) -> u64 {
    text.chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .expect("formatted value starts with digits")
}

proptest! {
    #[test]
    fn distance_is_ascii_with_unit(meters in any::<u64>()) {
        let text = format_distance(meters);
        prop_assert!(!text.is_empty());
        prop_assert!(text.is_ascii());
        prop_assert!(text.ends_with(" m") || text.ends_with(" km"), "unexpected unit in {text}");
    }

    #[test]
    fn duration_is_ascii_with_unit(seconds in any::<u64>()) {
        let text = format_duration(seconds);
        prop_assert!(!text.is_empty());
        prop_assert!(text.is_ascii());
        prop_assert!(
            text.ends_with('s') || text.ends_with("min") || text.ends_with('h'),
            "unexpected unit in {text}"
        );
    }

    #[test]
    fn minutes_never_overflow_an_hour(seconds in 0_u64..DAY) {
        let text = format_duration(seconds);
        if let Some(minutes) = text.strip_suffix("min") {
            let minutes = minutes.rsplit(' ').next().unwrap_or(minutes);
            let value: u64 = minutes.parse().expect("numeric minutes");
            prop_assert!(value < 60, "{seconds}s rendered as {text}");
        }
    }

    #[test]
    fn hours_never_overflow_a_day(seconds in (DAY - HOUR)..(4 * DAY)) {
        let text = format_duration(seconds);
        if let Some(prefix) = text.strip_suffix('h') {
            let hours: u64 = prefix
                .rsplit(' ')
                .next()
                .unwrap_or(prefix)
                .parse()
                .expect("numeric hours");
            prop_assert!(hours < 24, "{seconds}s rendered as {text}");
        }
    }

    #[test]
    fn kilometres_are_monotonic(meters in 1_000_u64..1_000_000, step in 1_u64..5_000) {
        let shorter = leading_number(&format_distance(meters));
        let longer = leading_number(&format_distance(meters + step));
        prop_assert!(shorter <= longer, "{meters} -> {shorter}, {} -> {longer}", meters + step);
    }
}
