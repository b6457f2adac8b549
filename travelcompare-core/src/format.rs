//! Human-readable rendering of travel durations and distances.
//!
//! Both formatters are pure and deterministic. They round half-up in integer
//! arithmetic so the output is identical on every platform. The thresholds are
//! part of the observable contract: durations within 30 seconds of the next
//! hour or day are promoted to the larger unit so that strings such as
//! `"60min"` or `"24h 0min"` never appear.

/// Seconds in one minute.
pub const MINUTE: u64 = 60;
/// Seconds in one hour.
pub const HOUR: u64 = 60 * MINUTE;
/// Seconds in one day.
pub const DAY: u64 = 24 * HOUR;

/// Margin below an hour or day boundary at which the larger unit takes over.
const HALF_MINUTE: u64 = 30;

const METERS_PER_KILOMETER: u64 = 1_000;
const METERS_PER_DECIMAL: u64 = 100;
/// Distances above this are shown in whole kilometres.
const WHOLE_KILOMETER_THRESHOLD: u64 = 100_000;

/// Divide `value` by `divisor`, rounding halves up.
const fn div_round_half_up(value: u64, divisor: u64) -> u64 {
    value
        .saturating_add(divisor.div_euclid(2))
        .div_euclid(divisor)
}

/// Format a distance in metres.
///
/// # Examples
///
/// ```
/// use travelcompare_core::format_distance;
///
/// assert_eq!(format_distance(500), "500 m");
/// assert_eq!(format_distance(1_550), "1.6 km");
/// assert_eq!(format_distance(1_950), "2 km");
/// assert_eq!(format_distance(150_000), "150 km");
/// ```
#[must_use]
pub fn format_distance(meters_total: u64) -> String {
    if meters_total < METERS_PER_KILOMETER {
        return format!("{meters_total} m");
    }

    let kilometers = meters_total.div_euclid(METERS_PER_KILOMETER);
    if meters_total > WHOLE_KILOMETER_THRESHOLD {
        return format!("{kilometers} km");
    }

    let remainder = meters_total.rem_euclid(METERS_PER_KILOMETER);
    match div_round_half_up(remainder, METERS_PER_DECIMAL) {
        0 => format!("{kilometers} km"),
        10 => format!("{} km", kilometers.saturating_add(1)),
        decimal => format!("{kilometers}.{decimal} km"),
    }
}

/// Format a duration in seconds.
///
/// # Examples
///
/// ```
/// use travelcompare_core::format_duration;
///
/// assert_eq!(format_duration(45), "45s");
/// assert_eq!(format_duration(90), "2min");
/// assert_eq!(format_duration(3_629), "1h 0min");
/// assert_eq!(format_duration(86_370), "1d 0h");
/// ```
#[must_use]
pub fn format_duration(seconds_total: u64) -> String {
    if seconds_total < MINUTE {
        return format!("{seconds_total}s");
    }

    if seconds_total < HOUR - HALF_MINUTE {
        let minutes = div_round_half_up(seconds_total, MINUTE);
        return format!("{minutes}min");
    }

    if seconds_total < DAY - HALF_MINUTE {
        let hours = seconds_total.div_euclid(HOUR);
        let minutes = div_round_half_up(seconds_total.rem_euclid(HOUR), MINUTE);
        return if minutes < 60 {
            format!("{hours}h {minutes}min")
        } else {
            format!("{}h 0min", hours.saturating_add(1))
        };
    }

    // The last half minute before a day rounds up to a full day.
    let seconds_total = seconds_total.max(DAY);
    let days = seconds_total.div_euclid(DAY);
    let hours = seconds_total.rem_euclid(DAY).div_euclid(HOUR);
    format!("{days}d {hours}h")
}
