//! Common helper functions for tests and benchmarks.
//!
//! Everything here reads formatted strings back into numbers so tests can
//! check the formatters against plain arithmetic instead of against a second
//! copy of the same digit logic.

// --- Constants ---
pub const NS_PER_US: u64 = 1_000;
pub const NS_PER_MS: u64 = 1_000_000;
pub const NS_PER_SEC: u64 = 1_000_000_000;
pub const NS_PER_MIN: u64 = 60 * NS_PER_SEC;
pub const NS_PER_HOUR: u64 = 60 * NS_PER_MIN;
pub const NS_PER_DAY: u64 = 24 * NS_PER_HOUR;
pub const KIB: u64 = 1024;

/// Values spread over every duration branch, for benches and smoke tests.
pub const SAMPLE_DURATIONS: [i64; 10] = [
    0,
    999,
    1_500,
    12_345_678,
    2_250_000_000,
    61_500_000_000,
    3_723_000_000_000,
    183_845_000_000_000,
    -1_500,
    i64::MAX,
];

/// Values spread over every size unit.
pub const SAMPLE_SIZES: [i64; 8] = [
    0,
    9_999,
    10_240,
    12_800,
    -52_428_800,
    16_106_127_360,
    10_737_418_240_000,
    i64::MIN,
];

// --- Expected units ---

/// Unit suffix (or `"clock"` for colon formats) the duration formatter should pick.
pub fn expected_duration_unit(abs_ns: u64) -> &'static str {
    match abs_ns {
        n if n < NS_PER_US => "ns",
        n if n < NS_PER_MS => "us",
        n if n < NS_PER_SEC => "ms",
        n if n < NS_PER_MIN => "s",
        _ => "clock",
    }
}

/// Unit suffix the size formatter should pick.
pub fn expected_size_unit(abs: u64) -> &'static str {
    match abs {
        n if n < 10_000 => "bytes",
        n if n < 10_000 * KIB => "KB",
        n if n < 10_000 * KIB * KIB => "MB",
        n if n < 10_000 * KIB * KIB * KIB => "GB",
        _ => "TB",
    }
}

/// Bytes per unit for the suffixes returned by [`expected_size_unit`].
pub fn size_unit_scale(unit: &str) -> Option<f64> {
    Some(match unit {
        "bytes" => 1.0,
        "KB" => KIB as f64,
        "MB" => (KIB * KIB) as f64,
        "GB" => (KIB * KIB * KIB) as f64,
        "TB" => (KIB * KIB * KIB * KIB) as f64,
        _ => return None,
    })
}

// --- Parsers ---

/// Splits `"12.5 ms"` into `("12.5", "ms")`.
pub fn split_unit(s: &str) -> Option<(&str, &str)> {
    let (number, unit) = s.split_once(' ')?;
    (!number.is_empty() && !unit.is_empty() && !unit.contains(' ')).then_some((number, unit))
}

/// Number of digits after the decimal point, if there is one.
pub fn fraction_digits(number: &str) -> usize {
    number.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Whether a decimal number is printed in its shortest form: no trailing
/// zeros after the point and no dangling point.
pub fn is_trimmed(number: &str) -> bool {
    match number.split_once('.') {
        Some((_, frac)) => !frac.is_empty() && !frac.ends_with('0'),
        None => true,
    }
}

/// Reads `m:ss`, `m:ss.f`, `h:mm:ss` or `Nd hh:mm:ss` (without the space) back
/// into seconds.
pub fn parse_clock(s: &str) -> Option<f64> {
    let (days, rest) = match s.split_once('d') {
        Some((d, rest)) => (d.parse::<u64>().ok()?, rest),
        None => (0, s),
    };
    let fields: Vec<&str> = rest.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => (0, m.parse::<u64>().ok()?, s.parse::<f64>().ok()?),
        [h, m, s] => (h.parse::<u64>().ok()?, m.parse::<u64>().ok()?, s.parse::<f64>().ok()?),
        _ => return None,
    };
    if minutes >= 60 || seconds >= 60.0 || (days > 0 && hours >= 24) {
        return None;
    }
    Some(((days * 24 + hours) * 60 + minutes) as f64 * 60.0 + seconds)
}

// --- Oracles ---

/// The exact value in the unit the formatter picks for `abs_ns` below one minute.
pub fn exact_in_unit(abs_ns: u64) -> f64 {
    match expected_duration_unit(abs_ns) {
        "ns" => abs_ns as f64,
        "us" => abs_ns as f64 / NS_PER_US as f64,
        "ms" => abs_ns as f64 / NS_PER_MS as f64,
        _ => abs_ns as f64 / NS_PER_SEC as f64,
    }
}

/// Largest difference between a printed sub-minute duration and its exact
/// value: half a hundredth for rounding, plus up to a thousandth lost when the
/// input is truncated to milli-units first.
pub const SUB_MINUTE_TOLERANCE: f64 = 0.005 + 0.001 + 1e-9;

/// Same for `m:ss.f`: half a tenth plus the truncated milliseconds.
pub const MINUTE_TOLERANCE: f64 = 0.05 + 0.001 + 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_parsing() {
        assert_eq!(parse_clock("1:00"), Some(60.0));
        assert!((parse_clock("12:34.3").unwrap() - 754.3).abs() < 1e-9);
        assert_eq!(parse_clock("1:02:03"), Some(3_723.0));
        assert_eq!(parse_clock("2d03:04:05"), Some(183_845.0));
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("1.5 us"), None);
    }

    #[test]
    fn trimmed_numbers() {
        assert!(is_trimmed("12"));
        assert!(is_trimmed("12.5"));
        assert!(!is_trimmed("12.50"));
        assert!(!is_trimmed("12."));
    }

    #[test]
    fn units() {
        assert_eq!(split_unit("9.77 KB"), Some(("9.77", "KB")));
        assert_eq!(expected_size_unit(10_240), "KB");
        assert_eq!(expected_duration_unit(59_999_999_999), "s");
        assert_eq!(expected_duration_unit(60_000_000_000), "clock");
    }
}
