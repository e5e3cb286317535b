// Rust guideline compliant 2026-10-15

//! Performance metrics derived from a completed run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative throughput rating.
///
/// Variants are ordered from slowest to fastest, so tiers compare with `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingTier {
    /// Below 1,000 cycles per second.
    Slow,
    /// At least 1,000 cycles per second.
    Average,
    /// At least 10,000 cycles per second.
    Good,
    /// At least 100,000 cycles per second.
    Great,
    /// At least 1,000,000 cycles per second.
    Excellent,
    /// At least 10,000,000 cycles per second.
    Extreme,
}

/// Thresholds checked from the highest down; the first one met wins.
const RATING_THRESHOLDS: [(f64, RatingTier); 5] = [
    (10_000_000.0, RatingTier::Extreme),
    (1_000_000.0, RatingTier::Excellent),
    (100_000.0, RatingTier::Great),
    (10_000.0, RatingTier::Good),
    (1_000.0, RatingTier::Average),
];

impl RatingTier {
    /// Selects the tier for a throughput in cycles per second.
    #[must_use]
    pub fn from_cycles_per_second(cycles_per_second: f64) -> Self {
        RATING_THRESHOLDS
            .iter()
            .find(|(threshold, _)| cycles_per_second >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(RatingTier::Slow)
    }

    /// Upper-case label shown in reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Slow => "SLOW",
            RatingTier::Average => "AVERAGE",
            RatingTier::Good => "GOOD",
            RatingTier::Great => "GREAT",
            RatingTier::Excellent => "EXCELLENT",
            RatingTier::Extreme => "EXTREME",
        }
    }

    /// Symbol shown next to the label.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            RatingTier::Slow => "🐢",
            RatingTier::Average => "📊",
            RatingTier::Good => "👍",
            RatingTier::Great => "💪",
            RatingTier::Excellent => "⭐",
            RatingTier::Extreme => "🚀",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.label())
    }
}

/// Immutable summary of a run's timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Wall-clock duration of the run in seconds.
    pub total_time_sec: f64,
    /// CPU time consumed by the process during the run, in seconds.
    pub cpu_time_sec: f64,
    /// Completed cycles per wall-clock second.
    pub cycles_per_second: f64,
    /// Wall-clock seconds per cycle.
    pub seconds_per_cycle: f64,
    /// CPU time as a percentage of wall-clock time.
    pub cpu_efficiency_pct: f64,
    /// Throughput rating.
    pub rating_tier: RatingTier,
}

/// Derives throughput, efficiency and rating from final run totals.
///
/// Ratios with a zero (or negative) denominator are reported as 0.
///
/// # Arguments
///
/// * `num_cycles` - Number of cycles executed
/// * `total_time_sec` - Wall-clock duration of the run
/// * `cpu_time_sec` - CPU time consumed during the run
///
/// # Returns
///
/// The derived metrics.
#[must_use]
pub fn summarize(num_cycles: u64, total_time_sec: f64, cpu_time_sec: f64) -> PerformanceMetrics {
    let (cycles_per_second, cpu_efficiency_pct) = if total_time_sec > 0.0 {
        (
            num_cycles as f64 / total_time_sec,
            cpu_time_sec / total_time_sec * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let seconds_per_cycle = if num_cycles > 0 {
        total_time_sec / num_cycles as f64
    } else {
        0.0
    };

    PerformanceMetrics {
        total_time_sec,
        cpu_time_sec,
        cycles_per_second,
        seconds_per_cycle,
        cpu_efficiency_pct,
        rating_tier: RatingTier::from_cycles_per_second(cycles_per_second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(RatingTier::from_cycles_per_second(1e7), RatingTier::Extreme);
        assert_eq!(RatingTier::from_cycles_per_second(1e6), RatingTier::Excellent);
        assert_eq!(RatingTier::from_cycles_per_second(1e5), RatingTier::Great);
        assert_eq!(RatingTier::from_cycles_per_second(1e4), RatingTier::Good);
        assert_eq!(RatingTier::from_cycles_per_second(1e3), RatingTier::Average);
        assert_eq!(RatingTier::from_cycles_per_second(999.0), RatingTier::Slow);
        assert_eq!(RatingTier::from_cycles_per_second(0.0), RatingTier::Slow);
    }

    #[test]
    fn test_rating_just_below_threshold() {
        assert_eq!(
            RatingTier::from_cycles_per_second(9_999_999.9),
            RatingTier::Excellent
        );
        assert_eq!(RatingTier::from_cycles_per_second(99_999.0), RatingTier::Good);
    }

    #[test]
    fn test_summarize_zero_time_has_no_division() {
        let metrics = summarize(1000, 0.0, 0.5);
        assert_eq!(metrics.cycles_per_second, 0.0);
        assert_eq!(metrics.cpu_efficiency_pct, 0.0);
        assert_eq!(metrics.seconds_per_cycle, 0.0);
        assert_eq!(metrics.rating_tier, RatingTier::Slow);
    }

    #[test]
    fn test_summarize_derives_ratios() {
        let metrics = summarize(2_000_000, 2.0, 1.5);
        assert_eq!(metrics.cycles_per_second, 1_000_000.0);
        assert_eq!(metrics.seconds_per_cycle, 1e-6);
        assert_eq!(metrics.cpu_efficiency_pct, 75.0);
        assert_eq!(metrics.rating_tier, RatingTier::Excellent);
    }

    #[test]
    fn test_summarize_zero_cycles() {
        let metrics = summarize(0, 1.0, 1.0);
        assert_eq!(metrics.cycles_per_second, 0.0);
        assert_eq!(metrics.seconds_per_cycle, 0.0);
        assert_eq!(metrics.cpu_efficiency_pct, 100.0);
    }

    #[test]
    fn test_rating_display_and_order() {
        assert_eq!(RatingTier::Extreme.to_string(), "🚀 EXTREME");
        assert_eq!(RatingTier::Slow.to_string(), "🐢 SLOW");
        assert!(RatingTier::Slow < RatingTier::Average);
        assert!(RatingTier::Excellent < RatingTier::Extreme);
    }

    #[test]
    fn test_rating_serializes_upper_case() {
        let json = serde_json::to_string(&RatingTier::Great).unwrap();
        assert_eq!(json, "\"GREAT\"");
    }
}
