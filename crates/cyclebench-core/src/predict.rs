// Rust guideline compliant 2026-10-15

//! Linear extrapolation of run time to larger cycle counts.

use serde::Serialize;
use std::fmt;

/// Cycle counts shown in the predictions section of the report.
pub const STANDARD_CYCLE_COUNTS: [u64; 7] = [
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

/// Display tier of a predicted duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionTier {
    /// Under one millisecond, shown in microseconds.
    Micros,
    /// Under one second, shown in milliseconds.
    Millis,
    /// Under one minute, shown in seconds.
    Seconds,
    /// Under one hour, shown in minutes.
    Minutes,
    /// One hour or more, shown in hours.
    Hours,
}

impl PredictionTier {
    /// Selects the tier for a duration in seconds.
    #[must_use]
    pub fn for_seconds(seconds: f64) -> Self {
        if seconds < 0.001 {
            PredictionTier::Micros
        } else if seconds < 1.0 {
            PredictionTier::Millis
        } else if seconds < 60.0 {
            PredictionTier::Seconds
        } else if seconds < 3600.0 {
            PredictionTier::Minutes
        } else {
            PredictionTier::Hours
        }
    }

    /// Symbol shown next to the formatted duration.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            PredictionTier::Micros => "⚡",
            PredictionTier::Millis => "🚀",
            PredictionTier::Seconds => "⏱️",
            PredictionTier::Minutes => "📊",
            PredictionTier::Hours => "💤",
        }
    }

    /// Formats `seconds` in this tier's unit.
    #[must_use]
    pub fn format(&self, seconds: f64) -> String {
        match self {
            PredictionTier::Micros => format!("{:.1} µs", seconds * 1e6),
            PredictionTier::Millis => format!("{:.1} ms", seconds * 1e3),
            PredictionTier::Seconds => format!("{seconds:.2} s"),
            PredictionTier::Minutes => format!("{:.1} min", seconds / 60.0),
            PredictionTier::Hours => format!("{:.2} hours", seconds / 3600.0),
        }
    }
}

/// Estimated run time for a cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Cycle count the estimate is for.
    pub cycles: u64,
    /// Estimated wall-clock seconds.
    pub estimated_seconds: f64,
}

impl Prediction {
    /// Display tier of the estimate.
    #[must_use]
    pub fn tier(&self) -> PredictionTier {
        PredictionTier::for_seconds(self.estimated_seconds)
    }

    /// Estimate formatted in its tier's unit, without the symbol.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        self.tier().format(self.estimated_seconds)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = self.tier();
        write!(f, "{} {}", tier.format(self.estimated_seconds), tier.symbol())
    }
}

/// Extrapolates `count × seconds_per_cycle` for each count.
///
/// Callers decide which counts are worth predicting; see [`predictions_beyond`].
///
/// # Arguments
///
/// * `seconds_per_cycle` - Measured wall-clock seconds per cycle
/// * `cycle_counts` - Counts to estimate
///
/// # Returns
///
/// One prediction per count, in input order.
#[must_use]
pub fn predict(seconds_per_cycle: f64, cycle_counts: &[u64]) -> Vec<Prediction> {
    cycle_counts
        .iter()
        .map(|&cycles| Prediction {
            cycles,
            estimated_seconds: cycles as f64 * seconds_per_cycle,
        })
        .collect()
}

/// Predictions for the [`STANDARD_CYCLE_COUNTS`] larger than `executed`.
#[must_use]
pub fn predictions_beyond(executed: u64, seconds_per_cycle: f64) -> Vec<Prediction> {
    let counts: Vec<u64> = STANDARD_CYCLE_COUNTS
        .iter()
        .copied()
        .filter(|&count| count > executed)
        .collect();
    predict(seconds_per_cycle, &counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_linear() {
        let predictions = predict(0.001, &[100_000]);
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].cycles, 100_000);
        assert!((predictions[0].estimated_seconds - 100.0).abs() < 1e-9);
        assert_eq!(predictions[0].tier(), PredictionTier::Minutes);
        assert_eq!(predictions[0].formatted_time(), "1.7 min");
    }

    #[test]
    fn test_predictions_beyond_filters_executed() {
        let predictions = predictions_beyond(1_000, 0.001);
        let counts: Vec<u64> = predictions.iter().map(|p| p.cycles).collect();
        assert_eq!(
            counts,
            vec![10_000, 100_000, 1_000_000, 10_000_000, 100_000_000]
        );
        assert!((predictions[1].estimated_seconds - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_predictions_beyond_largest_is_empty() {
        assert!(predictions_beyond(100_000_000, 1e-6).is_empty());
    }

    #[test]
    fn test_prediction_tiers() {
        assert_eq!(PredictionTier::for_seconds(0.0005), PredictionTier::Micros);
        assert_eq!(PredictionTier::for_seconds(0.001), PredictionTier::Millis);
        assert_eq!(PredictionTier::for_seconds(0.5), PredictionTier::Millis);
        assert_eq!(PredictionTier::for_seconds(1.0), PredictionTier::Seconds);
        assert_eq!(PredictionTier::for_seconds(100.0), PredictionTier::Minutes);
        assert_eq!(PredictionTier::for_seconds(3600.0), PredictionTier::Hours);
    }

    #[test]
    fn test_prediction_formatting() {
        let p = Prediction {
            cycles: 100,
            estimated_seconds: 0.00025,
        };
        assert_eq!(p.formatted_time(), "250.0 µs");
        assert_eq!(p.to_string(), "250.0 µs ⚡");

        let p = Prediction {
            cycles: 1_000,
            estimated_seconds: 12.5,
        };
        assert_eq!(p.formatted_time(), "12.50 s");

        let p = Prediction {
            cycles: 1_000,
            estimated_seconds: 5400.0,
        };
        assert_eq!(p.formatted_time(), "1.50 hours");
    }
}
