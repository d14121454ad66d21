//! Descriptive statistics over numeric sequences.

use crate::model::NumericStats;

/// Compute count, mean, sample standard deviation, min, and max.
///
/// An empty sequence reports every field absent so callers can tell
/// "no data" from "single data point with zero variance". A single
/// value has variance 0 by definition; two or more divide the summed
/// squared deviations by `count - 1` (sample variance).
pub fn numeric_stats(values: &[f64]) -> NumericStats {
    let count = values.len();
    if count == 0 {
        return NumericStats {
            count: 0,
            mean: None,
            std: None,
            min: None,
            max: None,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let variance = if count > 1 {
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0)
    } else {
        0.0
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    NumericStats {
        count,
        mean: Some(mean),
        std: Some(variance.sqrt()),
        min: Some(min),
        max: Some(max),
    }
}
