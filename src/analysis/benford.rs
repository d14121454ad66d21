//! Benford's-Law leading-digit distribution.

use crate::error::{Error, Result};
use crate::model::BenfordDigit;
use std::collections::HashMap;

/// Default minimum numeric sample size for auto-selecting a column.
pub const DEFAULT_MIN_COUNT: usize = 10;

/// Observed-vs-expected leading-digit distribution for one sample.
///
/// Counts and percentages are raw (unrounded); the render layer rounds
/// for reporting so chart geometry never compounds rounding error.
#[derive(Debug, Clone)]
pub struct BenfordDistribution {
    /// Number of values that produced a leading digit.
    pub total: usize,
    /// Per-digit records for digits 1 through 9.
    pub digits: Vec<BenfordDigit>,
}

/// Extract the leading decimal digit of a value's magnitude.
///
/// The magnitude is normalized into `[1, 10)` by repeated ×10 or ÷10
/// and truncated. Zero and non-finite values have no leading digit and
/// are excluded from the sample.
///
/// # Example
///
/// ```
/// use sheetlens::analysis::leading_digit;
///
/// assert_eq!(leading_digit(0.0034), Some(3));
/// assert_eq!(leading_digit(340.0), Some(3));
/// assert_eq!(leading_digit(0.0), None);
/// ```
pub fn leading_digit(value: f64) -> Option<u32> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    let mut magnitude = value.abs();
    while magnitude < 1.0 {
        magnitude *= 10.0;
    }
    while magnitude >= 10.0 {
        magnitude /= 10.0;
    }
    let digit = magnitude as u32;
    (1..=9).contains(&digit).then_some(digit)
}

/// Expected per-digit counts for a sample of the given size.
///
/// For digit `d`, the closed-form law gives `total × log10(1 + 1/d)`.
/// Recomputed per total; callers compare counts, not just percentages.
pub fn expected_counts(total: usize) -> [f64; 9] {
    let mut counts = [0.0; 9];
    for (i, slot) in counts.iter_mut().enumerate() {
        let digit = (i + 1) as f64;
        *slot = total as f64 * (1.0 + 1.0 / digit).log10();
    }
    counts
}

/// Compare a numeric sample's leading digits against the Benford law.
///
/// `column` names the sample for error reporting. Fails with
/// [`Error::EmptySample`] when no value yields a valid leading digit.
pub fn distribution(column: &str, values: &[f64]) -> Result<BenfordDistribution> {
    let digits: Vec<u32> = values.iter().copied().filter_map(leading_digit).collect();
    if digits.is_empty() {
        return Err(Error::EmptySample(column.to_string()));
    }

    let total = digits.len();
    let mut observed = [0usize; 9];
    for digit in &digits {
        observed[(digit - 1) as usize] += 1;
    }
    let expected = expected_counts(total);

    let records = (1..=9u32)
        .map(|digit| {
            let i = (digit - 1) as usize;
            BenfordDigit {
                digit,
                observed_count: observed[i],
                expected_count: expected[i],
                observed_percent: observed[i] as f64 / total as f64,
                expected_percent: expected[i] / total as f64,
            }
        })
        .collect();

    Ok(BenfordDistribution {
        total,
        digits: records,
    })
}

/// Auto-select the analysis column.
///
/// Walks headers in order and picks the first column whose numeric
/// sample size meets the threshold; fails with
/// [`Error::NoEligibleColumn`] when none qualifies.
pub fn pick_column<'a>(
    headers: &'a [String],
    numeric_columns: &HashMap<String, Vec<f64>>,
    min_count: usize,
) -> Result<&'a str> {
    headers
        .iter()
        .find(|name| {
            numeric_columns
                .get(name.as_str())
                .map_or(0, |values| values.len())
                >= min_count
        })
        .map(|name| name.as_str())
        .ok_or(Error::NoEligibleColumn { min_count })
}
