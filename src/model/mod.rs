//! Result records produced by the analysis pipeline.
//!
//! Each record is computed once per run, handed to the render layer and
//! the output writer, and discarded. Nothing here is mutated after
//! construction.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Date range detected for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRange {
    /// Earliest parsed timestamp.
    pub min: NaiveDateTime,
    /// Latest parsed timestamp.
    pub max: NaiveDateTime,
    /// Parsed-to-non-empty ratio, rounded to 4 decimal places.
    pub non_null_ratio: f64,
}

/// Descriptive summary of one numeric column.
///
/// All value fields are absent when `count` is zero; a zero is a real
/// statistic, not a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericStats {
    /// Number of coercible values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (n−1 divisor; 0 for a single value).
    pub std: Option<f64>,
    /// Smallest value.
    pub min: Option<f64>,
    /// Largest value.
    pub max: Option<f64>,
}

/// One digit's slice of the Benford comparison. Raw, unrounded values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenfordDigit {
    /// Leading digit, 1 through 9.
    pub digit: u32,
    /// How many sample values lead with this digit.
    pub observed_count: usize,
    /// Theoretical count for the sample size.
    pub expected_count: f64,
    /// Observed fraction of the sample.
    pub observed_percent: f64,
    /// Theoretical fraction of the sample.
    pub expected_percent: f64,
}

/// Benford comparison for one selected column.
#[derive(Debug, Clone, Serialize)]
pub struct BenfordSummary {
    /// Container the sample came from.
    pub file: String,
    /// Analyzed column name.
    pub column: String,
    /// Values that produced a leading digit.
    pub total_values: usize,
    /// Per-digit comparison, digits 1 through 9.
    pub digits: Vec<BenfordDigit>,
}

/// Whole-sheet summary: identity, shape, and per-column findings.
///
/// The per-column collections are `(name, record)` pairs in header
/// order, preserving the sheet's own column sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SheetSummary {
    /// Container the grid came from.
    pub file: String,
    /// Number of data rows (header excluded).
    pub row_count: usize,
    /// Number of columns (header length).
    pub column_count: usize,
    /// Column names in header order.
    pub columns: Vec<String>,
    /// Missing-value count per column.
    pub missing_values: Vec<(String, usize)>,
    /// Columns classified as dates, with their ranges.
    pub date_columns: Vec<(String, DateRange)>,
    /// Columns with at least one numeric value, with their statistics.
    pub numeric_summary: Vec<(String, NumericStats)>,
}
