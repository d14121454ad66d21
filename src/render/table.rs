//! Flat tabular renderings of the analysis records.
//!
//! Comma-separated text built directly: every field is a name or a
//! plain number, so no quoting is ever needed.

use crate::analysis::round4;
use crate::model::{BenfordSummary, SheetSummary};

/// Render the per-column numeric statistics table.
///
/// Only columns with at least one coercible value appear, so the value
/// fields are always present.
pub fn numeric_summary_table(summary: &SheetSummary) -> String {
    let mut lines = vec!["column,count,mean,std,min,max".to_string()];
    for (name, stats) in &summary.numeric_summary {
        lines.push(format!(
            "{},{},{},{},{},{}",
            name,
            stats.count,
            opt(stats.mean),
            opt(stats.std),
            opt(stats.min),
            opt(stats.max)
        ));
    }
    lines.join("\n")
}

/// Render the per-digit Benford comparison table.
///
/// Expected counts and both percentage series are rounded to 4 decimal
/// places, matching the JSON report.
pub fn benford_table(summary: &BenfordSummary) -> String {
    let mut lines =
        vec!["digit,observed_count,expected_count,observed_percent,expected_percent".to_string()];
    for record in &summary.digits {
        lines.push(format!(
            "{},{},{},{},{}",
            record.digit,
            record.observed_count,
            round4(record.expected_count),
            round4(record.observed_percent),
            round4(record.expected_percent)
        ));
    }
    lines.join("\n")
}

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
