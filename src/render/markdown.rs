//! Markdown report assembly.

use crate::model::{BenfordSummary, SheetSummary};

/// Number of columns listed in the missing-values section.
const MISSING_TOP_N: usize = 10;

/// Render the sheet summary report.
pub fn summary_markdown(summary: &SheetSummary) -> String {
    let mut lines: Vec<String> = vec![
        "# Worksheet Summary".to_string(),
        String::new(),
        format!("**File:** `{}`", summary.file),
        format!("**Row count:** {}", summary.row_count),
        format!("**Column count:** {}", summary.column_count),
        String::new(),
        "## Columns".to_string(),
    ];
    for column in &summary.columns {
        lines.push(format!("- {}", column));
    }

    lines.push(String::new());
    lines.push(format!("## Missing Values (Top {})", MISSING_TOP_N));
    let mut missing = summary.missing_values.clone();
    // Stable sort: ties keep header order.
    missing.sort_by(|a, b| b.1.cmp(&a.1));
    for (column, count) in missing.into_iter().take(MISSING_TOP_N) {
        lines.push(format!("- {}: {}", column, count));
    }

    lines.push(String::new());
    lines.push("## Date Ranges".to_string());
    if summary.date_columns.is_empty() {
        lines.push("- No date columns detected with >= 80% parseable values.".to_string());
    } else {
        for (column, range) in &summary.date_columns {
            lines.push(format!(
                "- {}: {} to {} (non-null ratio {})",
                column,
                range.min.format("%Y-%m-%dT%H:%M:%S"),
                range.max.format("%Y-%m-%dT%H:%M:%S"),
                range.non_null_ratio
            ));
        }
    }

    lines.push(String::new());
    lines.push("## Numeric Summary".to_string());
    lines.push("See `numeric_summary.csv` for full descriptive statistics.".to_string());

    lines.join("\n")
}

/// Render the Benford report, listing the artifacts written alongside.
pub fn benford_markdown(summary: &BenfordSummary, artifacts: &[String]) -> String {
    let mut lines: Vec<String> = vec![
        "# Benford's Law Analysis".to_string(),
        String::new(),
        format!("**File:** `{}`", summary.file),
        format!("**Column:** `{}`", summary.column),
        format!("**Total values analyzed:** {}", summary.total_values),
    ];

    if !artifacts.is_empty() {
        lines.push(String::new());
        lines.push("Outputs:".to_string());
        for artifact in artifacts {
            lines.push(format!("- `{}`", artifact));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{distribution, numeric_stats};
    use crate::model::DateRange;
    use chrono::NaiveDate;

    fn sheet_summary() -> SheetSummary {
        let range = DateRange {
            min: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            max: NaiveDate::from_ymd_opt(2024, 2, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            non_null_ratio: 0.9,
        };
        SheetSummary {
            file: "ledger.xlsx".to_string(),
            row_count: 20,
            column_count: 3,
            columns: vec!["posted".into(), "amount".into(), "memo".into()],
            missing_values: vec![
                ("posted".to_string(), 0),
                ("amount".to_string(), 2),
                ("memo".to_string(), 5),
            ],
            date_columns: vec![("posted".to_string(), range)],
            numeric_summary: vec![("amount".to_string(), numeric_stats(&[1.0, 2.0]))],
        }
    }

    #[test]
    fn test_summary_markdown_sections() {
        let md = summary_markdown(&sheet_summary());

        assert!(md.starts_with("# Worksheet Summary"));
        assert!(md.contains("**Row count:** 20"));
        assert!(md.contains("- amount"));
        assert!(md.contains("## Missing Values (Top 10)"));
        assert!(md.contains("- posted: 2024-01-01T00:00:00 to 2024-02-01T00:00:00 (non-null ratio 0.9)"));
    }

    #[test]
    fn test_missing_values_sorted_descending() {
        let md = summary_markdown(&sheet_summary());
        let memo = md.find("- memo: 5").unwrap();
        let amount = md.find("- amount: 2").unwrap();
        let posted = md.find("- posted: 0").unwrap();
        assert!(memo < amount && amount < posted);
    }

    #[test]
    fn test_summary_markdown_without_dates() {
        let mut summary = sheet_summary();
        summary.date_columns.clear();
        let md = summary_markdown(&summary);
        assert!(md.contains("- No date columns detected"));
    }

    #[test]
    fn test_benford_markdown() {
        let values = vec![1.5; 10];
        let dist = distribution("amount", &values).unwrap();
        let summary = BenfordSummary {
            file: "ledger.xlsx".to_string(),
            column: "amount".to_string(),
            total_values: dist.total,
            digits: dist.digits,
        };
        let artifacts = vec!["benford_summary.json".to_string(), "benford_chart.svg".to_string()];

        let md = benford_markdown(&summary, &artifacts);
        assert!(md.starts_with("# Benford's Law Analysis"));
        assert!(md.contains("**Column:** `amount`"));
        assert!(md.contains("**Total values analyzed:** 10"));
        assert!(md.contains("- `benford_chart.svg`"));
    }
}
