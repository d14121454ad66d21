//! JSON serialization of the analysis records.

use crate::analysis::round4;
use crate::error::Result;
use crate::model::{BenfordSummary, SheetSummary};
use serde_json::{json, Map, Value};

/// Serialize a sheet summary as pretty-printed JSON.
///
/// Per-column objects are keyed by column name in header order.
pub fn summary_to_json(summary: &SheetSummary) -> Result<String> {
    let mut root = Map::new();
    root.insert("file".into(), json!(summary.file));
    root.insert("row_count".into(), json!(summary.row_count));
    root.insert("column_count".into(), json!(summary.column_count));
    root.insert("columns".into(), json!(summary.columns));

    let mut missing = Map::new();
    for (name, count) in &summary.missing_values {
        missing.insert(name.clone(), json!(count));
    }
    root.insert("missing_values".into(), Value::Object(missing));

    let mut dates = Map::new();
    for (name, range) in &summary.date_columns {
        dates.insert(name.clone(), serde_json::to_value(range)?);
    }
    root.insert("date_columns".into(), Value::Object(dates));

    let mut numeric = Map::new();
    for (name, stats) in &summary.numeric_summary {
        numeric.insert(name.clone(), serde_json::to_value(stats)?);
    }
    root.insert("numeric_summary".into(), Value::Object(numeric));

    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

/// Serialize a Benford summary as pretty-printed JSON.
///
/// Expected counts and both percentage series are rounded to 4 decimal
/// places here; the record itself stays raw.
pub fn benford_to_json(summary: &BenfordSummary) -> Result<String> {
    let mut root = Map::new();
    root.insert("file".into(), json!(summary.file));
    root.insert("column".into(), json!(summary.column));
    root.insert("total_values".into(), json!(summary.total_values));

    let mut observed_counts = Map::new();
    let mut expected_counts = Map::new();
    let mut observed_percent = Map::new();
    let mut expected_percent = Map::new();
    for record in &summary.digits {
        let key = record.digit.to_string();
        observed_counts.insert(key.clone(), json!(record.observed_count));
        expected_counts.insert(key.clone(), json!(round4(record.expected_count)));
        observed_percent.insert(key.clone(), json!(round4(record.observed_percent)));
        expected_percent.insert(key, json!(round4(record.expected_percent)));
    }
    root.insert("observed_counts".into(), Value::Object(observed_counts));
    root.insert("expected_counts".into(), Value::Object(expected_counts));
    root.insert("observed_percent".into(), Value::Object(observed_percent));
    root.insert("expected_percent".into(), Value::Object(expected_percent));

    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{distribution, numeric_stats};
    use crate::model::NumericStats;

    fn sheet_summary() -> SheetSummary {
        SheetSummary {
            file: "ledger.xlsx".to_string(),
            row_count: 2,
            column_count: 2,
            columns: vec!["amount".to_string(), "memo".to_string()],
            missing_values: vec![("amount".to_string(), 0), ("memo".to_string(), 1)],
            date_columns: Vec::new(),
            numeric_summary: vec![("amount".to_string(), numeric_stats(&[1.0, 2.0]))],
        }
    }

    #[test]
    fn test_summary_json_shape() {
        let json = summary_to_json(&sheet_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file"], "ledger.xlsx");
        assert_eq!(value["row_count"], 2);
        assert_eq!(value["missing_values"]["memo"], 1);
        assert_eq!(value["numeric_summary"]["amount"]["count"], 2);
        assert_eq!(value["numeric_summary"]["amount"]["mean"], 1.5);
    }

    #[test]
    fn test_summary_json_preserves_header_order() {
        let json = summary_to_json(&sheet_summary()).unwrap();
        let amount = json.find("\"amount\": 0").unwrap();
        let memo = json.find("\"memo\": 1").unwrap();
        assert!(amount < memo);
    }

    #[test]
    fn test_benford_json_rounds_to_four_places() {
        let values = vec![1.5; 10];
        let dist = distribution("amount", &values).unwrap();
        let summary = BenfordSummary {
            file: "ledger.xlsx".to_string(),
            column: "amount".to_string(),
            total_values: dist.total,
            digits: dist.digits,
        };

        let json = benford_to_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_values"], 10);
        assert_eq!(value["observed_counts"]["1"], 10);
        // 10 * log10(2) = 3.0103
        assert_eq!(value["expected_counts"]["1"], 3.0103);
        assert_eq!(value["observed_percent"]["1"], 1.0);
        assert_eq!(value["expected_percent"]["1"], 0.301);
    }

    #[test]
    fn test_absent_stats_serialize_as_null() {
        let mut summary = sheet_summary();
        summary.numeric_summary = vec![(
            "empty".to_string(),
            NumericStats {
                count: 0,
                mean: None,
                std: None,
                min: None,
                max: None,
            },
        )];
        let json = summary_to_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["numeric_summary"]["empty"]["mean"].is_null());
    }
}
