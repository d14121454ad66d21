//! Header/column projection over a decoded grid.

use crate::error::{Error, Result};
use std::collections::HashMap;

use super::decoder::Grid;

/// A grid reshaped column-major under header names.
///
/// `headers` keeps document order; `columns` maps each header to a value
/// sequence whose length equals the data-row count. Duplicate headers
/// collapse into a single key, last column winning; the source format
/// does not forbid duplicates and no rename policy is applied.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Column names in header order.
    pub headers: Vec<String>,
    /// Raw values per column name, row-aligned.
    pub columns: HashMap<String, Vec<Option<String>>>,
    /// Number of data rows (header excluded).
    pub row_count: usize,
}

impl Projection {
    /// Values for one column, if the header exists.
    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.columns.get(name).map(|v| v.as_slice())
    }
}

/// Project a grid into header names and column-major values.
///
/// Row 0 is the header row; positions with no header text synthesize a
/// `Column{n}` name from their 1-based position. Every data row is
/// densified to the header length: missing trailing positions become
/// absent and excess trailing positions are dropped.
pub fn project(grid: &Grid) -> Result<Projection> {
    let rows = grid.rows();
    let header_row = rows.first().ok_or(Error::EmptyGrid)?;

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Some(text) => text.clone(),
            None => format!("Column{}", idx + 1),
        })
        .collect();

    let data_rows = &rows[1..];

    // Column-major walk; a duplicate header overwrites the earlier
    // column's sequence.
    let mut columns: HashMap<String, Vec<Option<String>>> =
        HashMap::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        let values: Vec<Option<String>> = data_rows
            .iter()
            .map(|row| row.get(idx).cloned().flatten())
            .collect();
        columns.insert(name.clone(), values);
    }

    Ok(Projection {
        headers,
        columns,
        row_count: data_rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<Option<&str>>>) -> Grid {
        Grid::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(|v| v.map(String::from)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_empty_grid_rejected() {
        let err = project(&Grid::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyGrid));
    }

    #[test]
    fn test_header_synthesis() {
        let g = grid(vec![vec![Some("amount"), None, Some("memo")]]);
        let projection = project(&g).unwrap();

        assert_eq!(projection.headers, vec!["amount", "Column2", "memo"]);
        assert_eq!(projection.row_count, 0);
    }

    #[test]
    fn test_densification_pads_and_truncates() {
        let g = grid(vec![
            vec![Some("a"), Some("b")],
            vec![Some("1")],
            vec![Some("2"), Some("3"), Some("dropped")],
        ]);
        let projection = project(&g).unwrap();

        assert_eq!(
            projection.column("a").unwrap(),
            &[Some("1".to_string()), Some("2".to_string())]
        );
        assert_eq!(
            projection.column("b").unwrap(),
            &[None, Some("3".to_string())]
        );
    }

    #[test]
    fn test_absent_values_stay_absent() {
        let g = grid(vec![
            vec![Some("a"), Some("b")],
            vec![None, Some("x")],
        ]);
        let projection = project(&g).unwrap();

        assert_eq!(projection.column("a").unwrap(), &[None]);
        assert_eq!(projection.column("b").unwrap(), &[Some("x".to_string())]);
    }

    #[test]
    fn test_duplicate_headers_collapse() {
        let g = grid(vec![
            vec![Some("amount"), Some("amount")],
            vec![Some("1"), Some("2")],
            vec![Some("3"), Some("4")],
        ]);
        let projection = project(&g).unwrap();

        // Both headers survive positionally, but the mapping holds one
        // key and the later column's values.
        assert_eq!(projection.headers, vec!["amount", "amount"]);
        assert_eq!(projection.columns.len(), 1);
        assert_eq!(
            projection.column("amount").unwrap(),
            &[Some("2".to_string()), Some("4".to_string())]
        );
    }

    #[test]
    fn test_unknown_column_lookup() {
        let g = grid(vec![vec![Some("a")], vec![Some("1")]]);
        let projection = project(&g).unwrap();
        assert!(projection.column("missing").is_none());
    }
}
