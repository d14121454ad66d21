//! Pipeline entry points and run configuration.

use crate::analysis::{
    detect_date_range, distribution, missing_count, numeric_stats, numeric_values, pick_column,
    DEFAULT_MIN_COUNT,
};
use crate::error::{Error, Result};
use crate::grid::{project, Projection, SheetReader};
use crate::model::{BenfordSummary, SheetSummary};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Configuration for one analysis run.
///
/// Replaces implicit defaults with explicit values passed into the
/// entry points: which worksheet stream to parse, which column to
/// analyze, and the auto-selection threshold.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Worksheet stream path inside the container; `None` selects the
    /// first worksheet in sorted order.
    pub sheet: Option<String>,
    /// Column header to analyze; `None` auto-selects.
    pub column: Option<String>,
    /// Minimum numeric sample size for auto-selection.
    pub min_count: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            sheet: None,
            column: None,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl AnalysisOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Address a specific worksheet stream.
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Analyze a specific column instead of auto-selecting.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Set the auto-selection sample threshold.
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }
}

/// Open the container, decode the addressed worksheet, and project it.
pub fn load_projection(path: impl AsRef<Path>, options: &AnalysisOptions) -> Result<Projection> {
    let reader = SheetReader::open(path)?;
    let sheet = match &options.sheet {
        Some(sheet) => sheet.clone(),
        None => reader.first_worksheet()?,
    };
    let grid = reader.read_grid(&sheet)?;
    project(&grid)
}

/// Summarize a workbook: shape, missingness, date ranges, numeric stats.
///
/// # Example
///
/// ```no_run
/// use sheetlens::{summarize_file, AnalysisOptions};
///
/// let summary = summarize_file("ledger.xlsx", &AnalysisOptions::default())?;
/// println!("{} rows, {} columns", summary.row_count, summary.column_count);
/// # Ok::<(), sheetlens::Error>(())
/// ```
pub fn summarize_file(
    path: impl AsRef<Path>,
    options: &AnalysisOptions,
) -> Result<SheetSummary> {
    let path = path.as_ref();
    let projection = load_projection(path, options)?;
    Ok(summarize_projection(&path.display().to_string(), &projection))
}

/// Summarize an already-projected grid.
pub fn summarize_projection(file: &str, projection: &Projection) -> SheetSummary {
    let mut missing_values = Vec::new();
    let mut date_columns = Vec::new();
    let mut numeric_summary = Vec::new();

    for name in unique_headers(&projection.headers) {
        let values = match projection.column(name) {
            Some(values) => values,
            None => continue,
        };

        missing_values.push((name.to_string(), missing_count(values)));

        if let Some(range) = detect_date_range(values) {
            date_columns.push((name.to_string(), range));
        }

        let numbers = numeric_values(values);
        if !numbers.is_empty() {
            numeric_summary.push((name.to_string(), numeric_stats(&numbers)));
        }
    }

    SheetSummary {
        file: file.to_string(),
        row_count: projection.row_count,
        column_count: projection.headers.len(),
        columns: projection.headers.clone(),
        missing_values,
        date_columns,
        numeric_summary,
    }
}

/// Run the Benford comparison for a workbook.
///
/// The column comes from `options.column` when given (its header must
/// exist), otherwise from auto-selection over the numeric columns.
pub fn benford_file(path: impl AsRef<Path>, options: &AnalysisOptions) -> Result<BenfordSummary> {
    let path = path.as_ref();
    let projection = load_projection(path, options)?;
    benford_projection(&path.display().to_string(), &projection, options)
}

/// Run the Benford comparison over an already-projected grid.
pub fn benford_projection(
    file: &str,
    projection: &Projection,
    options: &AnalysisOptions,
) -> Result<BenfordSummary> {
    let mut numeric_columns: HashMap<String, Vec<f64>> = HashMap::new();
    for name in unique_headers(&projection.headers) {
        if let Some(values) = projection.column(name) {
            numeric_columns.insert(name.to_string(), numeric_values(values));
        }
    }

    let column = match &options.column {
        Some(name) => {
            if !projection.headers.iter().any(|header| header == name) {
                return Err(Error::ColumnNotFound(name.clone()));
            }
            name.clone()
        }
        None => pick_column(&projection.headers, &numeric_columns, options.min_count)?.to_string(),
    };

    let values = numeric_columns
        .get(&column)
        .map(|values| values.as_slice())
        .unwrap_or(&[]);
    let dist = distribution(&column, values)?;

    Ok(BenfordSummary {
        file: file.to_string(),
        column,
        total_values: dist.total,
        digits: dist.digits,
    })
}

/// Header names with duplicates dropped, first occurrence kept.
fn unique_headers(headers: &[String]) -> impl Iterator<Item = &str> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .map(|name| name.as_str())
        .filter(move |name| seen.insert(*name))
}
