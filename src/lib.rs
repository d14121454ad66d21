//! # sheetlens
//!
//! Spreadsheet container extraction with descriptive and Benford's-Law
//! statistics.
//!
//! This library decodes a zip-packaged XML worksheet into a dense
//! row/column grid without a full spreadsheet dependency, infers column
//! types, computes missingness, date ranges, and numeric summaries, and
//! compares a numeric column's leading digits against the Benford
//! distribution — including an SVG rendering of the comparison.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetlens::{benford_file, summarize_file, render, AnalysisOptions};
//!
//! let options = AnalysisOptions::default();
//!
//! // Whole-sheet profile
//! let summary = summarize_file("ledger.xlsx", &options)?;
//! println!("{} rows, {} columns", summary.row_count, summary.column_count);
//!
//! // Benford comparison with auto-selected column
//! let benford = benford_file("ledger.xlsx", &options)?;
//! std::fs::write("benford_chart.svg", render::benford_chart(&benford))?;
//! # Ok::<(), sheetlens::Error>(())
//! ```
//!
//! ## Lower-level access
//!
//! ```no_run
//! use sheetlens::grid::{project, SheetReader};
//!
//! let reader = SheetReader::open("ledger.xlsx")?;
//! let grid = reader.read_grid(&reader.first_worksheet()?)?;
//! let projection = project(&grid)?;
//! # Ok::<(), sheetlens::Error>(())
//! ```
//!
//! The pipeline runs strictly forward — decoder, projector, inference,
//! statistics/Benford, renderer — synchronously and single-threaded;
//! each run opens, consumes, and releases its own container.

pub mod analysis;
pub mod analyze;
pub mod container;
pub mod error;
pub mod grid;
pub mod model;
pub mod render;

// Re-exports
pub use analyze::{
    benford_file, benford_projection, load_projection, summarize_file, summarize_projection,
    AnalysisOptions,
};
pub use container::SheetContainer;
pub use error::{Error, Result};
pub use grid::{column_index, project, Grid, Projection, SharedStrings, SheetReader};
pub use model::{BenfordDigit, BenfordSummary, DateRange, NumericStats, SheetSummary};
