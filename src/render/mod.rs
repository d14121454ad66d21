//! Output rendering for analysis records.
//!
//! Pure string producers over the records in [`crate::model`]: JSON,
//! Markdown, flat tables, and the SVG chart. Writing the results
//! anywhere is the caller's responsibility.
//!
//! # Example
//!
//! ```no_run
//! use sheetlens::{benford_file, render, AnalysisOptions};
//!
//! let summary = benford_file("ledger.xlsx", &AnalysisOptions::default())?;
//! let json = render::benford_to_json(&summary)?;
//! let chart = render::benford_chart(&summary);
//! # Ok::<(), sheetlens::Error>(())
//! ```

mod json;
mod markdown;
mod svg;
mod table;

pub use json::{benford_to_json, summary_to_json};
pub use markdown::{benford_markdown, summary_markdown};
pub use svg::{benford_chart, render_chart};
pub use table::{benford_table, numeric_summary_table};
