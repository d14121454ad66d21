//! Container-to-grid extraction.
//!
//! This module decodes a zip-packaged XML worksheet into a dense
//! row/column [`Grid`] and projects it column-major under header names.
//!
//! # Example
//!
//! ```no_run
//! use sheetlens::grid::{project, SheetReader};
//!
//! let reader = SheetReader::open("ledger.xlsx")?;
//! let sheet = reader.first_worksheet()?;
//! let grid = reader.read_grid(&sheet)?;
//! let projection = project(&grid)?;
//!
//! for name in &projection.headers {
//!     println!("{}", name);
//! }
//! # Ok::<(), sheetlens::Error>(())
//! ```

mod decoder;
mod project;
mod shared_strings;

pub use decoder::{column_index, parse_worksheet, Grid, SheetReader};
pub use project::{project, Projection};
pub use shared_strings::SharedStrings;
