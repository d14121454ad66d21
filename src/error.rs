//! Error types for the sheetlens library.

use std::io;
use thiserror::Error;

/// Result type alias for sheetlens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during extraction and analysis.
///
/// Every variant is fatal to the current run. Per-value malformation
/// (unparseable numbers, unmatched date formats, shared-string indexes
/// outside the table) is handled by exclusion and never surfaces here;
/// only the emptiness of a whole derived sequence does.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container path is missing or not a valid ZIP archive.
    #[error("cannot open container: {0}")]
    ContainerOpen(String),

    /// The requested worksheet stream is absent from the container.
    #[error("worksheet not found in container: {0}")]
    MissingSheet(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// The worksheet parsed to zero rows; nothing to analyze.
    #[error("no rows found in worksheet")]
    EmptyGrid,

    /// An explicitly requested column name has no matching header.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Auto-selection found no column meeting the minimum sample threshold.
    #[error("no numeric column has at least {min_count} values")]
    NoEligibleColumn {
        /// The threshold that no column met.
        min_count: usize,
    },

    /// A statistical computation has zero eligible values after filtering.
    #[error("no usable values in column: {0}")]
    EmptySample(String),

    /// Error during report rendering.
    #[error("render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ContainerOpen(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
