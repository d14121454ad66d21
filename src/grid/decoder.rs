//! Worksheet XML decoding into a dense row/column grid.

use crate::container::{SheetContainer, SHARED_STRINGS_PATH, WORKSHEET_PREFIX};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

use super::shared_strings::SharedStrings;

/// Decoded cell text values, row by row in document order.
///
/// Rows are independently sparse: each row's length is one more than its
/// highest populated column index, and unpopulated positions are `None`.
/// The grid does not pre-pad to a global width; that happens during
/// projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    /// Build a grid directly from rows.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// All rows in document order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decode a spreadsheet cell reference into a zero-based column index.
///
/// Column letters form a base-26 positional number (A=1 … Z=26, AA=27).
/// Returns `None` when the reference carries no letters.
///
/// # Example
///
/// ```
/// use sheetlens::grid::column_index;
///
/// assert_eq!(column_index("A1"), Some(0));
/// assert_eq!(column_index("AB12"), Some(27));
/// ```
pub fn column_index(cell_ref: &str) -> Option<usize> {
    let mut index: usize = 0;
    let mut saw_letter = false;
    for ch in cell_ref.chars() {
        if !ch.is_ascii_alphabetic() {
            continue;
        }
        saw_letter = true;
        index = index * 26 + (ch.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    if saw_letter {
        Some(index - 1)
    } else {
        None
    }
}

/// Reader over one workbook container.
///
/// Holds the container and its shared string table for the duration of a
/// single analysis run.
pub struct SheetReader {
    container: SheetContainer,
    shared_strings: SharedStrings,
}

impl SheetReader {
    /// Open a workbook container for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = SheetContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a reader from workbook bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = SheetContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    fn from_container(container: SheetContainer) -> Result<Self> {
        // An absent shared-string stream means an empty table, not an error.
        let shared_strings = if container.exists(SHARED_STRINGS_PATH) {
            SharedStrings::parse(&container.read_xml(SHARED_STRINGS_PATH)?)?
        } else {
            SharedStrings::default()
        };

        Ok(Self {
            container,
            shared_strings,
        })
    }

    /// The shared string table resolved for this container.
    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }

    /// Worksheet stream names in sorted order.
    pub fn worksheet_paths(&self) -> Vec<String> {
        self.container.worksheet_paths()
    }

    /// The first worksheet stream in sorted order.
    pub fn first_worksheet(&self) -> Result<String> {
        self.worksheet_paths()
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingSheet(format!("{}*", WORKSHEET_PREFIX)))
    }

    /// Decode the named worksheet stream into a [`Grid`].
    pub fn read_grid(&self, sheet_path: &str) -> Result<Grid> {
        let xml = self.container.read_xml(sheet_path)?;
        parse_worksheet(&xml, &self.shared_strings)
    }
}

/// Parse worksheet XML into a grid, row by row in document order.
///
/// A cell missing either its position reference or its value node is
/// skipped. Shared-string references are dereferenced through the table;
/// an index that does not parse or falls outside the table excludes the
/// cell rather than aborting the run.
pub fn parse_worksheet(xml: &str, strings: &SharedStrings) -> Result<Grid> {
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut in_cell = false;
    let mut in_value = false;
    // Column index -> value for the row being decoded. Absent values still
    // occupy their position so the row extends to them.
    let mut cells: BTreeMap<usize, Option<String>> = BTreeMap::new();
    let mut cell_column: Option<usize> = None;
    let mut cell_is_shared = false;
    let mut saw_value_node = false;
    let mut value_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                b"row" => {
                    cells.clear();
                }
                b"c" => {
                    in_cell = true;
                    cell_column = None;
                    cell_is_shared = false;
                    saw_value_node = false;
                    value_text.clear();

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"r" => {
                                cell_column =
                                    column_index(&String::from_utf8_lossy(&attr.value));
                            }
                            b"t" => {
                                cell_is_shared = attr.value.as_ref() == b"s";
                            }
                            _ => {}
                        }
                    }
                }
                b"v" if in_cell => {
                    in_value = true;
                    saw_value_node = true;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                // A row with no cells still appears in the grid.
                b"row" => rows.push(Vec::new()),
                b"v" if in_cell => {
                    saw_value_node = true;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_value {
                    value_text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                b"row" => {
                    rows.push(expand_row(&mut cells));
                }
                b"c" => {
                    if let (Some(column), true) = (cell_column, saw_value_node) {
                        let value = if value_text.is_empty() {
                            None
                        } else {
                            Some(std::mem::take(&mut value_text))
                        };
                        store_cell(&mut cells, column, value, cell_is_shared, strings);
                    }
                    in_cell = false;
                }
                b"v" => {
                    in_value = false;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(Grid::from_rows(rows))
}

/// Resolve one decoded cell into the row map.
fn store_cell(
    cells: &mut BTreeMap<usize, Option<String>>,
    column: usize,
    value: Option<String>,
    is_shared: bool,
    strings: &SharedStrings,
) {
    if !is_shared {
        cells.insert(column, value);
        return;
    }

    match value {
        Some(raw) => {
            // Unresolvable index: the cell is excluded, not the run aborted.
            if let Some(resolved) = raw.trim().parse::<usize>().ok().and_then(|i| strings.get(i)) {
                cells.insert(column, Some(resolved.to_string()));
            }
        }
        // Shared-string cell with an empty value node keeps its slot.
        None => {
            cells.insert(column, None);
        }
    }
}

/// Expand a row's cell map into a sequence sized to its highest index.
fn expand_row(cells: &mut BTreeMap<usize, Option<String>>) -> Vec<Option<String>> {
    let width = cells.keys().next_back().map_or(0, |max| max + 1);
    let mut row = vec![None; width];
    for (index, value) in std::mem::take(cells) {
        row[index] = value;
    }
    row
}
